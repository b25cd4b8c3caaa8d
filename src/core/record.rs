//! Generic REST record protocol
//!
//! Every entity type the server exposes (categories, facts) conforms to
//! the same collection conventions: `{resource}.json` for inserts,
//! `{resource}/{id}.json` for find/update/destroy, `{resource}/search.json`
//! for lookups, and a `{ entity: { field: value } }` envelope on the
//! wire. This trait captures those conventions once; concrete types
//! supply their names, their envelope, and an enumerated field table.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::remote::RestClient;

/// Type-specific search switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Ask the server to inline each category's facts (categories only).
    pub include_facts: bool,
}

/// A record synchronized against a REST collection.
///
/// `id` is `Some` exactly when the record has been persisted, either by
/// a successful insert or by decoding a server envelope. Records with
/// no id must never reach `update` or `destroy`.
pub trait RestfulRecord: Default {
    /// Pluralized collection path segment, e.g. "categories".
    const RESOURCE_NAME: &'static str;

    /// Singular envelope key, e.g. "category".
    const ENTITY_NAME: &'static str;

    fn id(&self) -> Option<i64>;

    /// Request body for insert/update: `{ ENTITY_NAME: { ... } }`.
    fn envelope(&self) -> Value;

    /// Assign known fields from a decoded field map. Keys matching no
    /// known field are silently skipped.
    fn apply(&mut self, fields: &Map<String, Value>);

    /// Extra query parameters for search. Default: none.
    fn search_params(_options: &SearchOptions) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Build an instance from a decoded envelope or bare field map.
    fn from_value(value: &Value) -> Self {
        let mut record = Self::default();
        record.apply_value(value);
        record
    }

    /// Unwrap the entity envelope when present, then apply the fields.
    fn apply_value(&mut self, value: &Value) {
        let fields = value.get(Self::ENTITY_NAME).unwrap_or(value);
        if let Some(map) = fields.as_object() {
            self.apply(map);
        }
    }

    /// Fetch one record by id.
    fn find(client: &RestClient, id: i64) -> Result<Self> {
        let value = client
            .get(&format!("/{}/{}.json", Self::RESOURCE_NAME, id), &[])?
            .unwrap_or(Value::Null);
        Ok(Self::from_value(&value))
    }

    /// Search the collection; results keep the server's order.
    fn search(client: &RestClient, query: &str, options: &SearchOptions) -> Result<Vec<Self>> {
        let mut params = vec![("query", query.to_string())];
        params.extend(Self::search_params(options));
        let value = client.get(&format!("/{}/search.json", Self::RESOURCE_NAME), &params)?;
        Ok(decode_sequence(value.as_ref()))
    }

    /// Daily digest of records.
    fn daily(client: &RestClient, params: &[(&str, String)]) -> Result<Vec<Self>> {
        let value = client.get(&format!("/{}/daily.json", Self::RESOURCE_NAME), params)?;
        Ok(decode_sequence(value.as_ref()))
    }

    /// Search, requiring at least one match.
    fn search_one_or_more(
        client: &RestClient,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Self>> {
        let records = Self::search(client, query, options)?;
        if records.is_empty() {
            return Err(Error::ImpreciseQuery(format!(
                "no objects matched '{}'",
                query
            )));
        }
        Ok(records)
    }

    /// Search, requiring exactly one match after exact-id refinement.
    fn search_one(client: &RestClient, query: &str, options: &SearchOptions) -> Result<Self> {
        let records = Self::search_one_or_more(client, query, options)?;
        disambiguate(records, query)
    }

    /// Insert when unpersisted, update otherwise.
    fn save(&mut self, client: &RestClient) -> Result<()> {
        if self.id().is_none() {
            self.insert(client)
        } else {
            self.update(client)
        }
    }

    /// POST the envelope; re-apply the server's response onto self so
    /// server-assigned fields (id, slug) land locally. A failed insert
    /// leaves the record unpersisted.
    fn insert(&mut self, client: &RestClient) -> Result<()> {
        let response = client.post(&format!("/{}.json", Self::RESOURCE_NAME), &self.envelope())?;
        if let Some(value) = response {
            self.apply_value(&value);
        }
        Ok(())
    }

    /// PUT the envelope. The server invents no fields on update, so the
    /// response is not re-applied.
    fn update(&self, client: &RestClient) -> Result<()> {
        let id = self.id().expect("update requires a persisted record");
        client.put(
            &format!("/{}/{}.json", Self::RESOURCE_NAME, id),
            &self.envelope(),
        )?;
        Ok(())
    }

    /// DELETE the record. Terminal: the instance must not be reused.
    fn destroy(&self, client: &RestClient) -> Result<()> {
        let id = self.id().expect("destroy requires a persisted record");
        client.delete(&format!("/{}/{}.json", Self::RESOURCE_NAME, id))?;
        Ok(())
    }
}

/// Decode a JSON array of envelopes into records, server order kept.
fn decode_sequence<R: RestfulRecord>(value: Option<&Value>) -> Vec<R> {
    match value.and_then(Value::as_array) {
        Some(items) => items.iter().map(R::from_value).collect(),
        None => Vec::new(),
    }
}

/// Reduce a multi-match result to one record: when several records came
/// back, keep only those whose id rendered as text equals the query
/// verbatim, so a name collision can be broken by typing the id.
pub fn disambiguate<R: RestfulRecord>(mut records: Vec<R>, query: &str) -> Result<R> {
    if records.len() > 1 {
        records.retain(|r| r.id().is_some_and(|id| id.to_string() == query));
    }
    match records.len() {
        1 => Ok(records.swap_remove(0)),
        _ => Err(Error::ImpreciseQuery(format!(
            "more than one object match for query '{}'",
            query
        ))),
    }
}
