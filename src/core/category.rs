//! Category record
//!
//! Categories form a tree via `category_id` (parent; `None` = root).
//! Cycle-freedom is a server-side invariant the client trusts. `slug`
//! is server-assigned; `facts` is populated only when a search asked
//! for inclusion.

use serde_json::{json, Map, Value};

use crate::core::fact::Fact;
use crate::core::record::{RestfulRecord, SearchOptions};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub id: Option<i64>,
    pub category_id: Option<i64>,
    pub name: String,
    pub slug: Option<String>,
    pub facts: Option<Vec<Fact>>,
}

impl Category {
    /// Fresh, unpersisted category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl RestfulRecord for Category {
    const RESOURCE_NAME: &'static str = "categories";
    const ENTITY_NAME: &'static str = "category";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn envelope(&self) -> Value {
        json!({
            "category": {
                "id": self.id,
                "category_id": self.category_id,
                "name": self.name,
            }
        })
    }

    fn apply(&mut self, fields: &Map<String, Value>) {
        for (key, value) in fields {
            match key.as_str() {
                "id" => self.id = value.as_i64(),
                "category_id" => self.category_id = value.as_i64(),
                "name" => {
                    if let Some(name) = value.as_str() {
                        self.name = name.to_string();
                    }
                }
                "slug" => self.slug = value.as_str().map(str::to_string),
                "facts" => {
                    if let Some(items) = value.as_array() {
                        self.facts = Some(items.iter().map(Fact::from_value).collect());
                    }
                }
                _ => {}
            }
        }
    }

    fn search_params(options: &SearchOptions) -> Vec<(&'static str, String)> {
        if options.include_facts {
            vec![("include_facts", "true".to_string())]
        } else {
            Vec::new()
        }
    }
}
