//! Fact record
//!
//! A fact is a piece of free text owned by one category. Content may
//! carry lightweight markdown-style emphasis markers; rendering deals
//! with those, the record stores them verbatim. `category` is a
//! denormalized copy of the owner, present only when the server chose
//! to inline it (used to show the owner's slug next to a standalone
//! fact).

use serde_json::{json, Map, Value};

use crate::core::category::Category;
use crate::core::record::RestfulRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fact {
    pub id: Option<i64>,
    pub category_id: Option<i64>,
    pub content: String,
    pub category: Option<Box<Category>>,
}

impl Fact {
    /// Fresh, unpersisted fact owned by `category_id`.
    pub fn new(content: impl Into<String>, category_id: Option<i64>) -> Self {
        Self {
            content: content.into(),
            category_id,
            ..Default::default()
        }
    }
}

impl RestfulRecord for Fact {
    const RESOURCE_NAME: &'static str = "facts";
    const ENTITY_NAME: &'static str = "fact";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn envelope(&self) -> Value {
        json!({
            "fact": {
                "id": self.id,
                "category_id": self.category_id,
                "content": self.content,
            }
        })
    }

    fn apply(&mut self, fields: &Map<String, Value>) {
        for (key, value) in fields {
            match key.as_str() {
                "id" => self.id = value.as_i64(),
                "category_id" => self.category_id = value.as_i64(),
                "content" => {
                    if let Some(content) = value.as_str() {
                        self.content = content.to_string();
                    }
                }
                "category" => {
                    self.category = Some(Box::new(Category::from_value(value)));
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_round_trip() {
        let fact = Fact {
            id: Some(42),
            category_id: Some(3),
            content: "**Matz** designed Ruby".to_string(),
            category: None,
        };

        let decoded = Fact::from_value(&fact.envelope());
        assert_eq!(decoded, fact);
    }

    #[test]
    fn apply_ignores_unknown_keys() {
        let mut fact = Fact::new("irb autocompletes", Some(1));
        fact.apply_value(&json!({"fact": {"id": 5, "votes": 3}}));
        assert_eq!(fact.id, Some(5));
        assert_eq!(fact.content, "irb autocompletes");
    }

    #[test]
    fn insert_response_flips_the_record_to_persisted() {
        let mut fact = Fact::new("blocks close over locals", Some(2));
        assert!(fact.id.is_none());

        fact.apply_value(&json!({
            "fact": {"id": 77, "category_id": 2, "content": "blocks close over locals"}
        }));

        assert_eq!(fact.id, Some(77));
        assert_eq!(fact.category_id, Some(2));
    }

    #[test]
    fn denormalized_category_decodes_for_standalone_display() {
        let fact = Fact::from_value(&json!({
            "fact": {
                "id": 8,
                "category_id": 2,
                "content": "GC is generational",
                "category": {"id": 2, "name": "ruby", "slug": "ruby"}
            }
        }));

        let category = fact.category.unwrap();
        assert_eq!(category.slug.as_deref(), Some("ruby"));
        assert_eq!(category.id, Some(2));
    }
}
