//! Field references consumed from the schema collaborator.
//!
//! The query layer never resolves domain field names itself: a [`Setup`]
//! is handed in pre-validated, and every mutation operation takes
//! already-resolved [`Field`] values. Components only read the backend
//! `indexed_name` when producing their parameter contributions.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Backend-side type of an indexed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Tokenized full-text field, the only kind searchable by keywords
    Text,
    String,
    Integer,
    Float,
    Boolean,
    Time,
}

/// A resolved field reference: domain name plus backend-native identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Name the application uses
    pub name: String,
    /// Identifier the search backend indexes under
    pub indexed_name: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, indexed_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            indexed_name: indexed_name.into(),
            kind,
        }
    }

    /// Whether keywords and highlighting may target this field
    pub fn is_text(&self) -> bool {
        self.kind == FieldKind::Text
    }
}

/// Field-resolution capability supplied by the schema layer.
///
/// Holds the fields visible to one query. Resolution is infallible by
/// contract; `field` returns `None` only for names the caller never
/// registered, which the caller is expected to have validated upstream.
#[derive(Debug, Clone, Default)]
pub struct Setup {
    fields: AHashMap<String, Field>,
}

impl Setup {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
        }
    }

    /// Resolve a domain name to its field
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// All text-typed fields, in unspecified order
    pub fn text_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values().filter(|field| field.is_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_setup() -> Setup {
        Setup::new([
            Field::new("title", "title_text", FieldKind::Text),
            Field::new("category", "category_s", FieldKind::String),
            Field::new("price", "price_f", FieldKind::Float),
        ])
    }

    #[test]
    fn test_field_resolution() {
        let setup = sample_setup();
        let field = setup.field("category").unwrap();
        assert_eq!(field.indexed_name, "category_s");
        assert_eq!(field.kind, FieldKind::String);
    }

    #[test]
    fn test_unknown_field() {
        let setup = sample_setup();
        assert!(setup.field("missing").is_none());
    }

    #[test]
    fn test_text_fields_filtered() {
        let setup = sample_setup();
        let names: Vec<_> = setup.text_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["title"]);
    }
}
