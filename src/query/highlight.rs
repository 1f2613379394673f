//! Result-snippet highlighting directives.
//!
//! Only registered when the caller asked for highlighting through the
//! keyword options; an absent component means no `hl.*` parameters on
//! the wire.

use crate::field::Field;
use crate::params::{Params, ToParams};

/// Highlighting configuration carried inside keyword options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightOptions {
    /// Fields to highlight; empty means the backend's default field set
    pub fields: Vec<Field>,
    /// Maximum snippets per field
    pub max_snippets: Option<u32>,
    /// Snippet length in characters
    pub fragment_size: Option<u32>,
    /// Collapse adjacent fragments into one
    pub merge_contiguous: bool,
}

/// The registered highlighting component
#[derive(Debug, Clone, PartialEq)]
pub struct Highlighting {
    options: HighlightOptions,
}

impl Highlighting {
    pub fn new(options: HighlightOptions) -> Self {
        Self { options }
    }
}

impl ToParams for Highlighting {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.set("hl", "on");
        for field in &self.options.fields {
            params.push("hl.fl", field.indexed_name.clone());
        }
        if let Some(snippets) = self.options.max_snippets {
            params.set("hl.snippets", snippets.to_string());
        }
        if let Some(size) = self.options.fragment_size {
            params.set("hl.fragsize", size.to_string());
        }
        if self.options.merge_contiguous {
            params.set("hl.mergeContiguous", "true");
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use crate::params::ParamValue;

    #[test]
    fn test_minimal_highlighting() {
        let params = Highlighting::new(HighlightOptions::default()).to_params();
        assert_eq!(params.get("hl"), Some(&ParamValue::Scalar("on".into())));
        assert!(params.get("hl.fl").is_none());
    }

    #[test]
    fn test_full_options() {
        let options = HighlightOptions {
            fields: vec![
                Field::new("title", "title_text", FieldKind::Text),
                Field::new("description", "description_text", FieldKind::Text),
            ],
            max_snippets: Some(3),
            fragment_size: Some(200),
            merge_contiguous: true,
        };
        let params = Highlighting::new(options).to_params();
        assert_eq!(
            params.get("hl.fl"),
            Some(&ParamValue::List(vec![
                "title_text".to_string(),
                "description_text".to_string(),
            ]))
        );
        assert_eq!(
            params.get("hl.snippets"),
            Some(&ParamValue::Scalar("3".into()))
        );
        assert_eq!(
            params.get("hl.fragsize"),
            Some(&ParamValue::Scalar("200".into()))
        );
        assert_eq!(
            params.get("hl.mergeContiguous"),
            Some(&ParamValue::Scalar("true".into()))
        );
    }
}
