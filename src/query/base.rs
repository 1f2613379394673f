//! The primary keyword match clause and its options.

use crate::field::Field;
use crate::params::{Params, ToParams};
use crate::query::highlight::HighlightOptions;

/// A text field with an optional relevance boost
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWeight {
    pub field: Field,
    pub boost: Option<f32>,
}

impl FieldWeight {
    pub fn new(field: Field) -> Self {
        Self { field, boost: None }
    }

    pub fn boosted(field: Field, boost: f32) -> Self {
        Self {
            field,
            boost: Some(boost),
        }
    }

    fn rendered(&self) -> String {
        match self.boost {
            Some(boost) => format!("{}^{}", self.field.indexed_name, boost),
            None => self.field.indexed_name.clone(),
        }
    }
}

/// Keyword-level options attached to the match clause.
///
/// Validation of option well-formedness is the backend's job; the core
/// emits what it is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordOptions {
    /// Text fields to search, each with an optional boost (`qf`)
    pub field_weights: Vec<FieldWeight>,
    /// Proximity tolerance for phrase matching (`qs`)
    pub phrase_slop: Option<u32>,
    /// Fraction or count of terms that must match (`mm`), e.g. `"75%"`
    pub minimum_match: Option<String>,
    /// Highlight sub-configuration; extracted into its own component by
    /// `Query::set_keywords`, never serialized from here
    pub highlight: Option<HighlightOptions>,
}

/// The full-text match clause every query owns exactly one of
#[derive(Debug, Clone, Default)]
pub struct BaseQuery {
    keywords: Option<String>,
    options: KeywordOptions,
}

impl BaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_keywords(&mut self, keywords: String, options: KeywordOptions) {
        self.keywords = Some(keywords);
        self.options = options;
    }

    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    pub fn options(&self) -> &KeywordOptions {
        &self.options
    }

    fn has_keywords(&self) -> bool {
        self.keywords
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}

impl ToParams for BaseQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        match (&self.keywords, self.has_keywords()) {
            (Some(keywords), true) => {
                params.set("q", keywords.clone());
                params.set("fl", "* score");
                params.set("defType", "dismax");
                if !self.options.field_weights.is_empty() {
                    let qf = self
                        .options
                        .field_weights
                        .iter()
                        .map(FieldWeight::rendered)
                        .collect::<Vec<_>>()
                        .join(" ");
                    params.set("qf", qf);
                }
                if let Some(slop) = self.options.phrase_slop {
                    params.set("qs", slop.to_string());
                }
                if let Some(mm) = &self.options.minimum_match {
                    params.set("mm", mm.clone());
                }
            }
            // Blank keywords fall back to the match-all clause
            _ => {
                params.set("q", "*:*");
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use crate::params::ParamValue;

    fn text_field(name: &str) -> Field {
        Field::new(name, format!("{}_text", name), FieldKind::Text)
    }

    #[test]
    fn test_match_all_without_keywords() {
        let params = BaseQuery::new().to_params();
        assert_eq!(params.get("q"), Some(&ParamValue::Scalar("*:*".into())));
        assert!(params.get("defType").is_none());
    }

    #[test]
    fn test_blank_keywords_match_all() {
        let mut base = BaseQuery::new();
        base.set_keywords("   ".to_string(), KeywordOptions::default());
        let params = base.to_params();
        assert_eq!(params.get("q"), Some(&ParamValue::Scalar("*:*".into())));
    }

    #[test]
    fn test_keywords_select_dismax() {
        let mut base = BaseQuery::new();
        base.set_keywords("wireless headphones".to_string(), KeywordOptions::default());
        let params = base.to_params();
        assert_eq!(
            params.get("q"),
            Some(&ParamValue::Scalar("wireless headphones".into()))
        );
        assert_eq!(
            params.get("defType"),
            Some(&ParamValue::Scalar("dismax".into()))
        );
        assert_eq!(params.get("fl"), Some(&ParamValue::Scalar("* score".into())));
    }

    #[test]
    fn test_field_weights_render_as_qf() {
        let mut base = BaseQuery::new();
        base.set_keywords(
            "headphones".to_string(),
            KeywordOptions {
                field_weights: vec![
                    FieldWeight::boosted(text_field("title"), 2.0),
                    FieldWeight::new(text_field("description")),
                ],
                ..KeywordOptions::default()
            },
        );
        let params = base.to_params();
        assert_eq!(
            params.get("qf"),
            Some(&ParamValue::Scalar("title_text^2 description_text".into()))
        );
    }

    #[test]
    fn test_slop_and_minimum_match() {
        let mut base = BaseQuery::new();
        base.set_keywords(
            "noise cancelling".to_string(),
            KeywordOptions {
                phrase_slop: Some(2),
                minimum_match: Some("75%".to_string()),
                ..KeywordOptions::default()
            },
        );
        let params = base.to_params();
        assert_eq!(params.get("qs"), Some(&ParamValue::Scalar("2".into())));
        assert_eq!(params.get("mm"), Some(&ParamValue::Scalar("75%".into())));
    }
}
