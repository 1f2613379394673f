//! Scopes: ordered groups of filter restrictions.
//!
//! A scope owns the restrictions added to it and contributes one `fq`
//! clause per restriction. The query root registers a derived text-fields
//! scope when the caller wants query-time narrowing over full-text fields
//! only; that scope rejects non-text fields at call time.

use crate::error::{Error, Result};
use crate::params::{Params, ToParams};
use crate::query::restriction::Restriction;

/// Which fields a scope will accept restrictions on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldPolicy {
    /// Any resolved field
    All,
    /// Only full-text fields are visible
    TextOnly,
}

/// An ordered list of filter restrictions
#[derive(Debug, Clone)]
pub struct Scope {
    policy: FieldPolicy,
    restrictions: Vec<Restriction>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            policy: FieldPolicy::All,
            restrictions: Vec::new(),
        }
    }

    /// A derived scope over text fields only
    pub(crate) fn text_fields() -> Self {
        Self {
            policy: FieldPolicy::TextOnly,
            restrictions: Vec::new(),
        }
    }

    /// Append a restriction; each one becomes an independent filter clause.
    ///
    /// Under the text-only policy, a restriction touching any non-text
    /// field is rejected.
    pub fn add_restriction(&mut self, restriction: Restriction) -> Result<()> {
        if self.policy == FieldPolicy::TextOnly {
            if let Some(field) = restriction.fields().iter().find(|f| !f.is_text()) {
                return Err(Error::configuration(format!(
                    "field `{}` is not full-text searchable in this scope",
                    field.name
                )));
            }
        }
        self.restrictions.push(restriction);
        Ok(())
    }

    /// Append the negation of a restriction
    pub fn add_negated_restriction(&mut self, restriction: Restriction) -> Result<()> {
        self.add_restriction(restriction.negated())
    }

    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl ToParams for Scope {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        for restriction in &self.restrictions {
            params.push("fq", restriction.boolean_phrase());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, FieldKind};
    use crate::params::ParamValue;

    #[test]
    fn test_each_restriction_is_own_clause() {
        let mut scope = Scope::new();
        scope
            .add_restriction(Restriction::equal_to(
                Field::new("category", "category_s", FieldKind::String),
                "books",
            ))
            .unwrap();
        scope
            .add_restriction(Restriction::equal_to(
                Field::new("in_stock", "in_stock_b", FieldKind::Boolean),
                true,
            ))
            .unwrap();

        let params = scope.to_params();
        assert_eq!(
            params.get("fq"),
            Some(&ParamValue::List(vec![
                "category_s:books".to_string(),
                "in_stock_b:true".to_string(),
            ]))
        );
    }

    #[test]
    fn test_empty_scope_contributes_nothing() {
        assert!(Scope::new().to_params().is_empty());
    }

    #[test]
    fn test_text_scope_accepts_text_fields() {
        let mut scope = Scope::text_fields();
        let result = scope.add_restriction(Restriction::equal_to(
            Field::new("description", "description_text", FieldKind::Text),
            "wireless",
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn test_text_scope_rejects_non_text_fields() {
        let mut scope = Scope::text_fields();
        let result = scope.add_restriction(Restriction::equal_to(
            Field::new("price", "price_f", FieldKind::Float),
            10.0,
        ));
        assert!(matches!(result, Err(Error::Configuration { .. })));
        assert!(scope.is_empty());
    }
}
