//! Faceting directives.
//!
//! Field facets count every distinct value of one field. Query facets
//! count arbitrary named subsets: each row is a labeled restriction group
//! rendered as a `facet.query` clause, and the name survives the
//! round trip so response counts can be matched back to the request
//! that declared them.

use crate::field::Field;
use crate::params::{Params, ToParams};
use crate::query::restriction::Restriction;

/// Order in which the backend returns facet values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSort {
    /// Most populous values first
    Count,
    /// Lexicographic by value
    Index,
}

/// Per-field facet options, all optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetOptions {
    /// Maximum number of values to return
    pub limit: Option<u32>,
    /// Drop values with fewer documents than this
    pub minimum_count: Option<u32>,
    pub sort: Option<FacetSort>,
    /// Only count values with this prefix
    pub prefix: Option<String>,
}

/// Facet over the distinct values of one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFacet {
    field: Field,
    options: FacetOptions,
}

impl FieldFacet {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            options: FacetOptions::default(),
        }
    }

    pub fn with_options(field: Field, options: FacetOptions) -> Self {
        Self { field, options }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }
}

impl ToParams for FieldFacet {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.set("facet", "true");
        params.push("facet.field", self.field.indexed_name.clone());

        let per_field = |suffix: &str| format!("f.{}.facet.{}", self.field.indexed_name, suffix);
        if let Some(limit) = self.options.limit {
            params.set(per_field("limit"), limit.to_string());
        }
        if let Some(minimum) = self.options.minimum_count {
            params.set(per_field("mincount"), minimum.to_string());
        }
        if let Some(sort) = self.options.sort {
            let value = match sort {
                FacetSort::Count => "count",
                FacetSort::Index => "index",
            };
            params.set(per_field("sort"), value);
        }
        if let Some(prefix) = &self.options.prefix {
            params.set(per_field("prefix"), prefix.clone());
        }
        params
    }
}

/// One labeled row of a query facet
#[derive(Debug, Clone)]
pub struct QueryFacetRow {
    label: String,
    restrictions: Vec<Restriction>,
}

impl QueryFacetRow {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            restrictions: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn add_restriction(&mut self, restriction: Restriction) {
        self.restrictions.push(restriction);
    }

    /// The `facet.query` clause this row declares; the response side uses
    /// the same string to find the row's count
    pub fn boolean_phrase(&self) -> String {
        match self.restrictions.len() {
            0 => "*:*".to_string(),
            1 => self.restrictions[0].boolean_phrase(),
            _ => {
                let joined = self
                    .restrictions
                    .iter()
                    .map(Restriction::boolean_phrase)
                    .collect::<Vec<_>>()
                    .join(" AND ");
                format!("({})", joined)
            }
        }
    }
}

/// A named facet over arbitrary document subsets
#[derive(Debug, Clone)]
pub struct QueryFacet {
    name: String,
    rows: Vec<QueryFacetRow>,
}

impl QueryFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a labeled row and return it for restriction population
    pub fn add_row(&mut self, label: impl Into<String>) -> &mut QueryFacetRow {
        self.rows.push(QueryFacetRow::new(label));
        self.rows.last_mut().unwrap()
    }

    pub fn rows(&self) -> &[QueryFacetRow] {
        &self.rows
    }

    /// Find the row that declared the given `facet.query` clause
    pub fn row(&self, phrase: &str) -> Option<&QueryFacetRow> {
        self.rows.iter().find(|row| row.boolean_phrase() == phrase)
    }
}

impl ToParams for QueryFacet {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if self.rows.is_empty() {
            return params;
        }
        params.set("facet", "true");
        for row in &self.rows {
            params.push("facet.query", row.boolean_phrase());
        }
        params
    }
}
