//! # solrq - Composable Solr Query Construction
//!
//! solrq assembles a structured search request out of independent
//! components - full-text match, filters, facets, sort, pagination,
//! geo-restriction, highlighting - and serializes the whole assembly
//! into one flat parameter mapping ready to hand to a Solr transport.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`query`] - The composite [`Query`] root and every component kind
//! - [`params`] - The wire-side parameter mapping and its merge rules
//! - [`field`] - Pre-resolved field references from the schema layer
//! - [`config`] - Values consumed at query construction time
//! - [`error`] - Typed, recoverable construction errors
//!
//! ## Quick Start
//!
//! ```
//! use solrq::{Field, FieldKind, KeywordOptions, Query, QueryConfig, Restriction, Setup, Sort};
//! use std::sync::Arc;
//!
//! let setup = Arc::new(Setup::new([
//!     Field::new("title", "title_text", FieldKind::Text),
//!     Field::new("category", "category_s", FieldKind::String),
//! ]));
//!
//! let mut query = Query::new(setup.clone(), &QueryConfig::default());
//! query.set_keywords("wireless headphones", KeywordOptions::default());
//! query.add_restriction(Restriction::equal_to(
//!     setup.field("category").unwrap().clone(),
//!     "electronics",
//! ));
//! query.add_sort(Sort::descending(setup.field("title").unwrap().clone()));
//! query.paginate(2, Some(20)).unwrap();
//!
//! let params = query.to_params();
//! assert_eq!(params.get("start").unwrap().len(), 1);
//! ```
//!
//! Serialization is deterministic: the same sequence of mutation calls
//! always yields the same mapping, and repeated-key order is preserved
//! on the wire. Queries are built and serialized inside one logical
//! request flow; nothing here performs I/O.

pub mod config;
pub mod error;
pub mod field;
pub mod params;
pub mod query;

pub use config::QueryConfig;
pub use error::{Error, Result};
pub use field::{Field, FieldKind, Setup};
pub use params::{merge_all, ParamValue, Params, ToParams};
pub use query::{
    BaseQuery, Component, Coordinates, Direction, FacetOptions, FacetSort, FieldFacet,
    FieldWeight, HighlightOptions, Highlighting, KeywordOptions, Local, Pagination, Query,
    QueryFacet, QueryFacetRow, Restriction, Scope, Sort, SortComposite, Value,
};
