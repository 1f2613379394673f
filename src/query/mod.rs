//! Query construction: components, mutation operations, and the final
//! merge into one parameter mapping.
//!
//! A [`Query`] owns an ordered list of components. The constructor
//! registers the three singletons (base query, pagination, sort
//! composite); every other mutation either updates one of those in place
//! or appends a new component. Serialization walks the list in
//! registration order and folds each component's contribution through
//! the merge rule in [`crate::params`].

pub mod base;
pub mod facet;
pub mod highlight;
pub mod local;
pub mod pagination;
pub mod restriction;
pub mod scope;
pub mod sort;

pub use base::{BaseQuery, FieldWeight, KeywordOptions};
pub use facet::{FacetOptions, FacetSort, FieldFacet, QueryFacet, QueryFacetRow};
pub use highlight::{HighlightOptions, Highlighting};
pub use local::{Coordinates, Local};
pub use pagination::Pagination;
pub use restriction::{Restriction, Value};
pub use scope::Scope;
pub use sort::{Direction, Sort, SortComposite};

use crate::config::QueryConfig;
use crate::error::{Error, Result};
use crate::field::Setup;
use crate::params::{merge_all, Params, ToParams};
use ahash::AHashMap;
use std::sync::Arc;
use tracing::{debug, trace};

// Singleton component slots, fixed by the constructor
const BASE_SLOT: usize = 0;
const PAGINATION_SLOT: usize = 1;
const SORT_SLOT: usize = 2;

/// The closed set of component kinds a query can hold
#[derive(Debug, Clone)]
pub enum Component {
    Base(BaseQuery),
    Pagination(Pagination),
    Sort(SortComposite),
    Restriction(Restriction),
    Scope(Scope),
    FieldFacet(FieldFacet),
    QueryFacet(QueryFacet),
    Local(Local),
    Highlight(Highlighting),
}

impl Component {
    fn kind(&self) -> &'static str {
        match self {
            Component::Base(_) => "base",
            Component::Pagination(_) => "pagination",
            Component::Sort(_) => "sort",
            Component::Restriction(_) => "restriction",
            Component::Scope(_) => "scope",
            Component::FieldFacet(_) => "field_facet",
            Component::QueryFacet(_) => "query_facet",
            Component::Local(_) => "local",
            Component::Highlight(_) => "highlight",
        }
    }
}

impl ToParams for Component {
    fn to_params(&self) -> Params {
        match self {
            Component::Base(c) => c.to_params(),
            Component::Pagination(c) => c.to_params(),
            Component::Sort(c) => c.to_params(),
            Component::Restriction(c) => c.to_params(),
            Component::Scope(c) => c.to_params(),
            Component::FieldFacet(c) => c.to_params(),
            Component::QueryFacet(c) => c.to_params(),
            Component::Local(c) => c.to_params(),
            Component::Highlight(c) => c.to_params(),
        }
    }
}

/// A search request under construction.
///
/// Built by one caller, serialized with [`Query::to_params`], then
/// discarded after the response is consumed. Not meant for concurrent
/// mutation; the constructing caller owns the instance for its whole
/// lifetime.
#[derive(Debug, Clone)]
pub struct Query {
    setup: Arc<Setup>,
    components: Vec<Component>,
    query_facets: AHashMap<String, usize>,
}

impl Query {
    pub fn new(setup: Arc<Setup>, config: &QueryConfig) -> Self {
        Self {
            setup,
            components: vec![
                Component::Base(BaseQuery::new()),
                Component::Pagination(Pagination::new(config.default_per_page)),
                Component::Sort(SortComposite::new()),
            ],
            query_facets: AHashMap::new(),
        }
    }

    /// The field-resolution capability this query was built against
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// All registered components, in registration order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Set the keywords and keyword options for the match clause.
    ///
    /// If the options carry a highlight sub-configuration it is taken
    /// out and registered as a [`Highlighting`] component — this method
    /// may grow the component list, not just the base query's state.
    pub fn set_keywords(&mut self, keywords: impl Into<String>, mut options: KeywordOptions) {
        if let Some(highlight) = options.highlight.take() {
            self.push_component(Component::Highlight(Highlighting::new(highlight)));
        }
        self.base_mut().set_keywords(keywords.into(), options);
    }

    /// The current keywords, if any were set
    pub fn keywords(&self) -> Option<&str> {
        self.base().keywords()
    }

    /// The base query's keyword state
    pub fn base_query(&self) -> &BaseQuery {
        self.base()
    }

    /// Append a filter restriction as its own `fq` clause
    pub fn add_restriction(&mut self, restriction: Restriction) {
        self.push_component(Component::Restriction(restriction));
    }

    /// Append the negation of a restriction
    pub fn add_negated_restriction(&mut self, restriction: Restriction) {
        self.add_restriction(restriction.negated());
    }

    /// Register a derived scope that only accepts text fields, for
    /// query-time narrowing of the searched field set. Returns the scope
    /// for restriction population.
    pub fn add_text_fields_scope(&mut self) -> &mut Scope {
        let index = self.push_component(Component::Scope(Scope::text_fields()));
        match &mut self.components[index] {
            Component::Scope(scope) => scope,
            _ => unreachable!("just pushed a scope component"),
        }
    }

    /// Append a sort directive to the composite
    pub fn add_sort(&mut self, sort: Sort) {
        match &mut self.components[SORT_SLOT] {
            Component::Sort(composite) => composite.add(sort),
            _ => unreachable!("slot 2 always holds the sort composite"),
        }
    }

    /// Append random ordering; may follow field sorts
    pub fn order_by_random(&mut self) {
        self.add_sort(Sort::random());
    }

    /// Set the pagination window. `per_page = None` uses the configured
    /// default.
    pub fn paginate(&mut self, page: u32, per_page: Option<u32>) -> Result<()> {
        match &mut self.components[PAGINATION_SLOT] {
            Component::Pagination(pagination) => pagination.set(page, per_page),
            _ => unreachable!("slot 1 always holds pagination"),
        }
    }

    /// Page this query will return
    pub fn page(&self) -> u32 {
        self.pagination().page()
    }

    /// Rows per page this query will return
    pub fn per_page(&self) -> u32 {
        self.pagination().per_page()
    }

    /// Register a distance filter around a center point
    pub fn add_location_restriction(
        &mut self,
        coordinates: Coordinates,
        miles: f64,
    ) -> Result<()> {
        let local = Local::new(coordinates, miles)?;
        self.push_component(Component::Local(local));
        Ok(())
    }

    /// Register a facet over one field's distinct values
    pub fn add_field_facet(&mut self, facet: FieldFacet) {
        self.push_component(Component::FieldFacet(facet));
    }

    /// Register a named query facet and return it for row population.
    ///
    /// Re-registering a name rebinds the lookup to the newest facet.
    pub fn add_query_facet(&mut self, name: impl Into<String>) -> &mut QueryFacet {
        let name = name.into();
        let index = self.push_component(Component::QueryFacet(QueryFacet::new(name.clone())));
        self.query_facets.insert(name, index);
        match &mut self.components[index] {
            Component::QueryFacet(facet) => facet,
            _ => unreachable!("just pushed a query facet component"),
        }
    }

    /// Look up a query facet by the exact name it was registered under.
    ///
    /// Used after the round trip to re-associate response facet counts
    /// with the request that declared them.
    pub fn query_facet(&self, name: &str) -> Result<&QueryFacet> {
        let index = self
            .query_facets
            .get(name)
            .ok_or_else(|| Error::UnknownQueryFacet {
                name: name.to_string(),
            })?;
        match &self.components[*index] {
            Component::QueryFacet(facet) => Ok(facet),
            _ => unreachable!("facet registry points at a query facet component"),
        }
    }

    /// Serialize the whole query into one flat parameter mapping.
    ///
    /// Phase one collects each component's contribution in registration
    /// order; phase two folds them with the fixed precedence rule.
    /// Infallible: merge conflicts are resolved by rule, never surfaced.
    pub fn to_params(&self) -> Params {
        let patches = self.components.iter().map(ToParams::to_params);
        let params = merge_all(patches);
        debug!(
            components = self.components.len(),
            params = params.len(),
            "serialized query"
        );
        params
    }

    fn push_component(&mut self, component: Component) -> usize {
        trace!(kind = component.kind(), "registering query component");
        self.components.push(component);
        self.components.len() - 1
    }

    fn base(&self) -> &BaseQuery {
        match &self.components[BASE_SLOT] {
            Component::Base(base) => base,
            _ => unreachable!("slot 0 always holds the base query"),
        }
    }

    fn base_mut(&mut self) -> &mut BaseQuery {
        match &mut self.components[BASE_SLOT] {
            Component::Base(base) => base,
            _ => unreachable!("slot 0 always holds the base query"),
        }
    }

    fn pagination(&self) -> &Pagination {
        match &self.components[PAGINATION_SLOT] {
            Component::Pagination(pagination) => pagination,
            _ => unreachable!("slot 1 always holds pagination"),
        }
    }
}

impl ToParams for Query {
    fn to_params(&self) -> Params {
        Query::to_params(self)
    }
}
