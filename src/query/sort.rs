//! Sort directives and their ordered composite.
//!
//! The backend reads sort precedence from value order inside a single
//! `sort` parameter, not from separate parameters, so all directives
//! render as one comma-joined composite in insertion order.

use crate::field::Field;
use crate::params::{Params, ToParams};
use std::time::{SystemTime, UNIX_EPOCH};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// What a sort directive orders by
#[derive(Debug, Clone, PartialEq)]
enum SortTarget {
    Field(Field),
    /// Relevance score pseudo-field
    Score,
    /// Random pseudo-field; the seed is fixed at creation so repeated
    /// serialization of the same query renders the same value
    Random { seed: u16 },
}

/// One sort directive: target plus direction
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    target: SortTarget,
    direction: Direction,
}

impl Sort {
    pub fn ascending(field: Field) -> Self {
        Self {
            target: SortTarget::Field(field),
            direction: Direction::Ascending,
        }
    }

    pub fn descending(field: Field) -> Self {
        Self {
            target: SortTarget::Field(field),
            direction: Direction::Descending,
        }
    }

    /// Order by relevance score
    pub fn by_score(direction: Direction) -> Self {
        Self {
            target: SortTarget::Score,
            direction,
        }
    }

    /// Order randomly; combines with field sorts added before it
    pub fn random() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u16)
            .unwrap_or(0);
        Self {
            target: SortTarget::Random { seed },
            direction: Direction::Ascending,
        }
    }

    /// Rendered form, e.g. `price_f asc`
    fn rendered(&self) -> String {
        let name = match &self.target {
            SortTarget::Field(field) => field.indexed_name.clone(),
            SortTarget::Score => "score".to_string(),
            SortTarget::Random { seed } => format!("random_{}", seed),
        };
        format!("{} {}", name, self.direction.as_str())
    }
}

/// Ordered sequence of sort directives
#[derive(Debug, Clone, Default)]
pub struct SortComposite {
    sorts: Vec<Sort>,
}

impl SortComposite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directive; insertion order is tie-break precedence
    pub fn add(&mut self, sort: Sort) {
        self.sorts.push(sort);
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sorts.len()
    }
}

impl ToParams for SortComposite {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if !self.sorts.is_empty() {
            let composite = self
                .sorts
                .iter()
                .map(Sort::rendered)
                .collect::<Vec<_>>()
                .join(", ");
            params.set("sort", composite);
        }
        params
    }
}
