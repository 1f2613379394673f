//! Page/per-page state, translated to offset/limit at serialization time.

use crate::error::{Error, Result};
use crate::params::{Params, ToParams};

/// Pagination window for one query.
///
/// `page` is 1-based. The zero-based `start` offset and `rows` limit are
/// derived only when parameters are produced; the raw window stays
/// readable so the caller can correlate a response back to the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
    default_per_page: u32,
}

impl Pagination {
    pub fn new(default_per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: default_per_page,
            default_per_page,
        }
    }

    /// Overwrite the window. `per_page = None` falls back to the
    /// configured default. Rejects `page = 0` and `per_page = 0`; any
    /// upper clamping is the backend's policy, not ours.
    pub fn set(&mut self, page: u32, per_page: Option<u32>) -> Result<()> {
        if page < 1 {
            return Err(Error::configuration("page must be at least 1"));
        }
        let per_page = per_page.unwrap_or(self.default_per_page);
        if per_page < 1 {
            return Err(Error::configuration("per_page must be at least 1"));
        }
        self.page = page;
        self.per_page = per_page;
        Ok(())
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

impl ToParams for Pagination {
    fn to_params(&self) -> Params {
        let start = (self.page - 1) * self.per_page;
        let mut params = Params::new();
        params.set("start", start.to_string());
        params.set("rows", self.per_page.to_string());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_defaults() {
        let pagination = Pagination::new(30);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.per_page(), 30);
    }

    #[test]
    fn test_offset_translation() {
        let mut pagination = Pagination::new(30);
        pagination.set(3, Some(20)).unwrap();

        let params = pagination.to_params();
        assert_eq!(params.get("start"), Some(&ParamValue::Scalar("40".into())));
        assert_eq!(params.get("rows"), Some(&ParamValue::Scalar("20".into())));
    }

    #[test]
    fn test_none_per_page_uses_default() {
        let mut pagination = Pagination::new(25);
        pagination.set(1, None).unwrap();
        assert_eq!(pagination.per_page(), 25);
    }

    #[test]
    fn test_zero_page_rejected() {
        let mut pagination = Pagination::new(30);
        assert!(matches!(
            pagination.set(0, Some(10)),
            Err(Error::Configuration { .. })
        ));
        // State untouched on rejection
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_zero_per_page_rejected() {
        let mut pagination = Pagination::new(30);
        assert!(matches!(
            pagination.set(1, Some(0)),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_first_page_starts_at_zero() {
        let pagination = Pagination::new(30);
        let params = pagination.to_params();
        assert_eq!(params.get("start"), Some(&ParamValue::Scalar("0".into())));
    }
}
