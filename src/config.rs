use serde::{Deserialize, Serialize};

/// Configuration consumed by queries at construction time.
///
/// Loading this from a file or environment is the caller's concern; the
/// query layer only reads the values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Rows per page used when `paginate` is called without an explicit
    /// per-page value
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
}

fn default_per_page() -> u32 {
    30
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
        }
    }
}
