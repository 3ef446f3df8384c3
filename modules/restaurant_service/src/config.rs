//! Configuration for restaurant service module

use serde::{Deserialize, Serialize};

/// Restaurant service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Only accept forward order status moves (PENDING -> ... -> PAID)
    #[serde(default)]
    pub strict_status_transitions: bool,

    /// Maximum number of lines accepted in a single order
    #[serde(default = "default_max_lines_per_order")]
    pub max_lines_per_order: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_status_transitions: false,
            max_lines_per_order: default_max_lines_per_order(),
        }
    }
}

fn default_max_lines_per_order() -> usize {
    100
}
