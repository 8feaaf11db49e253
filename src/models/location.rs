//! Location model.

use serde::{Deserialize, Serialize};

/// Represents a work site. Consumed by the engine only as a grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier for the location.
    pub id: String,
    /// Human-readable name for display purposes.
    pub display_name: String,
}
