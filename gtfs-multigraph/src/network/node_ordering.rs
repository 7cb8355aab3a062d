use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// the order in which node indices are assigned.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeOrdering {
    /// order of discovery while walking stops.txt; depends on the row order of the feed
    #[default]
    Discovery,
    /// lexicographic order of canonical stop id; stable across reordered feeds
    CanonicalId,
}
