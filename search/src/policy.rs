//! Search policy: the engine's configuration.

use wayfinder_grid::canon::{canonical_json_bytes, CanonError};
use wayfinder_grid::hash::{canonical_hash, ContentHash};

/// Domain prefix for policy digests.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"WAYFINDER::SEARCH_POLICY::V1\0";

/// How valid neighbors are ordered before they are pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborOrder {
    /// Fixed up, left, right, down. Reproducible traces.
    #[default]
    Generation,
    /// Valid neighbors shuffled by an RNG seeded once per solve.
    Shuffled { seed: u64 },
}

/// Per-solve configuration.
///
/// Defaults give a fully deterministic run with no trace recording.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    pub neighbor_order: NeighborOrder,
    /// Record one `ExpandEvent` per frontier pop.
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Policy with a seeded neighbor shuffle.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        Self {
            neighbor_order: NeighborOrder::Shuffled { seed },
            ..Self::default()
        }
    }

    /// JSON echo of the policy, embedded in search reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let order = match self.neighbor_order {
            NeighborOrder::Generation => serde_json::json!({"type": "generation"}),
            NeighborOrder::Shuffled { seed } => {
                serde_json::json!({"seed": seed, "type": "shuffled"})
            }
        };
        serde_json::json!({
            "neighbor_order": order,
            "record_trace": self.record_trace,
        })
    }

    /// Digest of the canonical policy echo.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`]; the echo holds only integers, strings and
    /// booleans, so this does not fail in practice.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
    }
}
