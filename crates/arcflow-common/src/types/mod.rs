//! Core type definitions for Arcflow.
//!
//! - Identifier types ([`VertexId`])
//! - Numeric arc marks ([`Weight`]) and the [`ARC_WEIGHT_LIMIT`] sentinel

mod id;

pub use id::VertexId;

/// Numeric value attached to an arc: a weight, capacity, cost, or flow
/// depending on the consuming algorithm.
pub type Weight = i64;

/// Sentinel standing in for an effectively infinite weight or capacity.
///
/// The flow engines use it for super-source/super-sink wiring and as the
/// "saturated arc" weight during residual searches. All real inputs are
/// assumed to be finite integers bounded well below this value, so sums of
/// path weights never become ambiguous with the sentinel.
pub const ARC_WEIGHT_LIMIT: Weight = 0xFFFF_FFFF;
