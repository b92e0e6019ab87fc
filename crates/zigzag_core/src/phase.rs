//! Draconitic phase arithmetic: reduction, node distances, classification.

use crate::tablet_types::NodeType;

/// Candidate node positions on the unit phase circle.
pub const NODE_POSITIONS: [f64; 3] = [0.0, 0.5, 1.0];

/// Reduce a raw phase into [0, 1) with floored modulo.
///
/// Negative seeds wrap upward (-0.25 -> 0.75). A tiny negative input whose
/// wrapped value rounds to 1.0, and negative zero, both map to 0.0.
pub fn normalize_phase(raw: f64) -> f64 {
    let r = raw.rem_euclid(1.0);
    if r >= 1.0 || r == 0.0 { 0.0 } else { r }
}

/// Distances from a normalized phase to each node candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDistances {
    pub to_zero: f64,
    pub to_half: f64,
    pub to_one: f64,
}

impl NodeDistances {
    pub fn from_phase(normalized: f64) -> Self {
        let [zero, half, one] = NODE_POSITIONS;
        Self {
            to_zero: (normalized - zero).abs(),
            to_half: (normalized - half).abs(),
            to_one: (normalized - one).abs(),
        }
    }

    /// Distance to the nearest node. Always in [0, 0.5] for a phase in [0, 1).
    pub fn min(&self) -> f64 {
        self.to_zero.min(self.to_half).min(self.to_one)
    }
}

/// Flag a month whose nearest node lies strictly inside `threshold`.
///
/// The 0.5 node is tested first: when both nodes are within the threshold
/// (possible only above 0.25) the month is a south-node window.
pub fn classify(distances: &NodeDistances, threshold: f64) -> Option<NodeType> {
    if distances.min() >= threshold {
        return None;
    }
    if distances.to_half < threshold {
        Some(NodeType::SouthNodeDescending)
    } else {
        Some(NodeType::NorthNodeAscending)
    }
}

/// Round to `digits` decimal places using the correctly rounded decimal
/// expansion of the exact binary value.
pub fn round_decimals(x: f64, digits: usize) -> f64 {
    format!("{x:.digits$}").parse().unwrap_or(x)
}
