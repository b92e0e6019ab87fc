//! Types for zigzag tablet rows and generator configuration.

use serde::{Serialize, Serializer};
use zigzag_time::{CivilDate, Timestamp};

use crate::phase::NodeDistances;

/// Mean interval between successive new moons, in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530594;

/// Draconitic phase gained per synodic month: 242 draconitic months
/// elapse in 223 synodic months (one saros).
pub const DRACONITIC_INCREMENT: f64 = 242.0 / 223.0;

/// Default eclipse threshold on node distance.
pub const DEFAULT_THRESHOLD: f64 = 0.045;

/// Default horizon in months.
pub const DEFAULT_NUM_MONTHS: usize = 1000;

/// Which node the Moon is near when a month is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeType {
    /// Phase close to 0.0 / 1.0.
    #[serde(rename = "North Node Eclipse (Ascending)")]
    NorthNodeAscending,
    /// Phase close to 0.5.
    #[serde(rename = "South Node Eclipse (Descending)")]
    SouthNodeDescending,
}

impl NodeType {
    /// Label written to tablet output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NorthNodeAscending => "North Node Eclipse (Ascending)",
            Self::SouthNodeDescending => "South Node Eclipse (Descending)",
        }
    }
}

/// Eclipse likelihood. Only flagged months become records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Prediction {
    #[serde(rename = "POSSIBLE")]
    Possible,
}

impl Prediction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Possible => "POSSIBLE",
        }
    }
}

fn serialize_date<S: Serializer>(date: &CivilDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(date)
}

/// A flagged month, as written to the tablet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipseRecord {
    /// Month offset from the start date.
    pub month_index: usize,
    /// Calendar day of the month's new moon.
    #[serde(serialize_with = "serialize_date")]
    pub date: CivilDate,
    /// Normalized phase in [0, 1), rounded to 5 decimals.
    pub draconitic_phase: f64,
    /// Distance to the nearest node, rounded to 5 decimals.
    pub node_distance: f64,
    #[serde(rename = "eclipse_prediction")]
    pub prediction: Prediction,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

/// Every month the stepping loop visits, flagged or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthState {
    pub month_index: usize,
    pub timestamp: Timestamp,
    pub date: CivilDate,
    /// Accumulated phase before reduction.
    pub raw_phase: f64,
    /// `raw_phase` reduced into [0, 1).
    pub normalized_phase: f64,
    pub distances: NodeDistances,
}

/// Per-month step sizes for the linear model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZigzagConstants {
    /// Days added per step.
    pub synodic_month_days: f64,
    /// Phase units added per step.
    pub draconitic_increment: f64,
}

impl Default for ZigzagConstants {
    fn default() -> Self {
        Self {
            synodic_month_days: SYNODIC_MONTH_DAYS,
            draconitic_increment: DRACONITIC_INCREMENT,
        }
    }
}

impl ZigzagConstants {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.synodic_month_days.is_finite() || self.synodic_month_days <= 0.0 {
            return Err("synodic_month_days must be positive");
        }
        if !self.draconitic_increment.is_finite() || self.draconitic_increment <= 0.0 {
            return Err("draconitic_increment must be positive");
        }
        Ok(())
    }
}

/// Counts and date span of a generated tablet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabletSummary {
    pub total: usize,
    pub south: usize,
    pub north: usize,
    pub first: Option<CivilDate>,
    pub last: Option<CivilDate>,
}
