//! The zigzag stepping loop.
//!
//! Algorithm:
//!   1. Start at midnight of the seed date with the seed phase (unreduced)
//!   2. Each month, reduce the phase into [0, 1) and measure node distances
//!   3. Flag the month if the nearest node is inside the threshold
//!   4. Add one mean synodic month to the date and the saros ratio to the phase
//!
//! The phase accumulates by repeated addition, as a tablet column would,
//! rather than as `seed + i * increment`.

use tracing::{debug, trace};
use zigzag_time::{CivilDate, TimeError, Timestamp};

use crate::error::ZigzagError;
use crate::phase::{NodeDistances, classify, normalize_phase, round_decimals};
use crate::tablet_types::{
    EclipseRecord, MonthState, NodeType, Prediction, TabletSummary, ZigzagConstants,
};

/// Decimal places kept for phase and distance in records.
const RECORD_DECIMALS: usize = 5;

/// Generates eclipse-window tablets from a seed new moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisGenerator {
    start: CivilDate,
    initial_phase: f64,
    constants: ZigzagConstants,
}

impl EphemerisGenerator {
    /// Create a generator with the standard System B constants.
    ///
    /// `initial_phase` is kept as given and reduced modulo 1.0 inside the
    /// loop, so seeds outside [0, 1) are accepted.
    pub fn new(start: CivilDate, initial_phase: f64) -> Result<Self, ZigzagError> {
        if !initial_phase.is_finite() {
            return Err(ZigzagError::InvalidParameter("initial_phase must be finite"));
        }
        Ok(Self {
            start,
            initial_phase,
            constants: ZigzagConstants::default(),
        })
    }

    /// Create a generator from a `YYYY-MM-DD` start date.
    pub fn from_iso(start: &str, initial_phase: f64) -> Result<Self, ZigzagError> {
        Self::new(start.parse()?, initial_phase)
    }

    /// Replace the step constants.
    pub fn with_constants(self, constants: ZigzagConstants) -> Result<Self, ZigzagError> {
        constants.validate().map_err(ZigzagError::InvalidParameter)?;
        Ok(Self { constants, ..self })
    }

    pub fn start_date(&self) -> CivilDate {
        self.start
    }

    pub fn initial_phase(&self) -> f64 {
        self.initial_phase
    }

    pub fn constants(&self) -> ZigzagConstants {
        self.constants
    }

    /// Every month of the horizon, flagged or not.
    pub fn steps(&self, num_months: usize) -> MonthSteps {
        MonthSteps {
            index: 0,
            num_months,
            current: Ok(Timestamp::from_date(self.start)),
            phase: self.initial_phase,
            constants: self.constants,
        }
    }

    /// Months whose phase lies within `threshold` of a node.
    ///
    /// `threshold` must lie in (0, 0.5]. `num_months = 0` gives an empty tablet.
    pub fn generate(
        &self,
        num_months: usize,
        threshold: f64,
    ) -> Result<Vec<EclipseRecord>, ZigzagError> {
        validate_threshold(threshold)?;
        debug!(
            start = %self.start,
            initial_phase = self.initial_phase,
            num_months,
            threshold,
            "generating zigzag tablet"
        );

        let mut records = Vec::new();
        for state in self.steps(num_months) {
            let state = state?;
            let Some(node_type) = classify(&state.distances, threshold) else {
                continue;
            };
            trace!(
                month_index = state.month_index,
                date = %state.date,
                phase = state.normalized_phase,
                node = node_type.label(),
                "eclipse window"
            );
            records.push(EclipseRecord {
                month_index: state.month_index,
                date: state.date,
                draconitic_phase: round_decimals(state.normalized_phase, RECORD_DECIMALS),
                node_distance: round_decimals(state.distances.min(), RECORD_DECIMALS),
                prediction: Prediction::Possible,
                node_type,
            });
        }

        debug!(flagged = records.len(), num_months, "tablet complete");
        Ok(records)
    }
}

/// Check that a node-distance threshold lies in (0, 0.5].
pub fn validate_threshold(threshold: f64) -> Result<(), ZigzagError> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 0.5 {
        return Err(ZigzagError::InvalidParameter("threshold must be in (0, 0.5]"));
    }
    Ok(())
}

/// Iterator over the months of a tablet.
///
/// A date that leaves the supported calendar range is reported once, when
/// the month that needs it is requested; iteration then stops.
#[derive(Debug, Clone)]
pub struct MonthSteps {
    index: usize,
    num_months: usize,
    current: Result<Timestamp, TimeError>,
    phase: f64,
    constants: ZigzagConstants,
}

impl Iterator for MonthSteps {
    type Item = Result<MonthState, ZigzagError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.num_months {
            return None;
        }
        let timestamp = match self.current.clone() {
            Ok(t) => t,
            Err(e) => {
                self.index = self.num_months;
                return Some(Err(e.into()));
            }
        };
        let date = match timestamp.date() {
            Ok(d) => d,
            Err(e) => {
                self.index = self.num_months;
                return Some(Err(e.into()));
            }
        };

        let normalized_phase = normalize_phase(self.phase);
        let state = MonthState {
            month_index: self.index,
            timestamp,
            date,
            raw_phase: self.phase,
            normalized_phase,
            distances: NodeDistances::from_phase(normalized_phase),
        };

        self.index += 1;
        self.current = timestamp.add_days(self.constants.synodic_month_days);
        self.phase += self.constants.draconitic_increment;
        Some(Ok(state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_months - self.index;
        (0, Some(remaining))
    }
}

/// Count flagged months by node and find the first and last dates.
pub fn summarize(records: &[EclipseRecord]) -> TabletSummary {
    let south = records
        .iter()
        .filter(|r| r.node_type == NodeType::SouthNodeDescending)
        .count();
    TabletSummary {
        total: records.len(),
        south,
        north: records.len() - south,
        first: records.first().map(|r| r.date),
        last: records.last().map(|r| r.date),
    }
}
