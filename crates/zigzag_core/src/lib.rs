//! Babylonian System B ("zigzag") eclipse-window generator.
//!
//! A linear model steps the date by one mean synodic month and the
//! draconitic phase by 242/223 per month. Months whose phase lies within a
//! threshold of a node (0.0/1.0 north, 0.5 south) are candidate eclipses.
//!
//! This crate provides:
//! - `EphemerisGenerator` and its month iterator
//! - Phase reduction, node distances, and node classification
//! - JSON tablet output
//!
//! # Quick start
//!
//! ```rust,ignore
//! use zigzag_core::*;
//!
//! let generator = EphemerisGenerator::from_iso("2024-01-11", 0.48)?;
//! let records = generator.generate(2400, DEFAULT_THRESHOLD)?;
//! write_json(Path::new("babylonian_eclipse_data.json"), &records)?;
//! ```

pub mod error;
pub mod generator;
pub mod output;
pub mod phase;
pub mod tablet_types;

pub use error::ZigzagError;
pub use generator::{EphemerisGenerator, MonthSteps, summarize, validate_threshold};
pub use output::{to_json, write_json, write_records};
pub use phase::{NODE_POSITIONS, NodeDistances, classify, normalize_phase, round_decimals};
pub use tablet_types::{
    DEFAULT_NUM_MONTHS, DEFAULT_THRESHOLD, DRACONITIC_INCREMENT, EclipseRecord, MonthState,
    NodeType, Prediction, SYNODIC_MONTH_DAYS, TabletSummary, ZigzagConstants,
};

// Re-export the date types that appear in public signatures.
pub use zigzag_time::{CivilDate, TimeError, Timestamp};
