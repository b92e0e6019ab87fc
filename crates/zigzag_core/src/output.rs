//! JSON tablet output.
//!
//! Records are written as one pretty-printed array with a four-space indent
//! and fields in declaration order, so identical tablets give identical bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::ZigzagError;
use crate::tablet_types::EclipseRecord;

const INDENT: &[u8] = b"    ";

/// Serialize records into any writer.
pub fn write_records<W: Write>(writer: W, records: &[EclipseRecord]) -> Result<(), ZigzagError> {
    let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut ser)?;
    Ok(())
}

/// Serialize records to a JSON string.
pub fn to_json(records: &[EclipseRecord]) -> Result<String, ZigzagError> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| ZigzagError::Serialization(e.to_string()))
}

/// Write records to `path`, replacing any existing file.
pub fn write_json(path: &Path, records: &[EclipseRecord]) -> Result<(), ZigzagError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    info!(path = %path.display(), records = records.len(), "tablet written");
    Ok(())
}
