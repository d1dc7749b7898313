use crate::harvest::LabeledLinkMap;
use crate::HarvestError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the map as a flat JSON object `{label: [url, ...], ...}`
///
/// Any existing file at `output_path` is truncated and replaced.
///
/// # Arguments
///
/// * `links` - The map to serialize
/// * `output_path` - Destination file
pub fn write_link_map(links: &LabeledLinkMap, output_path: &Path) -> Result<(), HarvestError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, links)?;
    writer.flush()?;
    Ok(())
}
