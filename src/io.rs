use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::coco::CocoDocument;
use crate::error::{ConvertError, Result};
use crate::types::PerImageOutput;

const JSON_INDENT: &[u8] = b"    ";

/// Read and parse a COCO annotation file by streaming it from disk
pub fn read_coco_document(path: &Path) -> Result<CocoDocument> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    CocoDocument::from_reader(BufReader::new(file), path)
}

/// `frames/play1.jpg` -> `play1.json`
///
/// The base name is kept verbatim. Only the last extension is removed, and a
/// name made of leading dots alone keeps them, so `.hidden` -> `.hidden.json`
/// and an empty name -> `.json`.
pub fn output_file_name(file_name: &str) -> String {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    let stem = match base.rfind('.') {
        Some(dot) if base[..dot].bytes().any(|b| b != b'.') => &base[..dot],
        _ => base,
    };
    format!("{stem}.json")
}

/// Serialize `value` as JSON indented with four spaces
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write one per-image output file into `output_dir`, returning its path
pub fn write_image_json(
    output_dir: &Path,
    file_name: &str,
    output: &PerImageOutput,
) -> Result<PathBuf> {
    let path = output_dir.join(file_name);
    let bytes = to_pretty_json(output).map_err(|e| ConvertError::from_json(&path, e))?;

    let file = File::create(&path).map_err(|e| ConvertError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::io(&path, e))?;

    Ok(path)
}
