//! COCO annotation data structures
//!
//! Only the subset of the COCO schema needed to build formation summaries is
//! modelled here. Fields not listed are ignored on input.

use serde::Deserialize;
use serde_json::Number;
use std::io::Read;
use std::path::Path;

use crate::error::{ConvertError, Result};

/// COCO category information
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// COCO image information
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub id: i64,
    pub file_name: String,
}

impl Image {
    pub fn new(id: i64, file_name: impl Into<String>) -> Self {
        Self {
            id,
            file_name: file_name.into(),
        }
    }
}

/// COCO annotation information
#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub image_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Flat (x, y, visibility) triples
    #[serde(default)]
    pub keypoints: Option<Vec<Number>>,
}

impl Annotation {
    pub fn new(image_id: i64, category_id: i64, keypoints: Vec<Number>) -> Self {
        Self {
            image_id: Some(image_id),
            category_id: Some(category_id),
            keypoints: Some(keypoints),
        }
    }

    /// The (x, y) pairs of this annotation, empty when it carries no keypoints.
    pub fn keypoint_pairs(&self) -> Vec<(Number, Number)> {
        self.keypoints
            .as_deref()
            .map(decode_keypoints)
            .unwrap_or_default()
    }
}

// Top-level keys are optional here so a missing one can be reported by name
#[derive(Debug, Deserialize)]
struct RawCocoFile {
    categories: Option<Vec<Category>>,
    images: Option<Vec<Image>>,
    #[serde(default)]
    annotations: Option<Vec<Annotation>>,
}

/// A parsed COCO annotation file
#[derive(Debug, Clone, Default)]
pub struct CocoDocument {
    pub categories: Vec<Category>,
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
}

impl CocoDocument {
    /// Parse a document from any reader; `origin` names the source in errors.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let raw: RawCocoFile =
            serde_json::from_reader(reader).map_err(|e| ConvertError::from_json(origin, e))?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCocoFile =
            serde_json::from_str(json).map_err(|e| ConvertError::from_json("<memory>", e))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCocoFile) -> Result<Self> {
        let categories = raw
            .categories
            .ok_or_else(|| ConvertError::Schema("missing top-level key `categories`".into()))?;
        let images = raw
            .images
            .ok_or_else(|| ConvertError::Schema("missing top-level key `images`".into()))?;

        Ok(Self {
            categories,
            images,
            annotations: raw.annotations.unwrap_or_default(),
        })
    }
}

/// Decode a flat keypoint list into (x, y) pairs, dropping the visibility flag.
///
/// A trailing group with only x and y still yields a pair; a lone trailing
/// value is dropped.
pub fn decode_keypoints(keypoints: &[Number]) -> Vec<(Number, Number)> {
    if keypoints.len() % 3 == 1 {
        log::warn!(
            "Keypoint list of length {} ends with a dangling value; ignoring it",
            keypoints.len()
        );
    }

    keypoints
        .chunks(3)
        .filter_map(|group| match group {
            [x, y, ..] => Some((x.clone(), y.clone())),
            _ => None,
        })
        .collect()
}
