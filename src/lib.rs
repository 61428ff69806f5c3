//! COCO keypoints to per-image formation summaries
//!
//! This library reads a COCO annotation file and writes one JSON file per image,
//! splitting keypoints and class names into offense and defense groups by
//! category id.

pub mod coco;
pub mod config;
pub mod conversion;
pub mod converter;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use coco::{decode_keypoints, Annotation, Category, CocoDocument, Image};
pub use config::{Args, ConvertOptions};
pub use conversion::{CategoryLookup, SideSplit};
pub use converter::convert;
pub use error::ConvertError;
pub use types::{PerImageAggregate, PerImageOutput, ProcessingStats, Side};
