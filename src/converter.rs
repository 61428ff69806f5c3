//! Conversion pipeline
//!
//! Reads one COCO document, aggregates keypoints per image and side, and
//! writes one JSON summary per listed image.

use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::Path;

use crate::config::ConvertOptions;
use crate::conversion::{aggregate_annotations, build_output, CategoryLookup, SideSplit};
use crate::error::Result;
use crate::io::{output_file_name, read_coco_document, write_image_json};
use crate::types::ProcessingStats;
use crate::utils::{create_output_directory, create_progress_bar};

/// Convert `input_path` into per-image JSON files under `output_dir`.
///
/// `output_dir` is deleted and recreated first. Any read, parse or write
/// failure aborts the run, possibly leaving some files already written.
pub fn convert(
    input_path: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<ProcessingStats> {
    let output_dir = create_output_directory(output_dir)?;

    info!("Reading COCO annotations from {}", input_path.display());
    let document = read_coco_document(input_path)?;
    info!(
        "Loaded {} categories, {} images, {} annotations",
        document.categories.len(),
        document.images.len(),
        document.annotations.len()
    );

    let lookup = CategoryLookup::from_categories(&document.categories);
    let split = SideSplit::from_lookup(&lookup);

    let mut stats = ProcessingStats::new();
    let per_image =
        aggregate_annotations(&document.annotations, &lookup, &split, options, &mut stats)?;

    let pb = create_progress_bar(document.images.len() as u64, "Images", options.show_progress);
    let mut written_names = HashSet::new();
    for image in &document.images {
        let file_name = output_file_name(&image.file_name);
        if !written_names.insert(file_name.clone()) {
            warn!(
                "Image {} ({}) overwrites an earlier {}",
                image.id,
                image.file_name,
                file_name
            );
            stats.overwritten_outputs += 1;
        }

        let aggregate = per_image.get(&image.id).cloned();
        if aggregate.is_none() {
            stats.images_without_annotations += 1;
        }

        let output = build_output(image, aggregate);
        let path = write_image_json(&output_dir, &file_name, &output)?;
        debug!("Wrote {}", path.display());
        stats.images_written += 1;
        pb.inc(1);
    }
    pb.finish_with_message("Conversion complete");

    let listed: HashSet<i64> = document.images.iter().map(|image| image.id).collect();
    stats.unlisted_image_ids = per_image.keys().filter(|id| !listed.contains(id)).count();

    info!("Per-image JSON files saved in '{}'", output_dir.display());
    stats.print_summary();
    Ok(stats)
}
