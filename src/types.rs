use serde::Serialize;
use serde_json::Number;
use std::collections::BTreeSet;

// Category ids 1..=13 are defense; any listed id from 14 upwards is offense
pub const DEFENSE_MIN_ID: i64 = 1;
pub const DEFENSE_MAX_ID: i64 = 13;
pub const OFFENSE_MIN_ID: i64 = 14;

/// Class name used when a category id has no entry in `categories`
pub const UNKNOWN_CLASS: &str = "unknown";

/// Which side of the formation an annotation belongs to
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    Offense,
    Defense,
}

/// Running per-image state built while scanning annotations
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PerImageAggregate {
    pub cls: BTreeSet<String>,
    pub cls_off: BTreeSet<String>,
    pub cls_def: BTreeSet<String>,
    pub x_off: Vec<Number>,
    pub y_off: Vec<Number>,
    pub x_def: Vec<Number>,
    pub y_def: Vec<Number>,
}

impl PerImageAggregate {
    /// Record one annotation. `side` is `None` for ids outside both ranges,
    /// which only contribute to `cls`.
    pub fn add(&mut self, class_name: &str, side: Option<Side>, pairs: Vec<(Number, Number)>) {
        self.cls.insert(class_name.to_string());

        let (classes, xs, ys) = match side {
            Some(Side::Defense) => (&mut self.cls_def, &mut self.x_def, &mut self.y_def),
            Some(Side::Offense) => (&mut self.cls_off, &mut self.x_off, &mut self.y_off),
            None => return,
        };

        classes.insert(class_name.to_string());
        for (x, y) in pairs {
            xs.push(x);
            ys.push(y);
        }
    }
}

/// The per-image JSON file content. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerImageOutput {
    pub image_path: String,
    pub x_off: Vec<Number>,
    pub y_off: Vec<Number>,
    pub x_def: Vec<Number>,
    pub y_def: Vec<Number>,
    pub cls: Vec<String>,
    pub cls_off: Vec<String>,
    pub cls_def: Vec<String>,
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub images_written: usize,
    pub images_without_annotations: usize,
    pub annotations_processed: usize,
    pub unknown_category_annotations: usize,
    pub unassigned_annotations: usize,
    pub orphan_annotations: usize,
    pub unlisted_image_ids: usize,
    pub overwritten_outputs: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Annotations processed: {}", self.annotations_processed);
        log::info!("Images written: {}", self.images_written);
        log::info!(
            "Images without annotations: {}",
            self.images_without_annotations
        );

        if self.unknown_category_annotations > 0 {
            log::warn!(
                "Annotations with a category id missing from `categories`: {}",
                self.unknown_category_annotations
            );
        }
        if self.unassigned_annotations > 0 {
            log::warn!(
                "Annotations outside both offense and defense ids: {}",
                self.unassigned_annotations
            );
        }
        if self.orphan_annotations > 0 {
            log::warn!(
                "Annotations without an image_id: {}",
                self.orphan_annotations
            );
        }
        if self.unlisted_image_ids > 0 {
            log::warn!(
                "Annotated image ids not listed in `images`: {}",
                self.unlisted_image_ids
            );
        }
        if self.overwritten_outputs > 0 {
            log::warn!(
                "Output files overwritten by images sharing a basename: {}",
                self.overwritten_outputs
            );
        }
    }
}
