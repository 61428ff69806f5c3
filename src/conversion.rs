use log::debug;
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::coco::{Annotation, Category, Image};
use crate::config::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::types::{
    PerImageAggregate, PerImageOutput, ProcessingStats, Side, DEFENSE_MAX_ID, DEFENSE_MIN_ID,
    OFFENSE_MIN_ID, UNKNOWN_CLASS,
};

/// Category id to name lookup, read-only once built
#[derive(Debug, Default, Clone)]
pub struct CategoryLookup {
    names: HashMap<i64, String>,
}

impl CategoryLookup {
    /// Later entries with the same id replace earlier ones.
    pub fn from_categories(categories: &[Category]) -> Self {
        let names = categories
            .iter()
            .map(|category| (category.id, category.name.clone()))
            .collect();
        Self { names }
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Resolve a class name, falling back to `"unknown"`.
    pub fn name(&self, id: Option<i64>) -> &str {
        id.and_then(|id| self.get(id)).unwrap_or(UNKNOWN_CLASS)
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.names.keys().copied()
    }
}

/// Partition of category ids into defense and offense
#[derive(Debug, Clone)]
pub struct SideSplit {
    defense: HashSet<i64>,
    offense: HashSet<i64>,
}

impl SideSplit {
    /// Defense is the fixed range 1..=13; offense is every listed id >= 14.
    pub fn from_lookup(lookup: &CategoryLookup) -> Self {
        let defense = (DEFENSE_MIN_ID..=DEFENSE_MAX_ID).collect();
        let offense = lookup.ids().filter(|&id| id >= OFFENSE_MIN_ID).collect();
        Self { defense, offense }
    }

    /// Defense wins if an id were ever in both sets.
    pub fn side(&self, category_id: Option<i64>) -> Option<Side> {
        let id = category_id?;
        if self.defense.contains(&id) {
            Some(Side::Defense)
        } else if self.offense.contains(&id) {
            Some(Side::Offense)
        } else {
            None
        }
    }
}

/// Group annotations per image id, in input order
pub fn aggregate_annotations(
    annotations: &[Annotation],
    lookup: &CategoryLookup,
    split: &SideSplit,
    options: &ConvertOptions,
    stats: &mut ProcessingStats,
) -> Result<HashMap<i64, PerImageAggregate>> {
    let mut per_image: HashMap<i64, PerImageAggregate> = HashMap::new();

    for annotation in annotations {
        stats.annotations_processed += 1;

        let known = annotation
            .category_id
            .is_some_and(|id| lookup.get(id).is_some());
        if !known {
            if options.strict_categories {
                return Err(ConvertError::Schema(format!(
                    "annotation on image {:?} references unknown category id {:?}",
                    annotation.image_id, annotation.category_id
                )));
            }
            debug!(
                "Unknown category id {:?}, using '{}'",
                annotation.category_id, UNKNOWN_CLASS
            );
            stats.unknown_category_annotations += 1;
        }

        let side = split.side(annotation.category_id);
        if side.is_none() {
            stats.unassigned_annotations += 1;
        }

        let Some(image_id) = annotation.image_id else {
            debug!("Annotation without image_id skipped");
            stats.orphan_annotations += 1;
            continue;
        };

        per_image.entry(image_id).or_default().add(
            lookup.name(annotation.category_id),
            side,
            annotation.keypoint_pairs(),
        );
    }

    Ok(per_image)
}

/// Build the output object for one image. Class names come out sorted.
pub fn build_output(image: &Image, aggregate: Option<PerImageAggregate>) -> PerImageOutput {
    let aggregate = aggregate.unwrap_or_default();
    PerImageOutput {
        image_path: image.file_name.clone(),
        x_off: aggregate.x_off,
        y_off: aggregate.y_off,
        x_def: aggregate.x_def,
        y_def: aggregate.y_def,
        cls: sorted(aggregate.cls),
        cls_off: sorted(aggregate.cls_off),
        cls_def: sorted(aggregate.cls_def),
    }
}

fn sorted(names: BTreeSet<String>) -> Vec<String> {
    names.into_iter().collect()
}
