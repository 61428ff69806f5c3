use clap::Parser;

/// Command-line arguments for splitting COCO keypoint annotations into
/// per-image offense/defense JSON files.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// COCO annotation file to read
    #[arg(short = 'i', long = "input", default_value = "_annotations.coco.json")]
    pub input: String,

    /// Directory for the per-image JSON files (deleted and recreated on each run)
    #[arg(short = 'o', long = "output_dir", default_value = "annotations_per_image")]
    pub output_dir: String,

    /// Fail when an annotation references a category id missing from `categories`
    #[arg(long = "strict_categories")]
    pub strict_categories: bool,

    /// Hide the progress bar
    #[arg(long = "no_progress")]
    pub no_progress: bool,
}

impl Args {
    pub fn to_convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            strict_categories: self.strict_categories,
            show_progress: !self.no_progress,
        }
    }
}

/// Library-level conversion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub strict_categories: bool,
    pub show_progress: bool,
}
