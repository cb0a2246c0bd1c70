//! Train/validation partition inspection.

use anyhow::Result;
use skilltune_core::dataset::{self, Dataset, GepaExample};

use crate::cli::SplitMode;

pub fn run(mode: SplitMode, ratio: f64, seed: Option<u64>) -> Result<()> {
    let examples = dataset::gepa_examples();

    let split: Dataset<GepaExample> = match mode {
        SplitMode::Fixed => dataset::split_fixed(&examples, ratio)?,
        SplitMode::Random => dataset::split_random(&examples, ratio, seed)?,
    };

    println!(
        "Dataset split: {} total, {} train / {} validation",
        examples.len(),
        split.train.len(),
        split.validation.len()
    );

    println!("\nTrain:");
    for ex in &split.train {
        print_example(ex);
    }
    println!("\nValidation:");
    for ex in &split.validation {
        print_example(ex);
    }

    Ok(())
}

fn print_example(ex: &GepaExample) {
    let c = &ex.validation_criteria;
    println!(
        "  - {} (min rules {}, min questions {})",
        ex.story_input, c.min_rules, c.min_questions
    );
}
