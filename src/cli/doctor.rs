//! CLI `doctor` command — check the dataset and model files and print a report.

use anyhow::Result;

use crate::config::PantryConfig;
use crate::embedding::local::model_files;
use crate::recipes::dataset;

/// Check that the dataset and model files are usable and print a report.
pub fn doctor(config: &PantryConfig) -> Result<()> {
    let dataset_path = config.resolved_dataset_path();
    let (model_path, tokenizer_path) = model_files(&config.embedding);

    println!("Pantry Health Report");
    println!("====================");
    println!();
    println!("Server:            http://{}", config.bind_addr());
    println!("Top-k:             {}", config.ranking.top_k);
    println!();
    println!("Dataset:           {}", dataset_path.display());
    let dataset_ok = match dataset::load_recipes(&dataset_path) {
        Ok(rows) => {
            let blank = rows.iter().filter(|r| r.ingredients.is_empty()).count();
            println!("  Recipes:         {}", rows.len());
            println!("  Blank ingredients: {blank}");
            println!("  Status:          OK");
            true
        }
        Err(e) => {
            println!("  Status:          FAILED ({e})");
            false
        }
    };
    println!();
    println!("Embedding model:   {} ({})", config.embedding.model, config.embedding.provider);
    let model_ok = model_path.exists() && tokenizer_path.exists();
    println!("  Model file:      {}", presence(model_path.exists(), &model_path));
    println!("  Tokenizer:       {}", presence(tokenizer_path.exists(), &tokenizer_path));
    println!();

    if dataset_ok && model_ok {
        println!("All checks PASSED");
    } else {
        println!("Recovery steps:");
        if !dataset_ok {
            println!("  - Point `dataset.path` (or PANTRY_DATASET) at a CSV with columns");
            println!("    'Recipe Name', 'Ingredients', 'Instructions'.");
        }
        if !model_ok {
            println!("  - Run `pantry model download`.");
        }
    }

    Ok(())
}

fn presence(exists: bool, path: &std::path::Path) -> String {
    if exists {
        format!("found at {}", path.display())
    } else {
        format!("MISSING ({})", path.display())
    }
}
