//! Recipe dataset loading.
//!
//! The dataset is a CSV file with at least the columns `Recipe Name`,
//! `Ingredients` and `Instructions`. Extra columns are ignored.

use std::path::Path;

use crate::error::PantryError;
use crate::recipes::types::RecipeRow;

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Recipe Name", "Ingredients", "Instructions"];

/// Load every row of the dataset at `path`, in file order.
///
/// Blank `Ingredients` and `Instructions` cells become empty strings. A
/// missing file, a missing required column, or a malformed row is a
/// [`PantryError::DatasetLoad`].
pub fn load_recipes(path: &Path) -> Result<Vec<RecipeRow>, PantryError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| PantryError::dataset(path, format!("failed to open CSV: {e}")))?;
    let rows = read_rows(&mut reader).map_err(|reason| PantryError::dataset(path, reason))?;

    tracing::info!(path = %path.display(), recipes = rows.len(), "dataset loaded");
    Ok(rows)
}

/// Parse recipe rows from any CSV source. Used for in-memory fixtures.
pub fn parse_recipes<R: std::io::Read>(source: R) -> Result<Vec<RecipeRow>, String> {
    let mut reader = csv::Reader::from_reader(source);
    read_rows(&mut reader)
}

fn read_rows<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Vec<RecipeRow>, String> {
    let headers = reader
        .headers()
        .map_err(|e| format!("failed to read header row: {e}"))?;

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(format!("missing required column(s): {}", missing.join(", ")));
    }

    reader
        .deserialize::<RecipeRow>()
        .enumerate()
        .map(|(i, row)| {
            // +2: one for the header, one for 1-based line numbers
            row.map_err(|e| format!("malformed row at line {}: {e}", i + 2))
        })
        .collect()
}
