use anyhow::Result;

use crate::config::PantryConfig;
use crate::error::PantryError;
use crate::recipes::search::Recommender;
use crate::server::EMPTY_QUERY_WARNING;

/// Run a single search from the terminal.
pub fn search(config: &PantryConfig, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        println!("{EMPTY_QUERY_WARNING}");
        return Ok(());
    }

    let recommender = Recommender::startup(config, true)?;
    match recommender.recommend(query) {
        Ok(results) => super::write_results(&mut std::io::stdout().lock(), &results)?,
        Err(PantryError::EmptyQuery) => println!("{EMPTY_QUERY_WARNING}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
