//! Terminal front ends: the interactive `chat` session, one-shot `search`,
//! `doctor` diagnostics, and model download.

pub mod chat;
pub mod doctor;
pub mod search;

use anyhow::{Context, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::embedding::local::{model_files, MODEL_FILE, TOKENIZER_FILE};
use crate::recipes::types::RankedResult;

const MODEL_URL: &str =
    "https://huggingface.co/sentence-transformers/all-MiniLM-L6-v2/resolve/main/onnx/model.onnx";
const TOKENIZER_URL: &str =
    "https://huggingface.co/sentence-transformers/all-MiniLM-L6-v2/resolve/main/tokenizer.json";

/// Print ranked recipes in the terminal result format.
pub fn write_results(out: &mut impl Write, results: &[RankedResult<'_>]) -> std::io::Result<()> {
    if results.is_empty() {
        writeln!(out, "{}", crate::server::NO_RESULTS)?;
        return Ok(());
    }

    writeln!(out, "Top Recipe Suggestions:")?;
    writeln!(out)?;
    for r in results {
        writeln!(out, "### {}", r.recipe.name)?;
        writeln!(out, "Ingredients: {}", r.recipe.ingredients)?;
        writeln!(out, "Instructions: {}", r.recipe.instructions)?;
        writeln!(out, "Similarity Score: {:.3}", r.display_score())?;
        writeln!(out, "{}", "-".repeat(50))?;
    }
    Ok(())
}

/// Download the ONNX embedding model and tokenizer to the cache directory.
pub async fn model_download(config: &crate::config::EmbeddingConfig) -> Result<()> {
    let (model_path, tokenizer_path) = model_files(config);
    if let Some(dir) = model_path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create cache dir: {}", dir.display()))?;
    }

    for (name, url, dest) in [
        (MODEL_FILE, MODEL_URL, &model_path),
        (TOKENIZER_FILE, TOKENIZER_URL, &tokenizer_path),
    ] {
        if dest.exists() {
            println!("{name} already exists at {}", dest.display());
        } else {
            println!("Downloading {name}...");
            download_file(url, dest).await?;
            println!("{name} saved to {}", dest.display());
        }
    }

    println!("Model download complete. Ready for use.");
    Ok(())
}

/// Download a file from a URL with a progress bar. Streams into a temp file,
/// then renames; the temp file is removed if anything fails.
pub(crate) async fn download_file(url: &str, dest: &Path) -> Result<()> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("HTTP request failed for {url}"))?;

    anyhow::ensure!(
        response.status().is_success(),
        "download failed with HTTP {}",
        response.status()
    );

    let pb = match response.content_length() {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")?
                    .progress_chars("##-"),
            );
            pb
        }
        None => ProgressBar::new_spinner(),
    };

    let tmp_path = dest.with_extension("tmp");
    let result = stream_to_file(response, &tmp_path, dest, &pb).await;
    pb.finish_and_clear();

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(&tmp_path).await {
            tracing::debug!(path = %tmp_path.display(), error = %e, "temp file not removed");
        }
    }
    result?;

    tracing::debug!(url, dest = %dest.display(), "download complete");
    Ok(())
}

async fn stream_to_file(
    response: reqwest::Response,
    tmp_path: &Path,
    dest: &Path,
    pb: &ProgressBar,
) -> Result<()> {
    let mut file = tokio::fs::File::create(tmp_path)
        .await
        .with_context(|| format!("failed to create temp file: {}", tmp_path.display()))?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("error reading response")?;
        file.write_all(&chunk).await.context("error writing to file")?;
        pb.inc(chunk.len() as u64);
    }
    file.flush().await?;
    drop(file);

    tokio::fs::rename(tmp_path, dest)
        .await
        .context("failed to rename temp file")
}
