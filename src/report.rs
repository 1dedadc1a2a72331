// WHY: serializable results shared by the CLI output modes and the stats file

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::checker::{PangramChecker, PangramReport};

/// Per-sentence check result
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SentenceResult {
    /// Zero-based position in the input order
    pub index: usize,
    pub sentence: String,
    pub is_pangram: bool,
    /// Distinct characters after normalization
    pub distinct_chars: usize,
    pub missing_letters: Vec<char>,
}

impl SentenceResult {
    pub fn from_report(index: usize, sentence: &str, report: &PangramReport) -> Self {
        Self {
            index,
            sentence: sentence.to_string(),
            is_pangram: report.is_pangram,
            distinct_chars: report.distinct_chars,
            missing_letters: report.missing_letters.clone(),
        }
    }
}

/// Summary of one CLI run, written by `--stats-out`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunSummary {
    /// Where the sentences came from: "demo", "args", or a file path
    pub source: String,
    pub sentences_checked: u64,
    pub pangrams_found: u64,
    pub processing_time_ms: u64,
    pub results: Vec<SentenceResult>,
}

impl RunSummary {
    pub fn new(source: impl Into<String>, results: Vec<SentenceResult>, elapsed: Duration) -> Self {
        let pangrams_found = results.iter().filter(|r| r.is_pangram).count() as u64;
        Self {
            source: source.into(),
            sentences_checked: results.len() as u64,
            pangrams_found,
            processing_time_ms: elapsed.as_millis() as u64,
            results,
        }
    }
}

/// Check every sentence, keeping input order
pub fn check_all(checker: &PangramChecker, sentences: &[String]) -> Vec<SentenceResult> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| SentenceResult::from_report(index, sentence, &checker.analyze(sentence)))
        .collect()
}

/// Write results as JSON lines, one compact object per sentence
pub async fn write_json_lines<W: AsyncWrite + Unpin>(writer: W, results: &[SentenceResult]) -> Result<()> {
    let mut writer = BufWriter::new(writer);

    for result in results {
        let line = serde_json::to_string(result)?;
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    Ok(())
}

/// Write the run summary as pretty JSON
pub async fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let content = serde_json::to_string_pretty(summary)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, content).await?;
    debug!("Wrote run summary to {}", path.display());
    Ok(())
}
