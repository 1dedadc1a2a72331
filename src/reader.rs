use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for sentence file reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or return partial results
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Drop lines that are empty after trimming
    pub skip_blank_lines: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
            skip_blank_lines: true,
        }
    }
}

/// Statistics for one sentence file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub sentences_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

impl ReadStats {
    fn failed(path: &Path, lines_read: u64, sentences_read: u64, bytes_read: u64, duration_ms: u64, error: String) -> Self {
        Self {
            file_path: path.display().to_string(),
            lines_read,
            sentences_read,
            bytes_read,
            duration_ms,
            read_error: Some(error),
        }
    }
}

/// Async reader for files holding one sentence per line
pub struct SentenceReader {
    config: ReaderConfig,
}

impl SentenceReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read sentences line-by-line with async buffered I/O
    /// Returns the sentences in file order and the read statistics
    pub async fn read_sentences<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of sentence file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }
                let stats = ReadStats::failed(path, 0, 0, 0, start_time.elapsed().as_millis() as u64, error_msg);
                return Ok((Vec::new(), stats));
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut sentences = Vec::new();
        let mut line_count = 0u64;
        let mut byte_count = 0u64;

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    byte_count += line.len() as u64 + 1; // +1 for newline
                    line_count += 1;

                    if self.config.skip_blank_lines && line.trim().is_empty() {
                        continue;
                    }
                    sentences.push(line);
                }
                Ok(None) => break,
                Err(e) => {
                    let error_msg = format!("UTF-8 decoding error in {} at line {}: {}",
                                            path.display(), line_count + 1, e);
                    warn!("{}", error_msg);

                    if self.config.fail_fast {
                        return Err(anyhow::anyhow!(error_msg));
                    }
                    // Partial results with error information
                    let stats = ReadStats::failed(
                        path,
                        line_count,
                        sentences.len() as u64,
                        byte_count,
                        start_time.elapsed().as_millis() as u64,
                        error_msg,
                    );
                    return Ok((sentences, stats));
                }
            }
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: line_count,
            sentences_read: sentences.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: None,
        };

        info!(
            "Read {}: {} lines, {} sentences, {} bytes in {}ms",
            path.display(),
            line_count,
            stats.sentences_read,
            byte_count,
            stats.duration_ms
        );

        Ok((sentences, stats))
    }
}

/// Read sentences from a file with default configuration
pub async fn read_sentences_async<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let reader = SentenceReader::new(ReaderConfig::default());
    let (sentences, _stats) = reader.read_sentences(file_path).await?;
    Ok(sentences)
}
