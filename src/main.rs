use anyhow::Result;
use clap::Parser;
use pangram::checker::{CaseMode, CharacterFilter, PangramChecker, PangramRules, WhitespacePolicy};
use pangram::reader::{ReaderConfig, SentenceReader};
use pangram::report::{self, RunSummary, SentenceResult};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn, Level};

/// Sentences checked when no input is given
const DEMO_SENTENCES: [&str; 2] = ["a quick brown fox jumps over the lazy dog", "leet code"];

#[derive(Parser, Debug)]
#[command(name = "pangram")]
#[command(about = "Check whether sentences contain every letter of the English alphabet")]
#[command(version)]
struct Args {
    /// Sentences to check; the built-in demo sentences are used when none are given
    sentences: Vec<String>,

    /// File with one sentence per line, checked after any positional sentences
    #[arg(long)]
    file: Option<PathBuf>,

    /// Fold ASCII case before counting
    #[arg(long)]
    ignore_case: bool,

    /// Count ASCII letters only
    #[arg(long)]
    letters_only: bool,

    /// Strip every whitespace character, not just spaces
    #[arg(long)]
    all_whitespace: bool,

    /// Shorthand for --ignore-case --letters-only --all-whitespace
    #[arg(long)]
    conventional: bool,

    /// Print JSON lines instead of booleans
    #[arg(long)]
    json: bool,

    /// Append distinct character count and missing letters to each result
    #[arg(long, conflicts_with = "json")]
    explain: bool,

    /// Abort on the first unreadable line in --file
    #[arg(long)]
    fail_fast: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Emit debug logs on stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn rules(&self) -> PangramRules {
        if self.conventional {
            return PangramRules::conventional();
        }

        PangramRules {
            whitespace: if self.all_whitespace { WhitespacePolicy::AllWhitespace } else { WhitespacePolicy::SpaceOnly },
            case: if self.ignore_case { CaseMode::Insensitive } else { CaseMode::Sensitive },
            characters: if self.letters_only { CharacterFilter::AsciiLettersOnly } else { CharacterFilter::AllCharacters },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries results only, logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let start = Instant::now();
    let (source, sentences) = collect_sentences(&args).await?;

    let checker = PangramChecker::new(args.rules());
    info!(rules = ?checker.rules(), count = sentences.len(), %source, "Checking sentences");

    let results = report::check_all(&checker, &sentences);

    if args.json {
        report::write_json_lines(tokio::io::stdout(), &results).await?;
    } else {
        for result in &results {
            println!("{}", format_result(result, args.explain));
        }
    }

    let summary = RunSummary::new(source, results, start.elapsed());
    info!(
        sentences_checked = summary.sentences_checked,
        pangrams_found = summary.pangrams_found,
        "Check complete"
    );

    if let Some(ref stats_path) = args.stats_out {
        report::write_summary(stats_path, &summary).await?;
        info!("Run summary written to {}", stats_path.display());
    }

    Ok(())
}

/// Gather positional and file sentences, falling back to the demo sentences
async fn collect_sentences(args: &Args) -> Result<(String, Vec<String>)> {
    let mut sentences = args.sentences.clone();
    let mut source = if sentences.is_empty() { None } else { Some("args".to_string()) };

    if let Some(ref path) = args.file {
        if !path.is_file() {
            anyhow::bail!("Sentence file does not exist: {}", path.display());
        }

        let reader = SentenceReader::new(ReaderConfig {
            fail_fast: args.fail_fast,
            ..Default::default()
        });
        let (file_sentences, stats) = reader.read_sentences(path).await?;

        if let Some(ref error) = stats.read_error {
            warn!("Partial read of {}: {}", stats.file_path, error);
        }

        sentences.extend(file_sentences);
        source = Some(path.display().to_string());
    }

    match source {
        Some(source) => Ok((source, sentences)),
        None => Ok((
            "demo".to_string(),
            DEMO_SENTENCES.iter().map(|s| s.to_string()).collect(),
        )),
    }
}

fn format_result(result: &SentenceResult, explain: bool) -> String {
    if !explain {
        return result.is_pangram.to_string();
    }

    let missing: String = result.missing_letters.iter().collect();
    format!(
        "{}\tdistinct={}\tmissing={}",
        result.is_pangram,
        result.distinct_chars,
        if missing.is_empty() { "-" } else { missing.as_str() }
    )
}
