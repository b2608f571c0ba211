//! keyfreq CLI - Keyword Frequency Extraction
//!
//! Command-line interface for extracting frequency-ranked keywords from text.

use clap::{Parser, Subcommand};
use keyfreq::{Config, KeyfreqError, KeywordExtractor, Outcome, Result, TextStats};
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "keyfreq")]
#[command(author = "keyfreq Contributors")]
#[command(version)]
#[command(about = "Frequency-ranked keyword extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the most frequent keywords from text
    Extract {
        /// Text to analyse (alternative to --input)
        text: Option<String>,

        /// Input file (use "-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Maximum number of keywords (default: 10)
        #[arg(short = 'k', long)]
        count: Option<usize>,

        /// Minimum keyword length in characters (default: 3)
        #[arg(short, long)]
        min_length: Option<usize>,

        /// Stop-word language code, e.g. "pt" or "en" (default: built-in Portuguese list)
        #[arg(short, long)]
        language: Option<String>,

        /// Additional stop-word file, one word per line
        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Accept any Unicode letter instead of ASCII plus Portuguese accents
        #[arg(long)]
        any_letter: bool,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Treat every input line as a separate document
        #[arg(long)]
        lines: bool,
    },

    /// Show character and word counts for text
    Stats {
        /// Text to inspect (alternative to --input)
        text: Option<String>,

        /// Input file (use "-" for stdin)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print the default configuration as JSON
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Extract {
            text,
            input,
            count,
            min_length,
            language,
            stop_words,
            any_letter,
            config,
            json,
            lines,
        } => {
            let overrides = Overrides {
                count,
                min_length,
                language,
                stop_words,
                any_letter,
            };
            extract(text, input, config, overrides, json, lines)
        }

        Commands::Stats { text, input } => show_stats(text, input),

        Commands::Config { output } => write_default_config(output),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Command-line values that take precedence over the configuration file.
struct Overrides {
    count: Option<usize>,
    min_length: Option<usize>,
    language: Option<String>,
    stop_words: Option<PathBuf>,
    any_letter: bool,
}

fn build_config(config_path: Option<PathBuf>, overrides: Overrides) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let ext = &mut config.extractor;
    if let Some(count) = overrides.count {
        ext.max_results = count;
    }
    if let Some(min_length) = overrides.min_length {
        ext.min_length = min_length;
    }
    if overrides.language.is_some() {
        ext.language = overrides.language;
    }
    if overrides.stop_words.is_some() {
        ext.stop_words_file = overrides.stop_words;
    }
    if overrides.any_letter {
        ext.any_letter = true;
    }

    config.validate()?;
    Ok(config)
}

/// Resolves the text source: a file, stdin ("-"), or the positional argument.
fn read_input(text: Option<String>, input: Option<String>) -> Result<String> {
    match (input, text) {
        (Some(path), _) if path == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (Some(path), _) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(KeyfreqError::FileNotFound(path));
            }
            Ok(fs::read_to_string(path)?)
        }
        (None, Some(t)) => Ok(t),
        (None, None) => Err(KeyfreqError::EmptyInput(
            "No input provided. Pass TEXT, --input <file>, or --input - for stdin".to_string(),
        )),
    }
}

fn extract(
    text: Option<String>,
    input: Option<String>,
    config_path: Option<PathBuf>,
    overrides: Overrides,
    json: bool,
    lines: bool,
) -> Result<()> {
    let start_time = Instant::now();

    let config = build_config(config_path, overrides)?;
    let extractor = KeywordExtractor::from_config(&config)?;
    let text = read_input(text, input)?;

    let outcomes: Vec<Outcome> = if lines {
        let docs: Vec<&str> = text.lines().collect();
        extractor
            .extract_batch(&docs)
            .into_iter()
            .zip(&docs)
            .map(|(keywords, doc)| {
                if doc.trim().is_empty() {
                    Outcome::BlankInput
                } else {
                    Outcome::from_keywords(keywords)
                }
            })
            .collect()
    } else {
        vec![extractor.analyze(&text)]
    };

    info!(
        "Analysed {} document(s) in {:.2?}",
        outcomes.len(),
        start_time.elapsed()
    );

    if json {
        println!("{}", render_json(&outcomes, lines)?);
        return Ok(());
    }

    for (i, outcome) in outcomes.iter().enumerate() {
        if lines {
            println!("[{}] {}", i + 1, outcome.message());
        } else {
            println!("{}", outcome.message());
        }
        for keyword in outcome.keywords() {
            println!("  {}", keyword);
        }
    }

    Ok(())
}

/// Renders outcomes as pretty JSON: one tagged object, or an array in line mode.
fn render_json(outcomes: &[Outcome], lines: bool) -> Result<String> {
    let output = match outcomes {
        [single] if !lines => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(outcomes)?,
    };
    Ok(output)
}

fn show_stats(text: Option<String>, input: Option<String>) -> Result<()> {
    let text = read_input(text, input)?;
    let stats = TextStats::from_text(&text);

    println!("Characters: {}", stats.characters);
    println!("Words: {}", stats.words);

    Ok(())
}

fn write_default_config(output: Option<PathBuf>) -> Result<()> {
    let config = Config::default();

    match output {
        Some(path) => {
            config.save(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
        None => println!("{}", config.to_json()?),
    }

    Ok(())
}
