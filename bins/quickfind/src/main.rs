//! Quickfind - fuzzy finder over a word list
//!
//! Loads a line-oriented candidate corpus and matches query patterns
//! against it, either through one-shot subcommands or an interactive
//! prompt loop. Reports elapsed wall-clock time around each batch.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use quickfind_cli::output::{format_count, format_ms, Status};
use quickfind_cli::stopwatch::Stopwatch;
use quickfind_matcher::{count_matches, filter_matches, rank_candidates, score_match_positions};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "quickfind")]
#[command(about = "Fuzzy-find patterns in a word list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count candidates matching a pattern
    Count {
        /// Corpus file, one candidate per line
        file: String,
        /// Pattern to search for
        pattern: String,
    },

    /// List matching candidates in corpus order
    List {
        /// Corpus file, one candidate per line
        file: String,
        /// Pattern to search for
        pattern: String,
    },

    /// List matching candidates by descending relevance score
    Rank {
        /// Corpus file, one candidate per line
        file: String,
        /// Pattern to search for
        pattern: String,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Highlight matched characters
        #[arg(long)]
        highlight: bool,
    },

    /// Interactive prompt loop over a corpus
    Interactive {
        /// Corpus file, one candidate per line
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count { file, pattern } => {
            let corpus = load_corpus(&file)?;
            run_count(&corpus, &pattern);
        }
        Commands::List { file, pattern } => {
            let corpus = load_corpus(&file)?;
            run_list(&corpus, &pattern);
        }
        Commands::Rank { file, pattern, limit, highlight } => {
            let corpus = load_corpus(&file)?;
            run_rank(&corpus, &pattern, limit, highlight);
        }
        Commands::Interactive { file } => {
            let corpus = load_corpus(&file)?;
            run_interactive(&corpus)?;
        }
    }

    Ok(())
}

fn load_corpus(path: &str) -> Result<Vec<String>> {
    Status::info(&format!("Reading [{}]", path));

    let watch = Stopwatch::start_new();
    let corpus = quickfind_corpus::load_lines(path)
        .with_context(|| format!("Failed to load corpus from {}", path))?;

    Status::success(&format!(
        "Read {} in {}",
        format_count(corpus.len(), "entry", "entries"),
        format_ms(watch.elapsed_ms())
    ));
    Ok(corpus)
}

fn run_count(corpus: &[String], pattern: &str) {
    let watch = Stopwatch::start_new();
    let matches = count_matches(pattern, corpus);
    let ms = watch.elapsed_ms();

    println!(
        "Found {} in {}.",
        format_count(matches, "match", "matches"),
        format_ms(ms)
    );
}

fn run_list(corpus: &[String], pattern: &str) {
    let watch = Stopwatch::start_new();
    let matches = filter_matches(pattern, corpus);
    let ms = watch.elapsed_ms();

    for candidate in &matches {
        println!("{}", candidate);
    }
    println!(
        "Found {} in {}.",
        format_count(matches.len(), "match", "matches"),
        format_ms(ms)
    );
}

fn run_rank(corpus: &[String], pattern: &str, limit: Option<usize>, highlight: bool) {
    let watch = Stopwatch::start_new();
    let mut results = rank_candidates(pattern, corpus);
    let ms = watch.elapsed_ms();

    let total = results.len();
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    for result in &results {
        // For highlighting, positions and the printed score come from the
        // same scan, limited to the results actually shown.
        if highlight {
            if let Some((score, positions)) = score_match_positions(pattern, result.item) {
                println!("{} - {}", render_match(result.item, &positions), score);
                continue;
            }
        }
        println!("{} - {}", result.item, result.score);
    }
    println!(
        "Found {} in {}.",
        format_count(total, "match", "matches"),
        format_ms(ms)
    );
}

/// Render a candidate with the matched character indices emphasized.
fn render_match(candidate: &str, positions: &[usize]) -> String {
    let mut out = String::new();
    let mut next = positions.iter().copied().peekable();
    for (idx, ch) in candidate.chars().enumerate() {
        if next.peek() == Some(&idx) {
            out.push_str(&format!("{}", ch.green().bold()));
            next.next();
        } else {
            out.push(ch);
        }
    }
    out
}

fn run_interactive(corpus: &[String]) -> Result<()> {
    let stdin = io::stdin();

    loop {
        Status::header("Quickfind");
        println!("1. Count matches");
        println!("2. List matches (corpus order)");
        println!("3. List matches (by score)");
        println!("4. Quit");
        print!("> ");
        io::stdout().flush()?;

        let Some(choice) = read_line(&stdin)? else {
            break;
        };
        let choice = choice.trim().to_string();

        match choice.as_str() {
            "1" | "2" | "3" => {
                print!("pattern> ");
                io::stdout().flush()?;
                let Some(pattern) = read_line(&stdin)? else {
                    break;
                };
                let pattern = pattern.trim();
                println!("Searching for [{}] ...", pattern);

                match choice.as_str() {
                    "1" => run_count(corpus, pattern),
                    "2" => run_list(corpus, pattern),
                    _ => run_rank(corpus, pattern, Some(20), false),
                }
            }
            "4" | "q" | "quit" => break,
            other => Status::error(&format!("Unknown option: {}", other)),
        }
    }

    Ok(())
}

/// Read one line from stdin; `None` on end of input.
fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
