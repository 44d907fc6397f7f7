//! CLI tool for verseform poetic analysis.
//!
//! This binary wraps the verseform library: it loads a pronunciation
//! dictionary, tokenizes a poem file, and prints the analysis report or
//! individual diagnostic signals.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use verseform::prelude::*;

#[derive(Parser)]
#[command(name = "verseform")]
#[command(about = "Poetic form detection via scansion and rhyme analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Pronunciation dictionary file (CMU text or JSON format)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Dictionary format (auto-detected from the extension if omitted)
    #[arg(short = 'f', long, global = true, value_enum, default_value = "auto")]
    format: DictFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a poem file and report every signal plus the guessed form
    Analyze {
        /// Poem text file
        poem: PathBuf,

        /// Print only the form label
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check whether two words rhyme
    Rhymes {
        /// First word
        word1: String,

        /// Second word
        word2: String,

        /// Rhyme level (trailing syllables to compare)
        #[arg(short, long, default_value = "2")]
        level: usize,
    },

    /// Show a word's stress pattern
    Stress {
        /// Word to look up
        word: String,

        /// Pronunciation selection policy
        #[arg(short, long, value_enum, default_value = "primary")]
        policy: PolicyChoice,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DictFormat {
    /// Pick by file extension (.json vs anything else)
    Auto,
    /// JSON: {"word": [["B", "AO1", ...]]}
    Json,
    /// CMU plain text: WORD  B AO1 R D ER0
    Cmudict,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyChoice {
    Primary,
    All,
    Min,
    Max,
}

impl From<PolicyChoice> for StressSelection {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::Primary => StressSelection::Primary,
            PolicyChoice::All => StressSelection::All,
            PolicyChoice::Min => StressSelection::Min,
            PolicyChoice::Max => StressSelection::Max,
        }
    }
}

fn load_dictionary(path: &Path, format: DictFormat) -> Result<PhonemeDictionary> {
    let json = match format {
        DictFormat::Json => true,
        DictFormat::Cmudict => false,
        DictFormat::Auto => path.extension().is_some_and(|ext| ext == "json"),
    };

    let dict = if json {
        PhonemeDictionary::from_json_path(path)
    } else {
        PhonemeDictionary::from_cmudict_path(path)
    };

    dict.with_context(|| format!("failed to load dictionary from {}", path.display()))
}

fn print_report(analysis: &PoemAnalysis) {
    println!("{} {}", "Meter:".bold(), analysis.scansion_lines.join(" "));
    println!("{} {}", "Rhyme scheme:".bold(), analysis.rhyme_scheme);
    println!("{} {}", "Stanza lengths:".bold(), analysis.stanza_lengths);
    println!();
    println!("{} {}", "Closest meter:".bold(), analysis.meter.cyan());
    println!("{} {}", "Closest rhyme:".bold(), analysis.rhyme.cyan());
    println!("{} {}", "Closest stanza type:".bold(), analysis.stanza.cyan());
    println!("{} {}", "Guessed form:".bold(), analysis.form.green().bold());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dict_path = cli
        .dict
        .as_deref()
        .context("no dictionary given; pass --dict <FILE>")?;
    let dict = load_dictionary(dict_path, cli.format)?;

    match cli.command {
        Commands::Analyze { poem, quiet } => {
            let text = fs::read_to_string(&poem)
                .with_context(|| format!("failed to read poem from {}", poem.display()))?;
            let analysis = analyze(&dict, &tokenize(&text));

            if quiet {
                println!("{}", analysis.form);
            } else {
                print_report(&analysis);
            }
        }

        Commands::Rhymes { word1, word2, level } => {
            let verdict = rhymes(&dict, &word1, &word2, level);
            let shown = if verdict {
                "rhyme".green().bold()
            } else {
                "do not rhyme".red()
            };
            println!("{} / {}: {}", word1, word2, shown);
        }

        Commands::Stress { word, policy } => {
            for pattern in stress_patterns(&dict, &word, policy.into()) {
                println!("{pattern}");
            }
        }
    }

    Ok(())
}
