//! Wordle Helper - CLI
//!
//! Narrow a dictionary by Wordle feedback and get next-guess suggestions,
//! in a TUI or on the command line.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use wordle_helper::{
    commands::{
        benchmark_progress_bar, run_benchmark, run_filter, run_simple, sample_targets, solve_word,
    },
    output::{print_benchmark_result, print_session_summary, print_solve_result},
    solver::ScoringConfig,
    wordlists::{DEFAULT_URL, Dictionary, DictionarySource},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper: filter possible answers by feedback and suggest the next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'remote' (default, falls back to the built-in list), 'fallback', or path to file
    #[arg(short, long, global = true, default_value = "remote")]
    dictionary: String,

    /// URL of the remote JSON word list
    #[arg(long, global = true, default_value = DEFAULT_URL)]
    url: String,

    /// Comma-separated opening words that get the early-game bonus
    #[arg(long, global = true, value_delimiter = ',')]
    openers: Option<Vec<String>>,

    /// Minimum remaining candidates for the opener bonus to apply
    #[arg(long, global = true)]
    opener_threshold: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based interactive mode without the TUI
    Simple,

    /// Apply guesses given as WORD:PATTERN (e.g. CRANE:--Y-G) and print what is left
    Filter {
        /// Guesses with feedback; pattern letters G, Y, - or ?
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Play a game against a known target, always taking the suggestion
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve random dictionary words and report the guess distribution
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

impl Cli {
    fn scoring_config(&self) -> ScoringConfig {
        let mut config = ScoringConfig::default();
        if let Some(openers) = &self.openers {
            config = config.with_openers(openers);
        }
        if let Some(threshold) = self.opener_threshold {
            config = config.with_opener_min_candidates(threshold);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.scoring_config();

    let source = DictionarySource::from_arg(&cli.dictionary, &cli.url);
    let dictionary = Dictionary::load(&source)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config),
        Commands::Simple => run_simple(dictionary.words(), config),
        Commands::Filter { guesses } => run_filter_command(&dictionary, &guesses, config),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&word, dictionary.words(), &config)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&dictionary, count, &config);
            Ok(())
        }
    }
}

fn run_filter_command(dictionary: &Dictionary, guesses: &[String], config: ScoringConfig) -> Result<()> {
    let session = run_filter(dictionary.words(), guesses, config)?;
    print_session_summary(&session);
    Ok(())
}

fn run_benchmark_command(dictionary: &Dictionary, count: usize, config: &ScoringConfig) {
    println!("Running benchmark on {count} random words...");

    let targets = sample_targets(dictionary.words(), count);
    let pb = benchmark_progress_bar(targets.len());
    let result = run_benchmark(dictionary.words(), &targets, config, Some(&pb));
    pb.finish_and_clear();

    print_benchmark_result(&result);
}

fn run_play_command(dictionary: &Dictionary, config: ScoringConfig) -> Result<()> {
    use wordle_helper::interactive::{App, run_tui};
    use wordle_helper::session::Session;

    if dictionary.is_empty() {
        bail!("dictionary is empty");
    }

    let session = Session::new(dictionary.words(), config);
    let app = App::new(session, dictionary.origin().to_string());
    run_tui(app)
}
