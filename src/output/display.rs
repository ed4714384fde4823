//! Display functions for command results

use super::formatters::{create_progress_bar, format_candidate_preview, guess_tiles};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::feedback_to_emoji;
use crate::session::{MAX_GUESSES, Session};
use colored::Colorize;

/// Print the state of a session: guesses, candidates and suggestion
pub fn print_session_summary(session: &Session<'_>) {
    for (i, guess) in session.history().iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().bright_black(), guess_tiles(guess));
    }

    let candidates = session.candidates();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} of {} words remain",
        candidates.len().to_string().bright_cyan().bold(),
        session.dictionary_len()
    );
    println!("{}", "─".repeat(60).cyan());

    if candidates.is_empty() {
        println!(
            "\n{}",
            "❌ No words match. Double-check the feedback.".red().bold()
        );
        return;
    }

    println!("{}", format_candidate_preview(candidates));

    if let Some(suggestion) = session.suggestion() {
        print!(
            "\n📊 Suggested guess: {}",
            suggestion.word.text().bright_yellow().bold()
        );
        match suggestion.score {
            Some(score) => println!(" {}", format!("(score {score:.1})").bright_black()),
            None => println!(),
        }
        println!("   {}", suggestion.reason);
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word,
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(score) = step.score {
                println!("  Score:      {score:.1}");
            }
            println!("  Why:        {}", step.reason);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_GUESSES {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, result.total_words as f64, 40);
        println!("   {guess_count}: {} {count:4}", bar.green());
    }

    if !result.failed_words.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            result.failed_words.join(", ")
        );
    }
}
