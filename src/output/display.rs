//! Display functions for command results

use crate::commands::{BatchReport, SolveResult};
use crate::solver::Outcome;
use colored::Colorize;

/// Print the aggregate statistics of a batch run
pub fn print_batch_report(report: &BatchReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    println!("\n{}", "Overall Performance".bright_cyan().bold());
    println!("  Words attempted:     {}", report.total_words);
    if report.total_words == 0 {
        return;
    }

    let solved_pct = report.solved as f64 / report.total_words as f64 * 100.0;
    println!(
        "  Solved:              {} {}",
        report.solved,
        format!("({solved_pct:.1}%)").green()
    );
    if report.failed > 0 {
        let failed_pct = report.failed as f64 / report.total_words as f64 * 100.0;
        println!(
            "  Failed:              {} {}",
            report.failed,
            format!("({failed_pct:.1}%)").red()
        );
    }
    println!("  Letters guessed:     {}", report.total_guesses);
    println!(
        "  Average guesses:     {}",
        format!("{:.2}", report.average_guesses).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        report.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.4}s",
        report.average_time.as_secs_f64()
    );

    if !report.guess_distribution.is_empty() {
        println!("\n{}", "Guess Distribution".bright_cyan().bold());
        let max_count = *report.guess_distribution.values().max().unwrap_or(&1);
        let mut counts: Vec<(usize, usize)> = report
            .guess_distribution
            .iter()
            .map(|(&guesses, &count)| (guesses, count))
            .collect();
        counts.sort_unstable();

        for (guesses, count) in counts {
            let percentage = count as f64 / report.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count).max(1);
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {guesses:>2} letters: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !report.hardest_words.is_empty() {
        println!("\n{}", "Hardest Words".yellow().bold());
        for (word, guesses) in report.hardest_words.iter().take(5) {
            println!("  {} ({} letters)", word.yellow(), guesses);
        }
    }

    if !report.unsolved_words.is_empty() {
        println!("\n{}", "Unsolved Words".red().bold());
        for word in report.unsolved_words.iter().take(10) {
            println!("  {}", word.red());
        }
        if report.unsolved_words.len() > 10 {
            println!("  … and {} more", report.unsolved_words.len() - 10);
        }
    }
}

/// Print the trace of a single solved word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.report.steps.iter().enumerate() {
        let mark = if step.hit {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("\nGuess {}: '{}' {} {}", i + 1, step.letter, mark, step.revealed);

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match result.report.outcome {
        Outcome::Won => println!(
            "{}",
            format!(
                "✅ Solved with {} letters ({} wrong)",
                result.report.guess_count(),
                result.report.incorrect_count()
            )
            .green()
            .bold()
        ),
        Outcome::Lost => println!(
            "{}",
            format!(
                "❌ Out of wrong guesses after {} letters",
                result.report.guess_count()
            )
            .red()
            .bold()
        ),
        Outcome::Unsolvable => println!(
            "{}",
            format!(
                "❌ Dictionary exhausted after {} letters",
                result.report.guess_count()
            )
            .red()
            .bold()
        ),
    }
}
