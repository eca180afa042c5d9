//! Display functions for hint and progress output

use super::formatters::completion_bar;
use crate::commands::ProgressSummary;
use crate::hints::HintReport;
use colored::Colorize;

/// Print the session opening banner
pub fn print_session_banner(found_count: usize, answer_count: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Spelling Bee - Progressive Hints                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "You have {} of {} answers. Four hints are available;",
        found_count.to_string().bright_yellow().bold(),
        answer_count.to_string().bright_yellow().bold()
    );
    println!("reveal only as many as you want.");
}

/// Print one hint phase
pub fn print_hint_report(report: &HintReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Hint {}/{}: {}",
        report.index + 1,
        report.total,
        report.label.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if report.lines.is_empty() {
        println!("  {}", "Nothing missing here!".green());
        return;
    }

    for line in &report.lines {
        if line.starts_with("***") {
            println!("  {}", line.bright_cyan().bold());
        } else {
            println!("  {line}");
        }
    }
}

/// Print the end-of-session banner
pub fn print_session_outro() {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        " 🐝 That was the last hint. Happy hunting! "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Print the progress summary
pub fn print_progress(summary: &ProgressSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE PROGRESS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Found {} of {} words ({:.1}%)",
        summary.found_count.to_string().bright_yellow().bold(),
        summary.answer_count,
        summary.percent_found()
    );

    println!("\n📈 {}", "By word length:".bright_cyan().bold());
    for row in &summary.by_length {
        let bar = completion_bar(row.found, row.total, 30);
        println!(
            "   {:>2} letters: {} {:>3}/{:<3}",
            row.length,
            bar.green(),
            row.found,
            row.total
        );
    }

    if !summary.invalid.is_empty() {
        println!(
            "\n⚠️  {}",
            "Found words that are not answers:".bright_red().bold()
        );
        for word in &summary.invalid {
            println!("   • {word}");
        }
    }
    println!();
}
