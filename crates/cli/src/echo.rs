use std::io::{self, Write};

use owo_colors::OwoColorize;
use wordlens_core::{ChartKind, RankedSelection, SelectionRange};

use crate::VERSION;

/// Print the session banner
pub fn print_banner() {
    eprintln!("\n{} {} {}", "Wordlens".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "Rank and chart the keywords of a web page".dimmed());
    eprintln!("{}\n", "Type `help` for the list of commands.".dimmed());
}

/// Print the input marker without a newline
pub fn print_marker() {
    eprint!("{} ", ">".bright_cyan());
    let _ = io::stderr().flush();
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print the command reference
pub fn print_help() {
    let commands = [
        ("url <URL>", "analyse a page (http, https, file:// or a local path)"),
        ("n <N>", "number of keywords to show"),
        ("chart <KIND>", "chart kind by name, label or position"),
        ("save", "save the page text under the output directory"),
        ("kinds", "list the chart kinds"),
        ("help", "show this message"),
        ("quit", "end the session"),
    ];

    eprintln!("{}", "Commands".bold().cyan());
    for (usage, about) in commands {
        eprintln!("  {:<14} {}", usage.bright_white(), about.dimmed());
    }
}

/// Print the chart kinds in selector order, marking the selected one
pub fn print_kinds(selected: ChartKind) {
    eprintln!("{}", "Chart kinds".bold().cyan());
    for kind in ChartKind::ALL {
        let marker = if kind == selected { "*" } else { " " };
        eprintln!(
            "{} {:>2}. {:<16} {}",
            marker.bright_green(),
            kind.position(),
            kind.slug().bright_white(),
            kind.label().dimmed()
        );
    }
}

/// Print the ranked keywords with their share of the selection
pub fn print_ranking(selection: &RankedSelection, range: &SelectionRange, n: usize) {
    println!("\n{}", "═".repeat(48).dimmed());
    println!(
        "{} {} {}",
        format!("Top {}", n).bold().cyan(),
        "keywords".cyan(),
        format!("(range {}-{})", range.min(), range.max()).dimmed()
    );
    println!("{}", "═".repeat(48).dimmed());

    for (rank, entry) in selection.iter().enumerate() {
        println!(
            "  {:>3}  {:>6}  {:>5.1}%  {}",
            (rank + 1).dimmed(),
            entry.count,
            selection.percentage(entry.count),
            entry.token.bright_white()
        );
    }
    println!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
