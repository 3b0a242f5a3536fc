//! NFT Demo Suite
//!
//! Demonstrations of the Nakanishi-Fujii-Todo optimizer:
//!
//! - **Sum of cosines**: separable benchmark that converges in one sweep
//! - **VQE (Variational Quantum Eigensolver)**: ground state of H2 with an
//!   RY/CZ ansatz simulated on a statevector

pub mod circuits;
pub mod config;
pub mod error;
pub mod problems;
pub mod runners;

pub use error::{DemoError, DemoResult};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

const WIDTH: usize = 56;
const LABEL_WIDTH: usize = 22;

/// Progress bar counting objective evaluations against the cap.
pub fn create_progress_bar(cap: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(cap);
    let bar = ProgressStyle::with_template("{msg:>12} {wide_bar:.cyan/blue} {pos:>6}/{len} evals")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(bar.progress_chars("=> "));
    pb.set_message(message.to_string());
    pb
}

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Title block for a demo run.
pub fn print_header(title: &str) {
    let line = style(rule('=', WIDTH)).cyan();
    println!("\n{line}\n{}\n{line}", style(title).cyan().bold());
}

/// Subheading inside a run, padded out to the header width.
pub fn print_section(title: &str) {
    let tail = rule('-', WIDTH.saturating_sub(title.chars().count() + 1));
    println!("\n{} {}", style(title).green().bold(), style(tail).dim());
}

/// Aligned `label  value` line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    let label = format!("{label:<width$}", width = LABEL_WIDTH);
    println!("  {} {value}", style(label).dim());
}

pub fn print_success(message: &str) {
    println!("{} {message}", style("ok").green().bold());
}

pub fn print_info(message: &str) {
    println!("{} {message}", style("--").blue());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_width() {
        assert_eq!(rule('-', 3), "---");
        assert!(rule('=', 0).is_empty());
    }

    #[test]
    fn test_progress_bar_tracks_cap() {
        let pb = create_progress_bar(200, "optimizing");
        assert_eq!(pb.length(), Some(200));
        assert_eq!(pb.message(), "optimizing");
    }
}
