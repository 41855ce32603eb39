//! Spinner shown while a terraform step runs.

#![allow(clippy::expect_used)] // template is a literal

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner with `msg` and elapsed time, ticking every 100ms.
///
/// # Panics
///
/// Never in practice: the template is a literal.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let style = ProgressStyle::with_template("  {spinner:.cyan} {msg} {elapsed:.dim}")
        .expect("valid spinner template")
        .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷ ");
    let pb = ProgressBar::new_spinner().with_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
