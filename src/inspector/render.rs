//! Terminal rendering of analysis results.

use super::RunSummary;
use crate::analysis::{AnalysisResult, BadgeStyle, SafetyRating};
use colored::{ColoredString, Colorize};
use indicatif::ProgressBar;
use std::{
    io::{self, Write},
    time::Duration,
};

/// The results area. Messages arrive fully composed; implementations only
/// decide how to draw them.
pub trait Renderer {
    fn begin(&mut self, total: usize) -> io::Result<()>;
    fn warning(&mut self, message: &str) -> io::Result<()>;
    fn result(&mut self, ingredient: &str, result: &AnalysisResult) -> io::Result<()>;
    fn item_error(&mut self, message: &str) -> io::Result<()>;
    fn connection_error(&mut self, message: &str) -> io::Result<()>;
    fn separator(&mut self) -> io::Result<()>;
    fn finish(&mut self, summary: &RunSummary) -> io::Result<()>;
}

pub fn badge(rating: &SafetyRating) -> ColoredString {
    let label = format!("Rating: {}", rating);
    match rating.badge() {
        BadgeStyle::Positive => label.green().bold(),
        BadgeStyle::Warning => label.yellow().bold(),
        BadgeStyle::Negative => label.red().bold(),
        BadgeStyle::Neutral => label.dimmed(),
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    show_progress: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            show_progress: true,
            spinner: None,
        }
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renders into `out` without a progress spinner.
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_progress: false,
            spinner: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        let out = &mut self.out;
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| writeln!(out, "{}", line)),
            None => writeln!(out, "{}", line),
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin(&mut self, total: usize) -> io::Result<()> {
        if self.show_progress {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("Analyzing {} ingredients...", total));
            spinner.enable_steady_tick(Duration::from_millis(100));
            self.spinner = Some(spinner);
        }
        Ok(())
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        self.emit(message.yellow())
    }

    fn result(&mut self, ingredient: &str, result: &AnalysisResult) -> io::Result<()> {
        self.emit(ingredient.cyan().bold())?;
        self.emit(badge(&result.rating()))?;
        self.emit(format!("{} {}", "Purpose:".bold(), result.purpose()))?;
        self.emit(format!("{} {}", "Notes:".bold(), result.notes()))
    }

    fn item_error(&mut self, message: &str) -> io::Result<()> {
        self.emit(message.red())
    }

    fn connection_error(&mut self, message: &str) -> io::Result<()> {
        self.emit(message.red().bold())
    }

    fn separator(&mut self) -> io::Result<()> {
        self.emit("---".dimmed())
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        if summary.attempted > 0 {
            let line = format!(
                "{} analyzed, {} failed{}",
                summary.succeeded,
                summary.failed,
                if summary.aborted { " (stopped early)" } else { "" }
            );
            writeln!(self.out, "{}", line.dimmed())?;
        }
        self.out.flush()
    }
}
