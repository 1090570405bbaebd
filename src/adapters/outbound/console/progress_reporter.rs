use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so progress never mixes with the status document on
/// stdout. Counted phases are drawn as an indicatif progress bar. With
/// `quiet`, only errors are shown.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    pub fn quiet() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: true,
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_progress_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}
