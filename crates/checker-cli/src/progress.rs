//! Terminal feedback for a sub-account audit: a spinner while courses are
//! listed, then one bar tick per audited course.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use checker_core::CourseAuditRow;
use checker_core::enums::{FAIL_GLYPH, PASS_GLYPH};

use crate::ui;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const BAR_TEMPLATE: &str = "{bar:30.cyan/blue} {pos}/{len} {msg}";

pub struct AuditProgress {
    bar: ProgressBar,
}

impl AuditProgress {
    /// Spin while the courses of `sub_account` are listed.
    #[must_use]
    pub fn discovering(sub_account: &str) -> Self {
        let bar = if ui::prefs().progress {
            let spinner = ProgressBar::new_spinner();
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_style(
                ProgressStyle::with_template(SPINNER_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(format!("listing courses of {sub_account}"));
        Self { bar }
    }

    /// Swap the spinner for a bar over `total` courses.
    pub fn start_courses(&mut self, total: usize) {
        let total = u64::try_from(total).unwrap_or(u64::MAX);
        let bar = if self.bar.is_hidden() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total).with_style(
                ProgressStyle::with_template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            )
        };
        bar.set_length(total);
        self.bar.finish_and_clear();
        self.bar = bar;
    }

    /// Tick once for a finished course, naming it with its overall verdict.
    pub fn course_done(&self, row: &CourseAuditRow) {
        let glyph = if row.passed_all() { PASS_GLYPH } else { FAIL_GLYPH };
        self.bar.set_message(format!("{glyph} {}", row.name));
        self.bar.inc(1);
    }

    pub fn discovery_failed(&self) {
        self.bar.abandon_with_message("course discovery failed");
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}
