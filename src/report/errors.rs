//! Collect error reports and then write them out.

use std::cmp::Ordering;
use std::fs::{read_to_string, File};
use std::io::{stderr, Write};
use std::mem::take;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

use anyhow::Result;

use crate::helpers::{TigerHashMap, TigerHashSet};
use crate::loc::Loc;
use crate::report::writer::log_report;
use crate::report::writer_json::log_report_json;
use crate::report::{ErrorKey, LogReport, OutputStyle, Severity};

static ERRORS: LazyLock<Mutex<Errors>> = LazyLock::new(|| Mutex::new(Errors::default()));

#[allow(missing_debug_implementations)]
pub struct Errors {
    pub(crate) output: Box<dyn Write + Send>,

    /// Files that have been read in to get the lines where errors occurred.
    /// Cached here to avoid duplicate I/O.
    filecache: TigerHashMap<PathBuf, String>,

    /// Reports below this severity are dropped.
    min_severity: Severity,
    /// Reports with these keys are dropped.
    ignored_keys: TigerHashSet<ErrorKey>,

    /// Output color and style configuration.
    pub(crate) styles: OutputStyle,

    /// All reports that passed the checks, stored here to be sorted before being emitted all at once.
    /// It's a `HashSet` because loading the same extension file twice would give duplicate reports.
    storage: TigerHashSet<LogReport>,
}

impl Default for Errors {
    fn default() -> Self {
        Errors {
            output: Box::new(stderr()),
            filecache: TigerHashMap::default(),
            min_severity: Severity::Tips,
            ignored_keys: TigerHashSet::default(),
            styles: OutputStyle::default(),
            storage: TigerHashSet::default(),
        }
    }
}

impl Errors {
    /// Fetch the contents of a single line from a file.
    pub(crate) fn get_line(&mut self, loc: &Loc) -> Option<String> {
        if loc.line == 0 {
            return None;
        }
        let pathname = loc.pathname();
        if let Some(contents) = self.filecache.get(pathname) {
            return contents.lines().nth(loc.line as usize - 1).map(str::to_string);
        }
        let contents = read_to_string(pathname).ok()?;
        // Strip the BOM, if any
        #[allow(clippy::map_unwrap_or)] // borrow checker won't allow map_or here
        let contents = contents.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(contents);
        let line = contents.lines().nth(loc.line as usize - 1).map(str::to_string);
        self.filecache.insert(pathname.to_path_buf(), contents);
        line
    }

    /// Perform some checks to see whether the report should actually be logged.
    /// If yes, it will add it to the storage.
    fn push_report(&mut self, report: LogReport) {
        if report.severity < self.min_severity || self.ignored_keys.contains(&report.key) {
            return;
        }
        self.storage.insert(report);
    }

    /// Extract the stored reports, sort them, and return them as a vector of [`LogReport`].
    /// The stored reports will be left empty.
    pub fn take_reports(&mut self) -> Vec<LogReport> {
        let mut reports: Vec<LogReport> = take(&mut self.storage).into_iter().collect();
        reports.sort_unstable_by(|a, b| {
            // Severity in descending order
            let mut cmp = b.severity.cmp(&a.severity);
            if cmp != Ordering::Equal {
                return cmp;
            }
            // Confidence in descending order too
            cmp = b.confidence.cmp(&a.confidence);
            if cmp != Ordering::Equal {
                return cmp;
            }
            // If severity and confidence are the same, order by loc. Check all locs in order.
            for (a, b) in a.pointers.iter().zip(b.pointers.iter()) {
                cmp = a.loc.cmp(&b.loc);
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
            // Fallback: order by message text.
            a.msg.cmp(&b.msg)
        });
        reports
    }

    /// Print all the stored reports to the error output.
    /// Set `json` if they should be printed as a JSON array. Otherwise they are printed in the
    /// default output format.
    ///
    /// Returns true iff any reports were printed.
    pub fn emit_reports(&mut self, json: bool) -> bool {
        let reports = self.take_reports();
        if json {
            _ = writeln!(self.output, "[");
            let mut first = true;
            for report in &reports {
                if !first {
                    _ = writeln!(self.output, ",");
                }
                first = false;
                log_report_json(self, report);
            }
            _ = writeln!(self.output, "\n]");
        } else {
            for report in &reports {
                log_report(self, report);
            }
        }
        !reports.is_empty()
    }

    /// Get a mutable lock on the global ERRORS struct.
    ///
    /// # Panics
    /// May panic when the mutex has been poisoned by another thread.
    pub fn get_mut() -> MutexGuard<'static, Errors> {
        ERRORS.lock().unwrap()
    }
}

/// Configure the error reports to be written to this file instead of to stderr.
pub fn set_output_file(file: &Path) -> Result<()> {
    let file = File::create(file)?;
    Errors::get_mut().output = Box::new(file);
    Ok(())
}

/// Store an error report to be emitted when [`emit_reports`] is called.
pub fn log(report: LogReport) {
    Errors::get_mut().push_report(report);
}

/// Print all the stored reports to the error output.
/// Set `json` if they should be printed as a JSON array. Otherwise they are printed in the
/// default output format.
pub fn emit_reports(json: bool) -> bool {
    Errors::get_mut().emit_reports(json)
}

/// Extract the stored reports, sort them, and return them as a vector of [`LogReport`].
/// The stored reports will be left empty.
pub fn take_reports() -> Vec<LogReport> {
    Errors::get_mut().take_reports()
}

pub fn set_minimum_severity(severity: Severity) {
    Errors::get_mut().min_severity = severity;
}

pub fn ignore_key(key: ErrorKey) {
    Errors::get_mut().ignored_keys.insert(key);
}

pub fn disable_ansi_colors() {
    Errors::get_mut().styles = OutputStyle::no_color();
}
