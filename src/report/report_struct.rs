use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::loc::Loc;
use crate::report::ErrorKey;

/// Describes a report about a potentially problematic situation that can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogReport {
    /// Used for choosing output colors and for filtering reports.
    pub severity: Severity,
    /// Mostly invisible in the output; used for filtering.
    pub confidence: Confidence,
    /// Defines the problem category. Used for filtering reports.
    pub key: ErrorKey,
    /// The primary error message. A short description of the problem.
    pub msg: String,
    /// Optional info message to be printed at the end.
    pub info: Option<String>,
    /// Should contain one or more elements.
    pub pointers: Vec<PointedMessage>,
}

impl LogReport {
    /// Returns the primary pointer.
    ///
    /// # Panics
    /// Can't happen, because the report builder makes sure there is at least one pointer.
    pub fn primary(&self) -> &PointedMessage {
        self.pointers.first().expect("A LogReport must always have at least one PointedMessage.")
    }

    /// Returns the length of the longest line number.
    pub fn indentation(&self) -> usize {
        self.pointers.iter().map(|pointer| pointer.loc.line.to_string().len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointedMessage {
    /// Which file and where in the file the error occurs.
    /// Might point to a whole file, rather than a specific location in the file.
    pub loc: Loc,
    /// The length of the offending phrase in characters.
    /// This will determine the number of carets that are printed at the given location.
    /// e.g.:     ^^^^^^^^^
    pub length: usize,
    /// A short message that will be printed at the caret location.
    pub msg: Option<String>,
}

impl PointedMessage {
    pub fn new(loc: Loc) -> Self {
        Self { loc, msg: None, length: 1 }
    }
}

/// Determines the output colour.
/// User can also filter by minimum severity level: e.g. don't show me Tips-level messages.
#[derive(
    Default, Debug, Display, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, EnumIter,
    EnumString, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// These are things that aren't necessarily wrong, but there may be a better, more
    /// idiomatic way to do it.
    Tips,
    /// This problem likely will not affect the completions, but is just sloppy data.
    Untidy,
    /// The problem means some completions will be missing or wrong.
    #[default]
    Warning,
    /// The problem means a whole file or entry was skipped.
    Error,
    /// The problem prevents the program from doing anything useful.
    Fatal,
}

/// Mostly invisible in the output.
/// User can filter by minimum confidence level.
/// This would be a dial for how many false positives they're willing to put up with.
#[derive(Default, Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    /// Quite likely to be a false positive.
    Weak,
    /// Reasonably confident that the problem is real.
    #[default]
    Reasonable,
    /// Very confident that this problem is real.
    Strong,
}
