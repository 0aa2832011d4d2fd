//! The optional `ck3-complete.toml` settings file.
//!
//! ```toml
//! max_enum_choices = 10
//! snippets = true
//! schema_extensions = ["schema/my_mod.json"]
//! min_severity = "warning"
//! ignore_keys = ["override"]
//! ```
//!
//! Every key is optional. Unknown keys and values of the wrong type are reported, and the
//! defaults are used instead.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml::{Table, Value};

use crate::complete::CompletionOptions;
use crate::loc::Loc;
use crate::report::{err, ignore_key, set_minimum_severity, warn, ErrorKey, Severity};
use crate::schema::Registry;

/// The file name that [`find_settings`] looks for.
pub const SETTINGS_FILE: &str = "ck3-complete.toml";

const KNOWN_KEYS: &[&str] =
    &["max_enum_choices", "snippets", "schema_extensions", "min_severity", "ignore_keys"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub max_enum_choices: usize,
    pub snippets: bool,
    /// Schema extension files, already resolved relative to the settings file.
    pub schema_extensions: Vec<PathBuf>,
    /// Reports below this severity are not shown.
    pub min_severity: Option<Severity>,
    /// Reports with these keys are not shown.
    pub ignore_keys: Vec<ErrorKey>,
}

impl Default for Settings {
    fn default() -> Self {
        let options = CompletionOptions::default();
        Settings {
            max_enum_choices: options.max_enum_choices,
            snippets: options.snippets,
            schema_extensions: Vec::new(),
            min_severity: None,
            ignore_keys: Vec::new(),
        }
    }
}

/// Look for a settings file in `start` and each of its parent directories.
/// `start` may also be a file, in which case the search starts in its directory.
pub fn find_settings(start: &Path) -> Option<PathBuf> {
    let start = if start.is_file() { start.parent()? } else { start };
    start.ancestors().map(|dir| dir.join(SETTINGS_FILE)).find(|candidate| candidate.is_file())
}

/// Convert a byte offset into a 1-based line and column.
fn line_col(contents: &str, offset: usize) -> (usize, usize) {
    let before = &contents[..offset.min(contents.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, before[line_start..].chars().count() + 1)
}

/// Point at the line where `key` is set.
fn key_loc(path: &Path, contents: &str, key: &str) -> Loc {
    for (nr, line) in contents.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.strip_prefix(key).is_some_and(|rest| rest.trim_start().starts_with('=')) {
            return Loc::new(path, nr + 1, line.len() - trimmed.len() + 1);
        }
    }
    Loc::for_file(path)
}

fn wrong_type(path: &Path, contents: &str, key: &str, expected: &str) {
    err(ErrorKey::Config)
        .msg(format!("`{key}` should be {expected}"))
        .info("the default is used instead")
        .loc((key_loc(path, contents, key), key.chars().count()))
        .push();
}

impl Settings {
    /// Read the settings file at `path`.
    ///
    /// Only failure to read the file is returned as an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)
            .with_context(|| format!("could not read settings file {}", path.display()))?;
        Ok(Settings::parse(path, &contents))
    }

    /// Parse settings from `contents`. Problems are reported against `path`.
    pub fn parse(path: &Path, contents: &str) -> Self {
        let mut settings = Settings::default();
        let table = match contents.parse::<Table>() {
            Ok(table) => table,
            Err(e) => {
                let (line, column) = e.span().map_or((0, 0), |span| line_col(contents, span.start));
                err(ErrorKey::ParseError)
                    .msg("could not parse settings file")
                    .info(e.message().to_owned())
                    .loc(Loc::new(path, line, column))
                    .push();
                return settings;
            }
        };

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for (key, value) in &table {
            match key.as_str() {
                "max_enum_choices" => match value.as_integer().map(usize::try_from) {
                    Some(Ok(n)) if n > 0 => settings.max_enum_choices = n,
                    _ => wrong_type(path, contents, key, "a positive number"),
                },
                "snippets" => match value {
                    Value::Boolean(b) => settings.snippets = *b,
                    _ => wrong_type(path, contents, key, "true or false"),
                },
                "schema_extensions" => match string_list(value) {
                    Some(list) => {
                        settings.schema_extensions =
                            list.into_iter().map(|file| base.join(file)).collect();
                    }
                    None => wrong_type(path, contents, key, "a list of file names"),
                },
                "min_severity" => {
                    match value.as_str().and_then(|s| s.parse::<Severity>().ok()) {
                        Some(severity) => settings.min_severity = Some(severity),
                        None => wrong_type(
                            path,
                            contents,
                            key,
                            "one of tips, untidy, warning, error, fatal",
                        ),
                    }
                }
                "ignore_keys" => match string_list(value) {
                    Some(list) => {
                        for name in list {
                            match name.parse::<ErrorKey>() {
                                Ok(key) => settings.ignore_keys.push(key),
                                Err(_) => {
                                    warn(ErrorKey::Config)
                                        .msg(format!("unknown report key `{name}`"))
                                        .loc(key_loc(path, contents, "ignore_keys"))
                                        .push();
                                }
                            }
                        }
                    }
                    None => wrong_type(path, contents, key, "a list of report keys"),
                },
                _ => {
                    warn(ErrorKey::Config)
                        .msg(format!("unknown setting `{key}`"))
                        .info(format!("known settings are {}", KNOWN_KEYS.join(", ")))
                        .loc((key_loc(path, contents, key), key.chars().count()))
                        .push();
                }
            }
        }
        settings
    }

    /// Configure the report store according to these settings.
    pub fn apply(&self) {
        if let Some(severity) = self.min_severity {
            set_minimum_severity(severity);
        }
        for key in &self.ignore_keys {
            ignore_key(*key);
        }
    }

    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions { max_enum_choices: self.max_enum_choices, snippets: self.snippets }
    }

    /// Merge all the configured schema extensions into `registry`.
    pub fn load_extensions(&self, registry: &mut Registry) -> Result<()> {
        for path in &self.schema_extensions {
            registry.load_extension(path)?;
        }
        Ok(())
    }
}

fn string_list(value: &Value) -> Option<Vec<&str>> {
    value.as_array()?.iter().map(Value::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::parse(Path::new("unit/defaults.toml"), "");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.completion_options(), CompletionOptions::default());
    }

    #[test]
    fn test_values() {
        let contents = "max_enum_choices = 5\nsnippets = false\nschema_extensions = [\"a.json\"]\nmin_severity = \"error\"\nignore_keys = [\"override\"]\n";
        let settings = Settings::parse(Path::new("unit/mod/ck3-complete.toml"), contents);
        assert_eq!(settings.max_enum_choices, 5);
        assert!(!settings.snippets);
        assert_eq!(settings.schema_extensions, vec![PathBuf::from("unit/mod/a.json")]);
        assert_eq!(settings.min_severity, Some(Severity::Error));
        assert_eq!(settings.ignore_keys, vec![ErrorKey::Override]);
        let options = settings.completion_options();
        assert_eq!(options.max_enum_choices, 5);
        assert!(!options.snippets);
    }

    #[test]
    fn test_wrong_types() {
        let contents = "max_enum_choices = \"many\"\nsnippets = 1\n";
        let settings = Settings::parse(Path::new("unit/wrong.toml"), contents);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_line_col() {
        assert_eq!(line_col("abc\ndef", 0), (1, 1));
        assert_eq!(line_col("abc\ndef", 5), (2, 2));
        assert_eq!(line_col("abc", 99), (1, 4));
    }

    #[test]
    fn test_key_loc() {
        let path = Path::new("unit/loc.toml");
        let contents = "# snippets = true\n  snippets = false\n";
        let loc = key_loc(path, contents, "snippets");
        assert_eq!((loc.line, loc.column), (2, 3));
        assert_eq!(key_loc(path, contents, "missing").line, 0);
    }
}
