use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The categories of problems that can be reported while loading settings and schema data.
///
/// The kebab-case names are what the user sees, and what they can put in the settings file to
/// silence a category.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
    IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKey {
    Config,
    ReadError,
    ParseError,
    Duplicate,
    Override,
    UnknownEntity,
    UnknownField,
    UnknownKind,
    UnknownScope,
    MissingValues,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(ErrorKey::UnknownScope.to_string(), "unknown-scope");
        assert_eq!("read-error".parse::<ErrorKey>(), Ok(ErrorKey::ReadError));
        assert!("no-such-key".parse::<ErrorKey>().is_err());
    }
}
