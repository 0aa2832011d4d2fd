use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

use crate::analysis::FieldOrigin;

/// What a completion candidate stands for. Editors use this to pick an icon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Field,
    Trigger,
    Effect,
    Modifier,
    Value,
    Snippet,
}

impl From<FieldOrigin> for CandidateKind {
    fn from(origin: FieldOrigin) -> Self {
        match origin {
            FieldOrigin::Field => CandidateKind::Field,
            FieldOrigin::Trigger => CandidateKind::Trigger,
            FieldOrigin::Effect => CandidateKind::Effect,
            FieldOrigin::Modifier => CandidateKind::Modifier,
        }
    }
}

/// How the editor should treat `insert_text`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InsertFormat {
    Plain,
    /// With tab stops like `$1` and placeholders like `${1:value}` or `${1|yes,no|}`.
    Snippet,
}

/// One completion candidate, in a form that does not depend on any particular editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub label: String,
    pub kind: CandidateKind,
    /// A short summary of the kind of value, shown next to the label.
    pub detail: String,
    pub documentation: String,
    pub insert_text: String,
    pub insert_format: InsertFormat,
    /// Editors sort candidates by this instead of by label.
    pub sort_text: String,
}
