//! This library is the engine behind `ck3-complete`.
//!
//! It works out, from the text of a Crusader Kings 3 script file and a cursor position, what kind
//! of thing can be typed there and turns that into completion candidates. The schema of what
//! CK3 script contains comes from built-in tables that can be extended with JSON files.

#![warn(missing_debug_implementations)]

pub use crate::analysis::{
    analyze_block_context, analyze_modifier_context, classify, compute_block_path,
    fields_for_context, internal_field_schema, keyword_extra_fields, parse_line_context,
    AnalysisContext, BlockContext, BlockPath, BlockRole, ContextType, FieldOrigin, LineContext,
    ModifierContext, ResolvedField,
};
pub use crate::complete::{
    analyze_at, buffer_lines, complete, synthesize, Candidate, CandidateKind, CompletionOptions,
    CompletionRequest, InsertFormat,
};
pub use crate::entity::EntityKind;
pub use crate::loc::Loc;
pub use crate::report::{
    disable_ansi_colors, emit_reports, set_output_file, take_reports, ErrorKey, LogReport,
    Severity,
};
pub use crate::schema::{
    Catalog, CatalogKind, EntityBody, EntitySchema, FieldDescriptor, FieldKind, FieldList,
    KeywordDef, ModifierCategory, Registry, SchemaError, ValueType,
};
pub use crate::scopes::Scopes;
pub use crate::settings::{find_settings, Settings, SETTINGS_FILE};

pub mod analysis;
pub mod complete;
mod entity;
mod helpers;
mod loc;
pub mod report;
pub mod schema;
mod scopes;
mod settings;
