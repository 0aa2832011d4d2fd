//! Work out what belongs at a cursor position, by scanning the text around it.
//!
//! None of this uses a real parser. The block path is found by counting braces, and everything
//! else is derived from the names of the enclosing blocks and the text of the cursor's line.

pub use crate::analysis::blockpath::{compute_block_path, BlockPath};
pub use crate::analysis::blocks::BlockRole;
pub use crate::analysis::context::{
    analyze_block_context, analyze_block_context_from, analyze_modifier_context,
    analyze_modifier_context_from, classify, fields_for_context, internal_field_schema,
    keyword_extra_fields, AnalysisContext, BlockContext, ContextType, FieldOrigin,
    ModifierContext, ResolvedField,
};
pub use crate::analysis::line::{parse_line_context, LineContext};

mod blockpath;
mod blocks;
mod context;
mod line;
