//! The built-in CK3 data the registry is populated from.

pub(crate) mod effects;
pub(crate) mod entities;
pub(crate) mod extras;
pub(crate) mod internal;
pub(crate) mod iterators;
pub(crate) mod modifs;
pub(crate) mod targets;
pub(crate) mod triggers;
