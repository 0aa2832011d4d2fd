//! The schema registry and the data it is built from.

pub use catalog::{Catalog, CatalogKind, KeywordDef, ValueType};
pub use extension::SchemaError;
pub use field::{FieldDescriptor, FieldKind, FieldList};
pub use modif::{ModifKinds, ModifierCategory};
pub use registry::{BlockExtra, EntityBody, EntitySchema, Registry};
pub use tables::entities::ExtraMode;

mod catalog;
mod extension;
mod field;
mod modif;
mod registry;
mod tables;
