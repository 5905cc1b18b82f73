// Module for host type mappings and PostgreSQL type vocabulary
pub mod enum_storage;
pub mod host_type;
pub mod synonyms;
pub mod type_mapper;

pub use enum_storage::EnumStorage;
pub use host_type::{EnumType, HostType, HostTyped};
pub use synonyms::{canonicalize_statement_text, canonicalize_type_synonym};
pub use type_mapper::{PgType, TypeMapper};
