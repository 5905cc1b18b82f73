use std::collections::HashMap;
use once_cell::sync::Lazy;
use tracing::{debug, trace};
use crate::types::{EnumStorage, HostType};
use crate::{PgDocError, Result};

/// Storage type name every enum maps to
pub const ENUM_STORAGE_TYPE: &str = "integer";

/// PostgreSQL type OIDs for the parameter types host values bind as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PgType {
    Bool = 16,
    Int4 = 23,
    Int8 = 20,
    Float4 = 700,
    Float8 = 701,
    Numeric = 1700,
    Text = 25,
    Uuid = 2950,
    Timestamp = 1114,
    Timestamptz = 1184,
}

impl PgType {
    pub fn from_oid(oid: i32) -> Option<Self> {
        match oid {
            16 => Some(PgType::Bool),
            23 => Some(PgType::Int4),
            20 => Some(PgType::Int8),
            700 => Some(PgType::Float4),
            701 => Some(PgType::Float8),
            1700 => Some(PgType::Numeric),
            25 => Some(PgType::Text),
            2950 => Some(PgType::Uuid),
            1114 => Some(PgType::Timestamp),
            1184 => Some(PgType::Timestamptz),
            _ => None,
        }
    }

    pub fn to_oid(&self) -> i32 {
        *self as i32
    }

    pub fn name(&self) -> &'static str {
        match self {
            PgType::Bool => "bool",
            PgType::Int4 => "int4",
            PgType::Int8 => "int8",
            PgType::Float4 => "float4",
            PgType::Float8 => "float8",
            PgType::Numeric => "numeric",
            PgType::Text => "text",
            PgType::Uuid => "uuid",
            PgType::Timestamp => "timestamp",
            PgType::Timestamptz => "timestamptz",
        }
    }
}

static GLOBAL_TYPE_MAPPER: Lazy<TypeMapper> = Lazy::new(TypeMapper::new);

/// Maps host types onto PostgreSQL column types and cast expressions
#[derive(Debug, Clone)]
pub struct TypeMapper {
    pg_types: HashMap<HostType, &'static str>,
    db_types: HashMap<HostType, PgType>,
}

impl TypeMapper {
    pub fn new() -> Self {
        let mut mapper = TypeMapper {
            pg_types: HashMap::new(),
            db_types: HashMap::new(),
        };

        // Host type to column type names
        mapper.pg_types.insert(HostType::Int32, "integer");
        mapper.pg_types.insert(HostType::Int64, "bigint");
        mapper.pg_types.insert(HostType::Uuid, "uuid");
        mapper.pg_types.insert(HostType::String, "varchar");
        mapper.pg_types.insert(HostType::Bool, "boolean");
        mapper.pg_types.insert(HostType::Float64, "double precision");
        mapper.pg_types.insert(HostType::Decimal, "decimal");
        mapper.pg_types.insert(HostType::Float32, "decimal");
        mapper.pg_types.insert(HostType::DateTime, "timestamp without time zone");
        mapper.pg_types.insert(HostType::DateTimeOffset, "timestamp with time zone");

        // Host type to the parameter type a bound value is sent as
        mapper.db_types.insert(HostType::Int32, PgType::Int4);
        mapper.db_types.insert(HostType::Int64, PgType::Int8);
        mapper.db_types.insert(HostType::Uuid, PgType::Uuid);
        mapper.db_types.insert(HostType::String, PgType::Text);
        mapper.db_types.insert(HostType::Bool, PgType::Bool);
        mapper.db_types.insert(HostType::Float64, PgType::Float8);
        mapper.db_types.insert(HostType::Decimal, PgType::Numeric);
        mapper.db_types.insert(HostType::Float32, PgType::Float4);
        mapper.db_types.insert(HostType::DateTime, PgType::Timestamp);
        mapper.db_types.insert(HostType::DateTimeOffset, PgType::Timestamptz);

        mapper
    }

    /// Process-wide mapper, built on first use and never mutated afterwards
    pub fn global() -> &'static TypeMapper {
        &GLOBAL_TYPE_MAPPER
    }

    /// Every (host type, column type name) pair of the static table
    pub fn entries(&self) -> impl Iterator<Item = (&HostType, &'static str)> + '_ {
        self.pg_types.iter().map(|(host, name)| (host, *name))
    }

    /// Resolve the PostgreSQL column type name for a host type.
    ///
    /// Nullable wrappers are unwrapped one level at a time and every enum maps to
    /// `integer`. Anything else must be in the static table.
    pub fn type_name_for(&self, host_type: &HostType) -> Result<&'static str> {
        match host_type {
            HostType::Nullable(inner) => self.type_name_for(inner),
            HostType::Enum(_) => Ok(ENUM_STORAGE_TYPE),
            other => self.pg_types.get(other).copied().ok_or_else(|| {
                debug!("No column type mapping for {}", other);
                PgDocError::UnmappedType {
                    type_name: other.full_name(),
                }
            }),
        }
    }

    /// Whether `type_name_for` would succeed for this host type
    pub fn has_mapping(&self, host_type: &HostType) -> bool {
        match host_type {
            HostType::Nullable(inner) => self.has_mapping(inner),
            HostType::Enum(_) => true,
            other => self.pg_types.contains_key(other),
        }
    }

    /// Resolve the parameter type a value of this host type binds as
    pub fn db_type_for(&self, host_type: &HostType) -> Result<PgType> {
        match host_type {
            HostType::Nullable(inner) => self.db_type_for(inner),
            HostType::Enum(_) => Ok(PgType::Int4),
            other => self.db_types.get(other).copied().ok_or_else(|| {
                PgDocError::UnmappedType {
                    type_name: other.full_name(),
                }
            }),
        }
    }

    /// Wrap a JSON locator in the cast needed to compare it against a typed value.
    ///
    /// Enums stored as strings compare textually and get no cast. Nullable wrappers
    /// are not unwrapped here; callers pass the member's underlying type.
    pub fn apply_cast_to_locator(
        &self,
        locator: &str,
        enum_storage: EnumStorage,
        host_type: &HostType,
    ) -> Result<String> {
        if host_type.is_enum() {
            return Ok(match enum_storage {
                EnumStorage::AsInteger => format!("({locator})::{ENUM_STORAGE_TYPE}"),
                EnumStorage::AsString => locator.to_string(),
            });
        }

        let Some(pg_type) = self.pg_types.get(host_type) else {
            debug!("No cast available for member type {}", host_type);
            return Err(PgDocError::UnmappedCastType {
                type_name: host_type.full_name(),
            });
        };

        let cast = format!("CAST({locator} as {pg_type})");
        trace!("Cast locator {} for {}: {}", locator, host_type, cast);
        Ok(cast)
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new()
    }
}
