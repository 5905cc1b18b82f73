use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Identity of an application-side type that has to be represented in PostgreSQL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostType {
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal,
    Bool,
    String,
    Uuid,
    /// Timestamp without an offset
    DateTime,
    /// Timestamp carrying its UTC offset
    DateTimeOffset,
    Enum(EnumType),
    /// Optional wrapper around another host type
    Nullable(Box<HostType>),
    /// Any other application type, identified by its full name
    Named(String),
}

/// An application enum as seen by the mapper
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumType {
    full_name: String,
    members: Vec<(String, i64)>,
}

impl EnumType {
    pub fn new<N, M>(full_name: impl Into<String>, members: M) -> Self
    where
        N: Into<String>,
        M: IntoIterator<Item = (N, i64)>,
    {
        Self {
            full_name: full_name.into(),
            members: members.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn members(&self) -> &[(String, i64)] {
        &self.members
    }

    pub fn discriminant_of(&self, member: &str) -> Option<i64> {
        self.members
            .iter()
            .find(|(name, _)| name == member)
            .map(|(_, value)| *value)
    }

    pub fn member_named(&self, discriminant: i64) -> Option<&str> {
        self.members
            .iter()
            .find(|(_, value)| *value == discriminant)
            .map(|(name, _)| name.as_str())
    }
}

impl HostType {
    pub fn nullable(inner: HostType) -> Self {
        HostType::Nullable(Box::new(inner))
    }

    pub fn named(full_name: impl Into<String>) -> Self {
        HostType::Named(full_name.into())
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, HostType::Enum(_))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, HostType::Nullable(_))
    }

    /// The wrapped type when this is a nullable wrapper
    pub fn inner_from_nullable(&self) -> Option<&HostType> {
        match self {
            HostType::Nullable(inner) => Some(&**inner),
            _ => None,
        }
    }

    /// Full name used to identify the type in diagnostics
    pub fn full_name(&self) -> String {
        match self {
            HostType::Int32 => "i32".to_string(),
            HostType::Int64 => "i64".to_string(),
            HostType::Float32 => "f32".to_string(),
            HostType::Float64 => "f64".to_string(),
            HostType::Decimal => "rust_decimal::Decimal".to_string(),
            HostType::Bool => "bool".to_string(),
            HostType::String => "String".to_string(),
            HostType::Uuid => "uuid::Uuid".to_string(),
            HostType::DateTime => "chrono::NaiveDateTime".to_string(),
            HostType::DateTimeOffset => "chrono::DateTime<FixedOffset>".to_string(),
            HostType::Enum(enum_type) => enum_type.full_name.clone(),
            HostType::Nullable(inner) => format!("Option<{}>", inner.full_name()),
            HostType::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Rust types that know their host type identity
pub trait HostTyped {
    fn host_type() -> HostType;
}

macro_rules! impl_host_typed {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl HostTyped for $t {
                fn host_type() -> HostType {
                    HostType::$variant
                }
            }
        )*
    };
}

impl_host_typed!(
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    Decimal => Decimal,
    bool => Bool,
    String => String,
    str => String,
    Uuid => Uuid,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeOffset,
    DateTime<Utc> => DateTimeOffset,
);

impl<T: HostTyped> HostTyped for Option<T> {
    fn host_type() -> HostType {
        HostType::nullable(T::host_type())
    }
}
