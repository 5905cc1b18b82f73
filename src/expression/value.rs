use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Number, Value as JsonValue};
use std::fmt;
use uuid::Uuid;
use crate::types::{EnumStorage, EnumType, HostType};
use crate::{PgDocError, Result};

/// A literal carried by a constant expression node.
///
/// `Null` is a real value: a predicate compared against it is still bound, it is
/// never treated as a missing value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    String(String),
    Uuid(Uuid),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
    Enum {
        enum_type: EnumType,
        name: String,
        value: i64,
    },
}

impl ConstantValue {
    /// Build an enum literal from a member name, `None` if the enum has no such member
    pub fn enum_member(enum_type: EnumType, name: &str) -> Option<Self> {
        let value = enum_type.discriminant_of(name)?;
        Some(ConstantValue::Enum {
            enum_type,
            name: name.to_string(),
            value,
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConstantValue::Null)
    }

    /// Host type of the literal. A null literal has none.
    pub fn host_type(&self) -> Option<HostType> {
        let host_type = match self {
            ConstantValue::Null => return None,
            ConstantValue::Bool(_) => HostType::Bool,
            ConstantValue::Int32(_) => HostType::Int32,
            ConstantValue::Int64(_) => HostType::Int64,
            ConstantValue::Float32(_) => HostType::Float32,
            ConstantValue::Float64(_) => HostType::Float64,
            ConstantValue::Decimal(_) => HostType::Decimal,
            ConstantValue::String(_) => HostType::String,
            ConstantValue::Uuid(_) => HostType::Uuid,
            ConstantValue::DateTime(_) => HostType::DateTime,
            ConstantValue::DateTimeOffset(_) => HostType::DateTimeOffset,
            ConstantValue::Enum { enum_type, .. } => HostType::Enum(enum_type.clone()),
        };
        Some(host_type)
    }

    /// Render the literal the way it appears inside a stored document.
    ///
    /// NaN and infinite floats have no JSON form and fail rather than bind as null.
    pub fn to_json(&self, enum_storage: EnumStorage) -> Result<JsonValue> {
        let json = match self {
            ConstantValue::Null => JsonValue::Null,
            ConstantValue::Bool(b) => JsonValue::Bool(*b),
            ConstantValue::Int32(i) => JsonValue::from(*i),
            ConstantValue::Int64(i) => JsonValue::from(*i),
            ConstantValue::Float32(f) => self.float_to_json(f64::from(*f))?,
            ConstantValue::Float64(f) => self.float_to_json(*f)?,
            // Kept textual so precision survives the round trip
            ConstantValue::Decimal(d) => JsonValue::String(d.to_string()),
            ConstantValue::String(s) => JsonValue::String(s.clone()),
            ConstantValue::Uuid(u) => JsonValue::String(u.to_string()),
            ConstantValue::DateTime(dt) => {
                JsonValue::String(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
            }
            ConstantValue::DateTimeOffset(dt) => JsonValue::String(dt.to_rfc3339()),
            ConstantValue::Enum { name, value, .. } => match enum_storage {
                EnumStorage::AsInteger => JsonValue::from(*value),
                EnumStorage::AsString => JsonValue::String(name.clone()),
            },
        };
        Ok(json)
    }

    fn float_to_json(&self, f: f64) -> Result<JsonValue> {
        Number::from_f64(f)
            .map(JsonValue::Number)
            .ok_or_else(|| PgDocError::UnrepresentableValue {
                value: self.to_string(),
            })
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Null => f.write_str("null"),
            ConstantValue::Bool(b) => write!(f, "{b}"),
            ConstantValue::Int32(i) => write!(f, "{i}"),
            ConstantValue::Int64(i) => write!(f, "{i}"),
            ConstantValue::Float32(v) => write!(f, "{v}"),
            ConstantValue::Float64(v) => write!(f, "{v}"),
            ConstantValue::Decimal(d) => write!(f, "{d}"),
            ConstantValue::String(s) => write!(f, "{s:?}"),
            ConstantValue::Uuid(u) => write!(f, "\"{u}\""),
            ConstantValue::DateTime(dt) => write!(f, "\"{dt}\""),
            ConstantValue::DateTimeOffset(dt) => write!(f, "\"{}\"", dt.to_rfc3339()),
            ConstantValue::Enum { enum_type, name, .. } => {
                let short_name = enum_type
                    .full_name()
                    .rsplit("::")
                    .next()
                    .unwrap_or(enum_type.full_name());
                write!(f, "{short_name}.{name}")
            }
        }
    }
}

macro_rules! impl_from_for_constant {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for ConstantValue {
                fn from(v: $t) -> Self {
                    ConstantValue::$variant(v)
                }
            }
        )*
    };
}

impl_from_for_constant!(
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    Decimal => Decimal,
    String => String,
    Uuid => Uuid,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeOffset,
);

impl From<&str> for ConstantValue {
    fn from(v: &str) -> Self {
        ConstantValue::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for ConstantValue {
    fn from(v: DateTime<Utc>) -> Self {
        ConstantValue::DateTimeOffset(v.fixed_offset())
    }
}

impl<T: Into<ConstantValue>> From<Option<T>> for ConstantValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(ConstantValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn priority() -> EnumType {
        EnumType::new("app::Priority", [("Low", 1), ("High", 5)])
    }

    #[test]
    fn test_host_type_of_literals() {
        assert_eq!(ConstantValue::from(42).host_type(), Some(HostType::Int32));
        assert_eq!(ConstantValue::from("abc").host_type(), Some(HostType::String));
        assert_eq!(ConstantValue::from(Option::<i64>::None).host_type(), None);

        let high = ConstantValue::enum_member(priority(), "High").unwrap();
        assert_eq!(high.host_type(), Some(HostType::Enum(priority())));
    }

    #[test]
    fn test_option_conversion() {
        assert!(ConstantValue::from(Option::<String>::None).is_null());
        assert_eq!(ConstantValue::from(Some(7_i64)), ConstantValue::Int64(7));
    }

    #[test]
    fn test_enum_member_lookup() {
        assert!(ConstantValue::enum_member(priority(), "Medium").is_none());
    }

    #[test]
    fn test_to_json_honors_enum_storage() {
        let high = ConstantValue::enum_member(priority(), "High").unwrap();

        assert_eq!(high.to_json(EnumStorage::AsInteger).unwrap(), json!(5));
        assert_eq!(high.to_json(EnumStorage::AsString).unwrap(), json!("High"));
    }

    #[test]
    fn test_to_json_scalars() {
        let decimal: Decimal = "12.50".parse().unwrap();

        assert_eq!(ConstantValue::Null.to_json(EnumStorage::AsInteger).unwrap(), JsonValue::Null);
        assert_eq!(ConstantValue::from(true).to_json(EnumStorage::AsInteger).unwrap(), json!(true));
        assert_eq!(ConstantValue::from(decimal).to_json(EnumStorage::AsInteger).unwrap(), json!("12.50"));
        assert_eq!(ConstantValue::from(1.5_f32).to_json(EnumStorage::AsInteger).unwrap(), json!(1.5));
    }

    #[test]
    fn test_to_json_rejects_non_finite_floats() {
        for value in [ConstantValue::from(f64::NAN), ConstantValue::from(f64::INFINITY), ConstantValue::from(f32::NEG_INFINITY)] {
            let err = value.to_json(EnumStorage::AsInteger).unwrap_err();
            assert!(matches!(err, PgDocError::UnrepresentableValue { .. }));
            assert_eq!(err.pg_error_code(), "22P02");
        }
    }

    #[test]
    fn test_display() {
        let high = ConstantValue::enum_member(priority(), "High").unwrap();

        assert_eq!(ConstantValue::from("Bill").to_string(), "\"Bill\"");
        assert_eq!(ConstantValue::Null.to_string(), "null");
        assert_eq!(high.to_string(), "Priority.High");
    }
}
