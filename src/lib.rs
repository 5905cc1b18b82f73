pub mod config;
pub mod expression;
pub mod types;

use std::sync::Arc;
use thiserror::Error;

pub use expression::{
    BinaryOperator, ConstantValue, Expression, ExpressionValueResolver, ValueClassification,
};
pub use types::{
    EnumStorage, EnumType, HostType, HostTyped, PgType, TypeMapper, canonicalize_statement_text,
    canonicalize_type_synonym,
};

/// Inner failure captured while an upstream step tried to reduce a sub-expression
pub type EvaluationError = Arc<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PgDocError {
    #[error("No PostgreSQL type mapping for host type {type_name}")]
    UnmappedType { type_name: String },

    #[error("There is not a known PostgreSQL cast for member type {type_name}")]
    UnmappedCastType { type_name: String },

    #[error("Error in value expression inside of the query for '{expression}': {source}")]
    BadPredicateValue {
        expression: String,
        #[source]
        source: EvaluationError,
    },

    #[error("Expression is not a value expression: {expression}")]
    UnsupportedExpression { expression: String },

    #[error("Literal {value} has no JSON representation")]
    UnrepresentableValue { value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PgDocError>;

impl PgDocError {
    /// Get the PostgreSQL error code for this error
    pub fn pg_error_code(&self) -> &str {
        match self {
            PgDocError::UnmappedType { .. } => "42704", // undefined_object
            PgDocError::UnmappedCastType { .. } => "42846", // cannot_coerce
            PgDocError::BadPredicateValue { .. } => "22023", // invalid_parameter_value
            PgDocError::UnsupportedExpression { .. } => "0A000", // feature_not_supported
            PgDocError::UnrepresentableValue { .. } => "22P02", // invalid_text_representation
            PgDocError::Config(_) => "F0000", // config_file_error
        }
    }
}
