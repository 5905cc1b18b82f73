use tracing::debug;
use crate::{EvaluationError, PgDocError, Result};
use super::{ConstantValue, Expression};

/// What a single expression node means in a value position
#[derive(Debug, Clone)]
pub enum ValueClassification<'a> {
    /// A constant; `Null` included
    Literal(&'a ConstantValue),
    /// Upstream reduction of this value tried and failed
    EvaluationFailure {
        expression: String,
        error: EvaluationError,
    },
    /// Not a value position at all
    Unsupported,
}

/// Classifies and extracts literal values from isolated expression nodes
pub struct ExpressionValueResolver;

impl ExpressionValueResolver {
    pub fn classify(expression: &Expression) -> ValueClassification<'_> {
        match expression {
            Expression::Constant(value) => ValueClassification::Literal(value),
            Expression::PartialEvaluationFailure { evaluated, error } => {
                ValueClassification::EvaluationFailure {
                    expression: evaluated.to_string(),
                    error: error.clone(),
                }
            }
            _ => ValueClassification::Unsupported,
        }
    }

    /// True for constants and failed reductions, the nodes that sit in value positions
    pub fn is_value_expression(expression: &Expression) -> bool {
        matches!(
            expression,
            Expression::Constant(_) | Expression::PartialEvaluationFailure { .. }
        )
    }

    /// Extract the literal bound for a value position
    pub fn value(expression: &Expression) -> Result<ConstantValue> {
        match Self::classify(expression) {
            ValueClassification::Literal(value) => Ok(value.clone()),
            ValueClassification::EvaluationFailure { expression, error } => {
                debug!("Value expression '{}' failed to evaluate: {}", expression, error);
                Err(PgDocError::BadPredicateValue {
                    expression,
                    source: error,
                })
            }
            ValueClassification::Unsupported => {
                let expression = expression.to_string();
                debug!("Unsupported node reached value extraction: {}", expression);
                Err(PgDocError::UnsupportedExpression { expression })
            }
        }
    }
}
