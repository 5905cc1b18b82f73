use std::fmt;
use std::sync::Arc;
use crate::EvaluationError;
use super::ConstantValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    AndAlso,
    OrElse,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::AndAlso => "&&",
            BinaryOperator::OrElse => "||",
        }
    }
}

/// A node of an already-parsed query predicate.
///
/// Upstream partial evaluation reduces closed sub-trees to `Constant`; when that
/// reduction throws, the sub-tree is replaced with `PartialEvaluationFailure`
/// holding what it tried to evaluate and why it failed.
#[derive(Debug, Clone)]
pub enum Expression {
    Constant(ConstantValue),
    /// Lambda parameter, e.g. the `x` in `x => x.Age > 3`
    Parameter(String),
    Member {
        target: Box<Expression>,
        member: String,
    },
    MethodCall {
        target: Option<Box<Expression>>,
        method: String,
        arguments: Vec<Expression>,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    PartialEvaluationFailure {
        evaluated: Box<Expression>,
        error: EvaluationError,
    },
}

impl Expression {
    pub fn constant(value: impl Into<ConstantValue>) -> Self {
        Expression::Constant(value.into())
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Expression::Parameter(name.into())
    }

    pub fn member(target: Expression, member: impl Into<String>) -> Self {
        Expression::Member {
            target: Box::new(target),
            member: member.into(),
        }
    }

    pub fn call(target: Option<Expression>, method: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::MethodCall {
            target: target.map(Box::new),
            method: method.into(),
            arguments,
        }
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn evaluation_failure<E>(evaluated: Expression, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Expression::PartialEvaluationFailure {
            evaluated: Box::new(evaluated),
            error: Arc::new(error),
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Binary { .. } => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{value}"),
            Expression::Parameter(name) => f.write_str(name),
            Expression::Member { target, member } => write!(f, "{target}.{member}"),
            Expression::MethodCall { target, method, arguments } => {
                if let Some(target) = target {
                    write!(f, "{target}.")?;
                }
                write!(f, "{method}(")?;
                for (idx, argument) in arguments.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            }
            Expression::Binary { op, left, right } => {
                left.fmt_operand(f)?;
                write!(f, " {} ", op.symbol())?;
                right.fmt_operand(f)
            }
            Expression::PartialEvaluationFailure { evaluated, .. } => write!(f, "{evaluated}"),
        }
    }
}
