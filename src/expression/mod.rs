// Query expression nodes and literal extraction for value positions
pub mod node;
pub mod value;
pub mod value_resolver;

pub use node::{BinaryOperator, Expression};
pub use value::ConstantValue;
pub use value_resolver::{ExpressionValueResolver, ValueClassification};
