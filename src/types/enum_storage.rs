use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How enum-typed document members are physically stored in the JSON body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumStorage {
    /// Stored as the member's discriminant
    #[default]
    AsInteger,
    /// Stored as the member's name
    AsString,
}
