//! Error types for the criteria crate.
//!
//! The compiler itself cannot fail. Errors only arise while binding textual
//! query parameters into criteria or paging values, and while loading
//! configuration.

use thiserror::Error;

/// Errors raised before a criteria value reaches the specification compiler.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// The parameter names a field the criteria type does not declare.
    #[error("unknown field '{field}' for {criteria}")]
    UnknownField {
        criteria: &'static str,
        field: String,
    },

    /// The condition name is not part of the filter vocabulary.
    #[error("unknown condition '{condition}' on field '{field}'")]
    UnknownCondition { field: String, condition: String },

    /// The condition exists but the field's filter kind does not support it.
    #[error("condition '{condition}' is not supported by {filter} on field '{field}'")]
    UnsupportedCondition {
        field: String,
        condition: &'static str,
        filter: &'static str,
    },

    /// The literal cannot be parsed as the field's value type.
    #[error("invalid value '{value}' for {field}.{condition}: {reason}")]
    InvalidLiteral {
        field: String,
        condition: &'static str,
        value: String,
        reason: String,
    },

    /// The parameter key does not follow `<field>.<condition>`.
    #[error("malformed parameter '{0}': expected <field>.<condition>")]
    MalformedParameter(String),

    /// A `sort` parameter could not be parsed.
    #[error("invalid sort '{0}': expected <field>[,asc|desc]")]
    InvalidSort(String),

    /// A paging parameter is out of range or not a number.
    #[error("invalid {name} '{value}'")]
    InvalidPage { name: &'static str, value: String },

    /// The page size configuration is inconsistent.
    #[error("invalid page size configuration: default {default} must be between 1 and {max}")]
    InvalidPageSize { default: usize, max: usize },

    /// Configuration text could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for criteria operations.
pub type Result<T> = std::result::Result<T, CriteriaError>;
