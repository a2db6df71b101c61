//! Filter literal types.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::clause::ClauseValue;
use crate::value::{Number, Timestamp};

/// A type usable as a filter literal.
///
/// Each literal type knows the display name of its filter, how to compile to
/// a [`ClauseValue`] in the same domain as the entity's
/// [`FieldValue`](crate::FieldValue), and how to parse its textual form.
///
/// Domain enums implement this trait through
/// [`filter_enum!`](crate::filter_enum).
pub trait FilterValue: Clone + fmt::Debug + fmt::Display + PartialEq + Eq + Hash {
    /// Name used in diagnostics, e.g. `LongFilter`.
    const FILTER_NAME: &'static str;

    fn to_clause_value(&self) -> ClauseValue;

    /// Parses the textual literal, returning a reason on failure.
    fn parse_literal(raw: &str) -> Result<Self, String>;
}

impl FilterValue for String {
    const FILTER_NAME: &'static str = "StringFilter";

    fn to_clause_value(&self) -> ClauseValue {
        ClauseValue::String(self.clone())
    }

    fn parse_literal(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

macro_rules! impl_filter_value_integer {
    ($($ty:ty => $name:literal),+) => {
        $(
            impl FilterValue for $ty {
                const FILTER_NAME: &'static str = $name;

                fn to_clause_value(&self) -> ClauseValue {
                    ClauseValue::Number(Number::from(*self))
                }

                fn parse_literal(raw: &str) -> Result<Self, String> {
                    raw.trim().parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )+
    };
}

impl_filter_value_integer!(i64 => "LongFilter", i32 => "IntegerFilter");

impl FilterValue for Decimal {
    const FILTER_NAME: &'static str = "BigDecimalFilter";

    fn to_clause_value(&self) -> ClauseValue {
        ClauseValue::Decimal(*self)
    }

    fn parse_literal(raw: &str) -> Result<Self, String> {
        Decimal::from_str(raw.trim()).map_err(|e| e.to_string())
    }
}

impl FilterValue for NaiveDate {
    const FILTER_NAME: &'static str = "LocalDateFilter";

    fn to_clause_value(&self) -> ClauseValue {
        ClauseValue::Date(*self)
    }

    fn parse_literal(raw: &str) -> Result<Self, String> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| e.to_string())
    }
}

impl FilterValue for DateTime<Utc> {
    const FILTER_NAME: &'static str = "InstantFilter";

    fn to_clause_value(&self) -> ClauseValue {
        ClauseValue::Timestamp(Timestamp::from(*self))
    }

    fn parse_literal(raw: &str) -> Result<Self, String> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|e| e.to_string())
    }
}

impl FilterValue for bool {
    const FILTER_NAME: &'static str = "BooleanFilter";

    fn to_clause_value(&self) -> ClauseValue {
        ClauseValue::Bool(*self)
    }

    fn parse_literal(raw: &str) -> Result<Self, String> {
        match raw.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(format!("expected true or false, got '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_numbers() {
        assert_eq!(i64::parse_literal(" 42 "), Ok(42));
        assert!(i32::parse_literal("4.5").is_err());
        assert_eq!(
            Decimal::parse_literal("50.00"),
            Ok(Decimal::new(5000, 2))
        );
    }

    #[test]
    fn parse_dates() {
        assert_eq!(
            NaiveDate::parse_literal("2024-03-31"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
        );
        assert!(NaiveDate::parse_literal("31/03/2024").is_err());

        let instant = DateTime::<Utc>::parse_literal("2024-03-31T10:00:00+02:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 3, 31, 8, 0, 0).unwrap());
    }

    #[test]
    fn parse_bool_is_strict() {
        assert_eq!(bool::parse_literal("true"), Ok(true));
        assert_eq!(bool::parse_literal("false"), Ok(false));
        assert!(bool::parse_literal("yes").is_err());
    }

    #[test]
    fn integer_literals_share_the_number_domain() {
        assert_eq!(7i32.to_clause_value(), ClauseValue::Number(Number::I64(7)));
        assert_eq!(7i64.to_clause_value(), ClauseValue::Number(Number::I64(7)));
    }
}
