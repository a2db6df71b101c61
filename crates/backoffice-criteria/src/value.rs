//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the runtime value of a field read from an
//! entity. A null or absent field reads as [`Value::None`].

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Runtime value for comparison, borrowed from the source entity.
///
/// # Example
///
/// ```
/// use backoffice_criteria::{Number, Value};
///
/// struct Vehicle {
///     plate: String,
///     mileage: Option<i64>,
/// }
///
/// fn accessor<'a>(vehicle: &'a Vehicle, field: &str) -> Value<'a> {
///     match field {
///         "plate" => Value::String(&vehicle.plate),
///         "mileage" => vehicle.mileage.map_or(Value::None, |m| Value::Number(Number::I64(m))),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Integer or floating point value.
    Number(Number),
    /// Exact decimal value (monetary amounts).
    Decimal(Decimal),
    /// Calendar date without time zone.
    Date(NaiveDate),
    /// Instant (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Enum discriminant value.
    Enum(u32),
    /// Boolean value.
    Bool(bool),
    /// Field absent or null.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if the field carries a value.
    pub fn is_present(&self) -> bool {
        !self.is_none()
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the decimal value, if present.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Extracts the enum discriminant, if present.
    pub fn as_enum(&self) -> Option<u32> {
        match self {
            Value::Enum(d) => Some(*d),
            _ => None,
        }
    }

    /// Name of the value domain, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Decimal(_) => "decimal",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
            Value::Enum(_) => "enum",
            Value::Bool(_) => "bool",
            Value::None => "none",
        }
    }
}

/// Numeric value supporting the common integer and float types.
///
/// Comparisons between different variants convert to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! impl_number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )+
    };
}

impl_number_from!(I64 as i64: i8, i16, i32, i64, isize);
impl_number_from!(U64 as u64: u8, u16, u32, u64, usize);
impl_number_from!(F64 as f64: f32, f64);

/// Instant represented as milliseconds since Unix epoch.
///
/// Sub-millisecond precision is dropped, on both the entity side and the
/// filter literal side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp(instant.timestamp_millis())
    }
}

/// Reads an entity field as a runtime [`Value`].
///
/// Implemented for the scalar types entities use, and for `Option<T>` so
/// that nullable columns read as [`Value::None`] when unset. Domain enums get
/// an implementation from [`filter_enum!`](crate::filter_enum).
pub trait FieldValue {
    fn field_value(&self) -> Value<'_>;
}

impl FieldValue for String {
    fn field_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

macro_rules! impl_field_value_number {
    ($($ty:ty),+) => {
        $(
            impl FieldValue for $ty {
                fn field_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )+
    };
}

impl_field_value_number!(i16, i32, i64, u16, u32, u64, f64);

impl FieldValue for Decimal {
    fn field_value(&self) -> Value<'_> {
        Value::Decimal(*self)
    }
}

impl FieldValue for NaiveDate {
    fn field_value(&self) -> Value<'_> {
        Value::Date(*self)
    }
}

impl FieldValue for DateTime<Utc> {
    fn field_value(&self) -> Value<'_> {
        Value::Timestamp(Timestamp::from(*self))
    }
}

impl FieldValue for bool {
    fn field_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.field_value(),
            None => Value::None,
        }
    }
}
