//! Entity field access.
//!
//! This module provides the [`Queryable`] trait which is implemented by
//! the `#[derive(Queryable)]` macro to expose entity fields by wire name.

use crate::value::Value;

/// Trait for entities that specifications can be evaluated against.
///
/// This trait is typically derived using `#[derive(Queryable)]` from the
/// `backoffice-macros` crate, but can also be implemented manually.
///
/// # Manual Implementation
///
/// ```
/// use backoffice_criteria::{FieldValue, Queryable, Value};
///
/// struct BankAccount {
///     id: Option<i64>,
///     name: Option<String>,
/// }
///
/// impl Queryable for BankAccount {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "id" => self.id.field_value(),
///             "name" => self.name.field_value(),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let account = BankAccount { id: Some(1), name: None };
/// assert_eq!(account.field_value("name"), Value::None);
/// ```
pub trait Queryable {
    /// Returns the value of a field for comparison and sorting.
    ///
    /// Unknown fields return [`Value::None`].
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns the persistent identity used to deduplicate distinct results.
    ///
    /// Defaults to the `id` field.
    fn identity(&self) -> Value<'_> {
        self.field_value("id")
    }

    /// Returns a static accessor function usable with
    /// [`compare_by_orderings`](crate::compare_by_orderings).
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FieldValue, Number};

    struct Driver {
        id: Option<i64>,
        name: String,
        licence: Option<String>,
    }

    impl Queryable for Driver {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "id" => self.id.field_value(),
                "name" => self.name.field_value(),
                "licence" => self.licence.field_value(),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn manual_impl() {
        let driver = Driver {
            id: Some(3),
            name: "Ada".to_string(),
            licence: None,
        };

        assert_eq!(driver.field_value("name"), Value::String("Ada"));
        assert_eq!(driver.field_value("licence"), Value::None);
        assert_eq!(driver.field_value("unknown"), Value::None);
        assert_eq!(Driver::accessor(&driver, "name"), Value::String("Ada"));
    }

    #[test]
    fn identity_defaults_to_id() {
        let driver = Driver {
            id: Some(3),
            name: String::new(),
            licence: None,
        };
        assert_eq!(driver.identity(), Value::Number(Number::I64(3)));
    }
}
