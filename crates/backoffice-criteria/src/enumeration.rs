//! Closed value sets usable as entity fields and filter literals.

/// Declares a fieldless enum with upper-case wire names and wires it into the
/// query engine.
///
/// The generated enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`,
/// `Hash`, `PartialOrd` and `Ord`, and implements `Display`, `FromStr`,
/// serde `Serialize`/`Deserialize` by wire name,
/// [`FieldValue`](crate::FieldValue) and [`FilterValue`](crate::FilterValue).
/// Its filter displays as `<Enum>Filter`.
///
/// # Example
///
/// ```
/// use backoffice_criteria::{filter_enum, FieldValue, Filter, Value};
///
/// filter_enum! {
///     /// Lifecycle of an invoice.
///     pub enum InvoiceStatus {
///         Draft = "DRAFT",
///         Paid = "PAID",
///     }
/// }
///
/// assert_eq!("PAID".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Paid));
/// assert_eq!(InvoiceStatus::Draft.field_value(), Value::Enum(0));
///
/// let filter = Filter::new().equals(InvoiceStatus::Paid);
/// assert_eq!(filter.to_string(), "InvoiceStatusFilter [equals=PAID]");
/// ```
#[macro_export]
macro_rules! filter_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}', expected one of: {}",
                        stringify!($name),
                        other,
                        [$($wire),+].join(", "),
                    )),
                }
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let wire = <::std::string::String as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                wire.parse()
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }

        impl $crate::FieldValue for $name {
            fn field_value(&self) -> $crate::Value<'_> {
                $crate::Value::Enum(*self as u32)
            }
        }

        impl $crate::FilterValue for $name {
            const FILTER_NAME: &'static str = concat!(stringify!($name), "Filter");

            fn to_clause_value(&self) -> $crate::ClauseValue {
                $crate::ClauseValue::Enum(*self as u32)
            }

            fn parse_literal(raw: &str) -> ::std::result::Result<Self, ::std::string::String> {
                raw.parse()
            }
        }
    };
}
