//! Derive macros for back-office criteria.
//!
//! # Derive Macros
//!
//! - [`Criteria`] - Generate the filter table, accessors and `Display` for a
//!   criteria struct
//! - [`Queryable`] - Generate wire-name field access for an entity struct
//!
//! Generated code refers to `::backoffice_criteria`, so crates using these
//! derives must depend on `backoffice-criteria` directly.
//!
//! # Examples
//!
//! For working examples, see the entity modules of the `backoffice` crate
//! and its `tests/derive.rs`.

mod criteria;
mod naming;
mod queryable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Criteria` trait for a criteria struct.
///
/// Every field must be an `Option` of a filter type (`StringFilter`,
/// `LongFilter`, `Filter<SomeEnum>`, ...). A field named `distinct` of type
/// `Option<bool>` is the distinct flag.
///
/// # Container Attribute
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `entity = Type` | Entity the criteria filters (required) |
/// | `name = "..."` | Diagnostic type name (default: struct name) |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `rename = "..."` | Wire name (default: lowerCamelCase field name) |
/// | `skip` | Exclude the field from the filter table |
///
/// # Generated Code
///
/// 1. Wire name constants (`InvoiceCriteria::TOTAL_AMOUNT == "totalAmount"`)
/// 2. Per field: `total_amount()`, `total_amount_or_default()`,
///    `set_total_amount(..)`
/// 3. `distinct()` / `set_distinct(..)` when the flag is declared
/// 4. Implementation of `backoffice_criteria::Criteria`
/// 5. `Display` rendering `InvoiceCriteria{totalAmount=BigDecimalFilter [..], }`
///
/// # Example
///
/// ```ignore
/// use backoffice_criteria::{BigDecimalFilter, Filter, LongFilter};
/// use backoffice_macros::Criteria;
///
/// #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
/// #[criteria(entity = Invoice)]
/// pub struct InvoiceCriteria {
///     id: Option<LongFilter>,
///     total_amount: Option<BigDecimalFilter>,
///     status: Option<Filter<InvoiceStatus>>,
///     distinct: Option<bool>,
/// }
///
/// let mut criteria = InvoiceCriteria::default();
/// criteria.total_amount_or_default().greater_than_or_equal = Some("50.00".parse()?);
/// assert!(criteria.status().is_none());
/// ```
#[proc_macro_derive(Criteria, attributes(criteria))]
pub fn criteria_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    criteria::criteria_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives the `Queryable` trait for an entity struct.
///
/// Every field whose type implements `backoffice_criteria::FieldValue` is
/// exposed under its wire name. `Option<T>` fields read as `Value::None`
/// when absent.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Exclude this field from queries |
/// | `rename = "..."` | Use a custom wire name |
/// | `identity` | Deduplicate distinct results on this field instead of `id` |
///
/// # Example
///
/// ```ignore
/// use backoffice_macros::Queryable;
///
/// #[derive(Debug, Clone, Queryable)]
/// pub struct Vehicle {
///     id: Option<i64>,
///     licence_plate: Option<String>,
///     #[queryable(skip)]
///     photo: Vec<u8>,
/// }
///
/// assert_eq!(Vehicle::LICENCE_PLATE, "licencePlate");
/// ```
#[proc_macro_derive(Queryable, attributes(queryable))]
pub fn queryable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    queryable::queryable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
