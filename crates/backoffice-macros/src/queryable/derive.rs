//! Implementation of the `#[derive(Queryable)]` macro.
//!
//! This macro generates an implementation of the `Queryable` trait and
//! field name constants for an entity struct.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_queryable_attrs;
use crate::naming::{to_lower_camel_case, to_screaming_snake_case};

/// Main implementation of the Queryable derive macro.
pub fn queryable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Queryable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Queryable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut identity: Option<TokenStream> = None;

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_queryable_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let query_name = attrs
            .rename
            .unwrap_or_else(|| to_lower_camel_case(&field_name.to_string()));
        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));

        field_constants.push(quote! {
            /// Field name constant for type-safe criteria.
            pub const #const_name: &'static str = #query_name;
        });

        let value_expr = quote! {
            ::backoffice_criteria::FieldValue::field_value(&self.#field_name)
        };

        if attrs.identity {
            if identity.is_some() {
                return Err(Error::new(
                    attrs.span,
                    "only one field can be marked #[queryable(identity)]",
                ));
            }
            identity = Some(quote! {
                fn identity(&self) -> ::backoffice_criteria::Value<'_> {
                    #value_expr
                }
            });
        }

        field_matches.push(quote! {
            #query_name => #value_expr,
        });
    }

    let expanded = quote! {
        impl #struct_name {
            #(#field_constants)*
        }

        impl ::backoffice_criteria::Queryable for #struct_name {
            fn field_value(&self, field: &str) -> ::backoffice_criteria::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::backoffice_criteria::Value::None,
                }
            }

            #identity
        }
    };

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(tokens: &str) -> Result<String> {
        let input: DeriveInput = syn::parse_str(tokens)?;
        queryable_derive_impl(input).map(|ts| ts.to_string())
    }

    #[test]
    fn test_generates_match_arms() {
        let out = expand(
            r#"
            struct Vehicle {
                id: Option<i64>,
                licence_plate: Option<String>,
                #[queryable(skip)]
                notes: String,
            }
            "#,
        )
        .unwrap();

        assert!(out.contains("\"licencePlate\""));
        assert!(out.contains("LICENCE_PLATE"));
        assert!(!out.contains("notes"));
        assert!(!out.contains("fn identity"));
    }

    #[test]
    fn test_identity_override() {
        let out = expand(
            r#"
            struct Driver {
                #[queryable(identity)]
                licence_number: String,
            }
            "#,
        )
        .unwrap();
        assert!(out.contains("fn identity"));
    }

    #[test]
    fn test_rejects_two_identities() {
        let err = expand(
            r#"
            struct Driver {
                #[queryable(identity)]
                a: String,
                #[queryable(identity)]
                b: String,
            }
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("only one field"));
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let err = expand("struct Id(i64);").unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }
}
