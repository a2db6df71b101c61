//! Implementation of the `#[derive(Criteria)]` macro.
//!
//! This macro generates field name constants, lazy filter accessors, the
//! `Criteria` trait implementation and `Display` for a criteria struct.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    spanned::Spanned, Data, DeriveInput, Error, Fields, GenericArgument, PathArguments, Result,
    Type,
};

use super::attrs::{parse_container_attrs, parse_field_attrs};
use crate::naming::{to_lower_camel_case, to_screaming_snake_case};

/// Main implementation of the Criteria derive macro.
pub fn criteria_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Criteria can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Criteria can only be derived for structs",
            ))
        }
    };

    let container = parse_container_attrs(&input.attrs)?;
    let entity = container.entity.ok_or_else(|| {
        Error::new(
            input.ident.span(),
            "Criteria requires #[criteria(entity = EntityType)]",
        )
    })?;
    let type_name = container.name.unwrap_or_else(|| struct_name.to_string());

    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut accessors: Vec<TokenStream> = Vec::new();
    let mut wire_names: Vec<String> = Vec::new();
    let mut filter_entries: Vec<TokenStream> = Vec::new();
    let mut binding_arms: Vec<TokenStream> = Vec::new();
    let mut has_distinct = false;

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        if field_name == "distinct" {
            if !is_option_of(&field.ty, "bool") {
                return Err(Error::new(
                    field.ty.span(),
                    "the distinct field must have type Option<bool>",
                ));
            }
            has_distinct = true;
            continue;
        }

        let filter_ty = option_inner(&field.ty).ok_or_else(|| {
            Error::new(
                field.ty.span(),
                "criteria fields must have type Option<SomeFilter>",
            )
        })?;

        let wire_name = attrs
            .rename
            .unwrap_or_else(|| to_lower_camel_case(&field_name.to_string()));
        if wire_names.contains(&wire_name) {
            return Err(Error::new(
                attrs.span,
                format!("duplicate criteria field name '{wire_name}'"),
            ));
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&wire_name));
        let or_default = format_ident!("{}_or_default", field_name);
        let setter = format_ident!("set_{}", field_name);

        field_constants.push(quote! {
            /// Wire name of this criteria field.
            pub const #const_name: &'static str = #wire_name;
        });

        accessors.push(quote! {
            pub fn #field_name(&self) -> ::core::option::Option<&#filter_ty> {
                self.#field_name.as_ref()
            }

            pub fn #or_default(&mut self) -> &mut #filter_ty {
                self.#field_name.get_or_insert_with(::core::default::Default::default)
            }

            pub fn #setter(&mut self, filter: ::core::option::Option<#filter_ty>) {
                self.#field_name = filter;
            }
        });

        filter_entries.push(quote! {
            (
                #wire_name,
                self.#field_name
                    .as_ref()
                    .map(|filter| filter as &dyn ::backoffice_criteria::FieldFilter),
            )
        });

        binding_arms.push(quote! {
            #wire_name => ::core::option::Option::Some(
                self.#field_name.get_or_insert_with(::core::default::Default::default)
                    as &mut dyn ::backoffice_criteria::FieldFilter
            ),
        });

        wire_names.push(wire_name);
    }

    let (distinct_accessors, distinct_get, distinct_set) = if has_distinct {
        (
            quote! {
                pub fn distinct(&self) -> ::core::option::Option<bool> {
                    self.distinct
                }

                pub fn set_distinct(&mut self, distinct: ::core::option::Option<bool>) {
                    self.distinct = distinct;
                }
            },
            quote! { self.distinct },
            quote! { self.distinct = distinct; },
        )
    } else {
        (
            quote! {},
            quote! { ::core::option::Option::None },
            quote! { let _ = distinct; },
        )
    };

    let expanded = quote! {
        impl #struct_name {
            #(#field_constants)*

            #(#accessors)*

            #distinct_accessors
        }

        impl ::backoffice_criteria::Criteria for #struct_name {
            type Entity = #entity;

            const TYPE_NAME: &'static str = #type_name;

            const FIELD_NAMES: &'static [&'static str] = &[#(#wire_names),*];

            fn filters(
                &self,
            ) -> ::std::vec::Vec<(
                &'static str,
                ::core::option::Option<&dyn ::backoffice_criteria::FieldFilter>,
            )> {
                ::std::vec![#(#filter_entries),*]
            }

            fn filter_or_default(
                &mut self,
                field: &str,
            ) -> ::core::option::Option<&mut dyn ::backoffice_criteria::FieldFilter> {
                match field {
                    #(#binding_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn distinct(&self) -> ::core::option::Option<bool> {
                #distinct_get
            }

            fn set_distinct(&mut self, distinct: ::core::option::Option<bool>) {
                #distinct_set
            }
        }

        impl ::core::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::backoffice_criteria::write_criteria(self, f)
            }
        }
    };

    Ok(expanded)
}

/// Returns `T` for a field typed `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

fn is_option_of(ty: &Type, inner: &str) -> bool {
    match option_inner(ty) {
        Some(Type::Path(path)) => path.path.is_ident(inner),
        _ => false,
    }
}
