//! Attribute parsing for the Queryable derive macro.
//!
//! This module provides the parser for the `#[queryable(...)]` field
//! attribute.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Meta, Result, Token,
};

use crate::criteria::string_literal;

/// Field-level attributes from `#[queryable(...)]`.
#[derive(Debug, Clone)]
pub struct QueryableAttr {
    /// Skip this field from queries.
    pub skip: bool,
    /// Use this field as the entity identity instead of `id`.
    pub identity: bool,
    /// Custom field name for queries (default: lowerCamelCase field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for QueryableAttr {
    fn default() -> Self {
        QueryableAttr {
            skip: false,
            identity: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for QueryableAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = QueryableAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                    attr.span = p.span();
                }
                Meta::Path(p) if p.is_ident("identity") => {
                    attr.identity = true;
                    attr.span = p.span();
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    attr.rename = Some(string_literal(&nv.value, "rename")?);
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown queryable attribute. Expected: skip, identity, or rename = \"...\"",
                    ));
                }
            }
        }

        if attr.skip && attr.identity {
            return Err(Error::new(
                attr.span,
                "a skipped field cannot be the identity",
            ));
        }

        Ok(attr)
    }
}

/// Extract `#[queryable(...)]` attributes from a field's attributes.
pub fn parse_queryable_attrs(attrs: &[Attribute]) -> Result<QueryableAttr> {
    for attr in attrs {
        if attr.path().is_ident("queryable") {
            return attr.parse_args::<QueryableAttr>();
        }
    }
    Ok(QueryableAttr::default())
}
