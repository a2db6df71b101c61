//! Attribute parsing for the Criteria derive macro.
//!
//! Container: `#[criteria(entity = Invoice, name = "InvoiceCriteria")]`.
//! Field: `#[criteria(rename = "...")]` or `#[criteria(skip)]`.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, ExprPath, Lit, Meta, Path, Result, Token,
};

/// Container-level attributes from `#[criteria(...)]`.
#[derive(Debug, Clone, Default)]
pub struct ContainerAttr {
    /// The entity the criteria filters.
    pub entity: Option<Path>,
    /// Diagnostic type name (default: the struct name).
    pub name: Option<String>,
}

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContainerAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("entity") => match &nv.value {
                    Expr::Path(ExprPath { path, .. }) => attr.entity = Some(path.clone()),
                    other => {
                        return Err(Error::new(other.span(), "entity must be a type path"));
                    }
                },
                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    attr.name = Some(string_literal(&nv.value, "name")?);
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown criteria attribute. Expected: entity = Type or name = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Field-level attributes from `#[criteria(...)]`.
#[derive(Debug, Clone)]
pub struct FieldAttr {
    /// Exclude this field from the filter table.
    pub skip: bool,
    /// Custom wire name (default: lowerCamelCase of the field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for FieldAttr {
    fn default() -> Self {
        FieldAttr {
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                    attr.span = p.span();
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    attr.rename = Some(string_literal(&nv.value, "rename")?);
                    attr.span = nv.value.span();
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown criteria field attribute. Expected: skip or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

pub(crate) fn string_literal(expr: &Expr, key: &str) -> Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        other => Err(Error::new(
            other.span(),
            format!("{key} must be a string literal"),
        )),
    }
}

/// Extract the `#[criteria(...)]` container attribute.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttr> {
    for attr in attrs {
        if attr.path().is_ident("criteria") {
            return attr.parse_args::<ContainerAttr>();
        }
    }
    Ok(ContainerAttr::default())
}

/// Extract `#[criteria(...)]` attributes from a field's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("criteria") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}
