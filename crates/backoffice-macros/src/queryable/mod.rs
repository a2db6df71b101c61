//! Implementation of the `#[derive(Queryable)]` macro.
//!
//! This module generates field accessors and field name constants from
//! entity struct annotations.

mod attrs;
mod derive;

pub use derive::queryable_derive_impl;
