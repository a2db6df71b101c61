//! Implementation of the `#[derive(Criteria)]` macro.
//!
//! This module generates the per-criteria surface: wire name constants,
//! read/get-or-create/set accessors for every filter, the `Criteria` trait
//! implementation, and `Display`.

mod attrs;
mod derive;

pub(crate) use attrs::string_literal;
pub use derive::criteria_derive_impl;
