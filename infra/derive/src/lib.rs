#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the infrastructure.
//! Currently this crate provides a single attribute macro that removes the
//! boilerplate around contextual error enums.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro to define a contextual error enum.
///
/// Applied to an enum with named-field variants, it derives
/// `Debug` and `thiserror::Error` and additionally generates:
///
/// * a `<Name>Ext` trait with a `context(..)` combinator that attaches a
///   stage description to any variant carrying a
///   `context: Option<Cow<'static, str>>` field;
/// * `From<SourceType>` conversions for every variant with a `source` field;
/// * `From<&'static str>` / `From<String>` conversions into the `Internal`
///   variant, when one exists.
///
/// Variants with a `source` field must also carry a `context` field so the
/// generated `Ext` impl for `Result<T, SourceType>` has somewhere to put the
/// description.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[sgrate_derive::sgrate_error]
/// pub enum StoreError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn open(path: &str) -> Result<std::fs::File, StoreError> {
///     std::fs::File::open(path).context("Opening store file")
/// }
/// ```
#[proc_macro_attribute]
pub fn sgrate_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
