#![forbid(unsafe_code)]

//! Locale capability providers for the lingua translation engine.
//!
//! This crate defines the boundary between the translation store and the
//! locale data it depends on:
//! - [`PluralRule`] identifies a CLDR plural category with a dense ordinal
//!   suitable for slot indexing.
//! - [`LocaleProvider`] exposes, per locale, which rules are valid for the
//!   cardinal/ordinal/range categories and which rule applies to a given
//!   quantity.
//! - [`builtin`] ships providers for the most common language families.

pub mod builtin;
pub mod provider;
pub mod rule;

pub use builtin::BuiltinLocale;
pub use provider::LocaleProvider;
pub use rule::PluralRule;
