#![forbid(unsafe_code)]

//! Locale-aware message translation engine.
//!
//! This crate provides:
//! - [`TranslationStore`] — per-locale templates with plural-rule variants,
//!   analyzed once at add time and rendered without re-scanning
//! - [`TranslatorRegistry`] — one store per registered locale plus a
//!   fallback, resolved case-insensitively
//! - [`codec`] — TOML import/export of whole stores
//!
//! Stores follow a configure-once, read-many pattern: load translations
//! (directly or via [`codec::import_path`]), run
//! [`TranslatorRegistry::verify_all`], then render concurrently through
//! shared references.
//!
//! ```
//! use std::sync::Arc;
//! use lingua_i18n::TranslatorRegistry;
//! use lingua_locale::{BuiltinLocale, LocaleProvider};
//!
//! let en: Arc<dyn LocaleProvider> = Arc::new(BuiltinLocale::for_tag("en").unwrap());
//! let mut registry = TranslatorRegistry::new(Arc::clone(&en), [en]);
//!
//! let store = registry.get_translator_mut("en").unwrap();
//! store.add("greeting", "Hello, {0}!", false).unwrap();
//!
//! registry.verify_all().unwrap();
//! let (store, matched) = registry.find_translator(&["en-US", "en"]);
//! assert!(matched);
//! assert_eq!(store.translate("greeting", &["World"]).unwrap(), "Hello, World!");
//! ```

pub mod codec;
pub mod error;
pub mod registry;
pub mod store;

pub use error::TranslationError;
pub use registry::TranslatorRegistry;
pub use store::TranslationStore;
