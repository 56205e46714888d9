//! Multi-locale registry with fallback resolution.

use std::collections::HashMap;
use std::sync::Arc;

use lingua_locale::LocaleProvider;

use crate::error::TranslationError;
use crate::store::TranslationStore;

/// Owns one [`TranslationStore`] per registered locale plus a designated
/// fallback store.
///
/// Lookups are case-insensitive on the locale tag. When no requested locale
/// is registered, resolution yields the fallback store together with
/// `matched = false` so callers can tell an exact hit from a fallback.
#[derive(Debug, Clone)]
pub struct TranslatorRegistry {
    translators: HashMap<String, TranslationStore>,
    fallback: String,
}

impl TranslatorRegistry {
    /// Create a registry for the fallback locale and the supported locales.
    ///
    /// The fallback's store is shared with the supported set when the tags
    /// match, and registered alongside it otherwise, so the fallback is
    /// always resolvable by name.
    #[must_use]
    pub fn new(
        fallback: Arc<dyn LocaleProvider>,
        supported: impl IntoIterator<Item = Arc<dyn LocaleProvider>>,
    ) -> Self {
        let fallback_tag = fallback.locale().to_lowercase();
        let mut translators = HashMap::new();
        for provider in supported {
            let tag = provider.locale().to_lowercase();
            translators.insert(tag, TranslationStore::new(provider));
        }
        translators
            .entry(fallback_tag.clone())
            .or_insert_with(|| TranslationStore::new(fallback));

        Self {
            translators,
            fallback: fallback_tag,
        }
    }

    /// Resolve the first registered locale from a preference-ordered list,
    /// or the fallback store with `false` when none match.
    #[must_use]
    pub fn find_translator(&self, locales: &[&str]) -> (&TranslationStore, bool) {
        for locale in locales {
            if let Some(store) = self.translators.get(&locale.to_lowercase()) {
                return (store, true);
            }
        }
        (self.fallback(), false)
    }

    /// Single-locale variant of [`Self::find_translator`].
    #[must_use]
    pub fn get_translator(&self, locale: &str) -> (&TranslationStore, bool) {
        match self.translators.get(&locale.to_lowercase()) {
            Some(store) => (store, true),
            None => (self.fallback(), false),
        }
    }

    /// Mutable access to an exactly-registered locale's store. No fallback:
    /// the import path maps `None` to `LocaleNotRegistered`.
    pub fn get_translator_mut(&mut self, locale: &str) -> Option<&mut TranslationStore> {
        self.translators.get_mut(&locale.to_lowercase())
    }

    /// The fallback locale's store.
    #[must_use]
    pub fn fallback(&self) -> &TranslationStore {
        // The constructor guarantees the fallback tag is registered.
        &self.translators[&self.fallback]
    }

    /// Register a translator for a new locale.
    ///
    /// With `override_existing`, an already-registered locale's store is
    /// replaced (the fallback store included, when the tags match).
    ///
    /// # Errors
    ///
    /// `ExistingTranslator` when the locale is registered and
    /// `override_existing` is false.
    pub fn add_translator(
        &mut self,
        provider: Arc<dyn LocaleProvider>,
        override_existing: bool,
    ) -> Result<(), TranslationError> {
        let tag = provider.locale().to_lowercase();
        if self.translators.contains_key(&tag) && !override_existing {
            return Err(TranslationError::ExistingTranslator {
                locale: provider.locale().to_owned(),
            });
        }
        self.translators.insert(tag, TranslationStore::new(provider));
        Ok(())
    }

    /// Verify every registered store, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// The first [`TranslationStore::verify`] error encountered.
    pub fn verify_all(&self) -> Result<(), TranslationError> {
        for store in self.translators.values() {
            store.verify()?;
        }
        Ok(())
    }

    /// All registered stores, in no particular order.
    pub fn stores(&self) -> impl Iterator<Item = &TranslationStore> {
        self.translators.values()
    }
}
