//! Per-locale translation store with precompiled splice offsets.
//!
//! Templates are analyzed once at add time: every placeholder's byte span is
//! recorded in a [`CompiledEntry`], so rendering is a single pass over the
//! stored spans with no substring search.
//!
//! # Invariants
//!
//! 1. A key's presence in the plain map is independent of its presence in
//!    the cardinal/ordinal/range maps; the four namespaces never collide.
//! 2. A populated plural slot always targets a rule the locale's provider
//!    reports as valid for that category (enforced at add time).
//! 3. A failed add never leaves a half-initialized slot visible to render
//!    or verify.
//! 4. After [`TranslationStore::verify`] succeeds, every key in a plural map
//!    has every mandatory rule populated.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unbalanced braces | `count('{') != count('}')` | `MissingBrace` at add time |
//! | Missing `{i}` | placeholder index absent from text | `BadParamSyntax` / category error |
//! | Duplicate entry | add without `override` | `ConflictingTranslation` |
//! | Unknown key | render of an unregistered key | `UnknownTranslation` |
//! | Empty verified slot | render before a passing `verify` | panic (unchecked precondition) |

use std::collections::HashMap;
use std::sync::Arc;

use lingua_locale::{LocaleProvider, PluralRule};

use crate::error::TranslationError;

const PARAM_ZERO: &str = "{0}";
const PARAM_ONE: &str = "{1}";

/// One placeholder's byte span inside a template, plus the positional
/// parameter it splices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) param: usize,
}

/// A template with its placeholder spans, computed once at add time.
///
/// Plain entries keep spans sorted by text position so a single left-to-right
/// walk reconstructs the output; each span carries the index of the parameter
/// it consumes, which allows a placeholder to repeat or appear out of
/// numeric order. Cardinal/ordinal entries hold exactly one span for `{0}`;
/// range entries hold the `{0}` span followed by the `{1}` span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledEntry {
    pub(crate) text: String,
    pub(crate) spans: Vec<Span>,
}

/// Fixed rule-indexed slot array for one key in one plural category.
#[derive(Debug, Clone)]
pub(crate) struct PluralSlots {
    slots: [Option<CompiledEntry>; PluralRule::COUNT],
}

impl Default for PluralSlots {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl PluralSlots {
    pub(crate) fn get(&self, rule: PluralRule) -> Option<&CompiledEntry> {
        self.slots[rule.index()].as_ref()
    }

    fn set(&mut self, rule: PluralRule, entry: CompiledEntry) {
        self.slots[rule.index()] = Some(entry);
    }

    fn clear(&mut self, rule: PluralRule) {
        self.slots[rule.index()] = None;
    }

    /// Populated slots in rule-ordinal order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (PluralRule, &CompiledEntry)> {
        PluralRule::NAMED
            .into_iter()
            .filter_map(|rule| self.get(rule).map(|entry| (rule, entry)))
    }
}

/// Which plural category an operation targets. Used for error wording and
/// verifier labels.
#[derive(Debug, Clone, Copy)]
enum Category {
    Cardinal,
    Ordinal,
}

impl Category {
    const fn label(self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Ordinal => "ordinal",
        }
    }

    fn error(self, text: String) -> TranslationError {
        match self {
            Self::Cardinal => TranslationError::CardinalTranslation { text },
            Self::Ordinal => TranslationError::OrdinalTranslation { text },
        }
    }
}

/// Translation store for a single locale.
///
/// Holds one plain-text map and three plural-rule-indexed maps (cardinal,
/// ordinal, range), all keyed by an opaque string key, plus the locale
/// capability handle used for rule validation and selection.
///
/// The store follows a configure-once, read-many pattern: all `add_*` calls
/// and imports run before rendering starts, rendering and verification take
/// `&self`. No internal locking is provided; wrap the store in a read-write
/// lock if mutation after start-up is genuinely required.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lingua_i18n::store::TranslationStore;
/// use lingua_locale::BuiltinLocale;
///
/// let en = Arc::new(BuiltinLocale::for_tag("en").unwrap());
/// let mut store = TranslationStore::new(en);
/// store.add("greeting", "Hello, {0}!", false).unwrap();
/// assert_eq!(store.translate("greeting", &["World"]).unwrap(), "Hello, World!");
/// ```
#[derive(Debug, Clone)]
pub struct TranslationStore {
    provider: Arc<dyn LocaleProvider>,
    pub(crate) plain: HashMap<String, CompiledEntry>,
    pub(crate) cardinal: HashMap<String, PluralSlots>,
    pub(crate) ordinal: HashMap<String, PluralSlots>,
    pub(crate) range: HashMap<String, PluralSlots>,
}

impl TranslationStore {
    /// Create an empty store backed by the given capability provider.
    #[must_use]
    pub fn new(provider: Arc<dyn LocaleProvider>) -> Self {
        Self {
            provider,
            plain: HashMap::new(),
            cardinal: HashMap::new(),
            ordinal: HashMap::new(),
            range: HashMap::new(),
        }
    }

    /// The locale tag this store serves.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.provider.locale()
    }

    /// The backing capability provider.
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn LocaleProvider> {
        &self.provider
    }

    /// Add a plain translation.
    ///
    /// `{#}` placeholders are the only replacement form accepted, ad
    /// infinitum: a template with N opening braces must contain each of
    /// `{0}` through `{N-1}` as a literal substring (an index may repeat,
    /// in which case it counts once per occurrence).
    ///
    /// # Errors
    ///
    /// `ConflictingTranslation` when the key exists and `override_existing`
    /// is false; `MissingBrace` on unbalanced braces; `BadParamSyntax` when
    /// a specific `{i}` is absent.
    pub fn add(
        &mut self,
        key: &str,
        text: &str,
        override_existing: bool,
    ) -> Result<(), TranslationError> {
        if self.plain.contains_key(key) && !override_existing {
            return Err(TranslationError::ConflictingTranslation {
                locale: self.locale().to_owned(),
                key: key.to_owned(),
                rule: PluralRule::Unknown,
                text: text.to_owned(),
            });
        }

        let entry = self.compile_plain(key, text)?;
        self.plain.insert(key.to_owned(), entry);
        Ok(())
    }

    /// Add a cardinal plural translation for one rule.
    ///
    /// `{0}` is the only replacement accepted; a single variable cannot
    /// drive more than one plural determination (see [`Self::add_range`]).
    ///
    /// # Errors
    ///
    /// `CardinalTranslation` when the rule is not valid for the locale or
    /// the text lacks `{0}`; `ConflictingTranslation` on a non-override
    /// duplicate.
    pub fn add_cardinal(
        &mut self,
        key: &str,
        text: &str,
        rule: PluralRule,
        override_existing: bool,
    ) -> Result<(), TranslationError> {
        if !self.provider.plurals_cardinal().contains(&rule) {
            return Err(Self::invalid_rule_error(
                Category::Cardinal,
                rule,
                self.locale(),
                key,
                text,
            ));
        }
        let locale = self.locale().to_owned();
        Self::add_single_param(
            &mut self.cardinal,
            Category::Cardinal,
            &locale,
            key,
            text,
            rule,
            override_existing,
        )
    }

    /// Add an ordinal plural translation for one rule.
    ///
    /// # Errors
    ///
    /// `OrdinalTranslation` when the rule is not valid for the locale or
    /// the text lacks `{0}`; `ConflictingTranslation` on a non-override
    /// duplicate.
    pub fn add_ordinal(
        &mut self,
        key: &str,
        text: &str,
        rule: PluralRule,
        override_existing: bool,
    ) -> Result<(), TranslationError> {
        if !self.provider.plurals_ordinal().contains(&rule) {
            return Err(Self::invalid_rule_error(
                Category::Ordinal,
                rule,
                self.locale(),
                key,
                text,
            ));
        }
        let locale = self.locale().to_owned();
        Self::add_single_param(
            &mut self.ordinal,
            Category::Ordinal,
            &locale,
            key,
            text,
            rule,
            override_existing,
        )
    }

    /// Add a range plural translation for one rule.
    ///
    /// `{0}` and `{1}` are the only replacements accepted, and both must be
    /// present.
    ///
    /// # Errors
    ///
    /// `RangeTranslation` when the rule is not valid for the locale or
    /// either placeholder is absent; `ConflictingTranslation` on a
    /// non-override duplicate.
    pub fn add_range(
        &mut self,
        key: &str,
        text: &str,
        rule: PluralRule,
        override_existing: bool,
    ) -> Result<(), TranslationError> {
        if !self.provider.plurals_range().contains(&rule) {
            return Err(TranslationError::RangeTranslation {
                text: format!(
                    "range plural rule '{rule}' does not exist for locale '{}' key: '{key}' text: '{text}'",
                    self.locale()
                ),
            });
        }

        let locale = self.locale().to_owned();
        let slots = self.range.entry(key.to_owned()).or_default();
        if slots.get(rule).is_some() && !override_existing {
            return Err(TranslationError::ConflictingTranslation {
                locale,
                key: key.to_owned(),
                rule,
                text: text.to_owned(),
            });
        }

        // Claim the slot first so a failed add leaves it empty, never stale.
        slots.clear(rule);

        let Some(first) = find_span(text, PARAM_ZERO, 0) else {
            return Err(TranslationError::RangeTranslation {
                text: format!(
                    "parameter '{PARAM_ZERO}' not found, are you sure you're adding a range translation? locale: '{locale}' key: '{key}' text: '{text}'"
                ),
            });
        };
        let Some(second) = find_span(text, PARAM_ONE, 1) else {
            return Err(TranslationError::RangeTranslation {
                text: format!(
                    "parameter '{PARAM_ONE}' not found, a range translation requires two parameters. locale: '{locale}' key: '{key}' text: '{text}'"
                ),
            });
        };

        slots.set(
            rule,
            CompiledEntry {
                text: text.to_owned(),
                spans: vec![first, second],
            },
        );
        Ok(())
    }

    /// Render a plain translation.
    ///
    /// Placeholder spans are walked left to right; each span consumes the
    /// parameter matching its placeholder number, so `{0}` may repeat and
    /// indices may appear in any textual order.
    ///
    /// # Errors
    ///
    /// `UnknownTranslation` when the key was never added.
    ///
    /// # Panics
    ///
    /// Panics when fewer parameters are supplied than the template's highest
    /// placeholder index requires.
    pub fn translate(&self, key: &str, params: &[&str]) -> Result<String, TranslationError> {
        let entry = self
            .plain
            .get(key)
            .ok_or_else(|| TranslationError::UnknownTranslation {
                key: key.to_owned(),
            })?;

        let mut out = String::with_capacity(entry.text.len() + 16);
        let mut cursor = 0;
        for span in &entry.spans {
            out.push_str(&entry.text[cursor..span.start]);
            out.push_str(params[span.param]);
            cursor = span.end;
        }
        out.push_str(&entry.text[cursor..]);
        Ok(out)
    }

    /// Render a cardinal translation, selecting the rule variant for
    /// `(num, digits)` and splicing `param` into the `{0}` span.
    ///
    /// # Errors
    ///
    /// `UnknownTranslation` when the key was never added.
    ///
    /// # Panics
    ///
    /// Panics when the selected rule's slot is empty. A successful
    /// [`Self::verify`] after loading guarantees this cannot happen.
    pub fn translate_cardinal(
        &self,
        key: &str,
        num: f64,
        digits: u64,
        param: &str,
    ) -> Result<String, TranslationError> {
        let slots = self
            .cardinal
            .get(key)
            .ok_or_else(|| TranslationError::UnknownTranslation {
                key: key.to_owned(),
            })?;
        let rule = self.provider.cardinal_rule(num, digits);
        let entry = slots
            .get(rule)
            .expect("cardinal slot empty for selected rule; verify() must pass before rendering");
        Ok(splice_single(entry, param))
    }

    /// Render an ordinal translation, selecting the rule variant for
    /// `(num, digits)` and splicing `param` into the `{0}` span.
    ///
    /// # Errors
    ///
    /// `UnknownTranslation` when the key was never added.
    ///
    /// # Panics
    ///
    /// Panics when the selected rule's slot is empty. A successful
    /// [`Self::verify`] after loading guarantees this cannot happen.
    pub fn translate_ordinal(
        &self,
        key: &str,
        num: f64,
        digits: u64,
        param: &str,
    ) -> Result<String, TranslationError> {
        let slots = self
            .ordinal
            .get(key)
            .ok_or_else(|| TranslationError::UnknownTranslation {
                key: key.to_owned(),
            })?;
        let rule = self.provider.ordinal_rule(num, digits);
        let entry = slots
            .get(rule)
            .expect("ordinal slot empty for selected rule; verify() must pass before rendering");
        Ok(splice_single(entry, param))
    }

    /// Render a range translation, selecting the rule variant for the value
    /// pair and splicing both parameters, preserving the literal text
    /// between and around them.
    ///
    /// # Errors
    ///
    /// `UnknownTranslation` when the key was never added.
    ///
    /// # Panics
    ///
    /// Panics when the selected rule's slot is empty. A successful
    /// [`Self::verify`] after loading guarantees this cannot happen.
    pub fn translate_range(
        &self,
        key: &str,
        num1: f64,
        digits1: u64,
        num2: f64,
        digits2: u64,
        param1: &str,
        param2: &str,
    ) -> Result<String, TranslationError> {
        let slots = self
            .range
            .get(key)
            .ok_or_else(|| TranslationError::UnknownTranslation {
                key: key.to_owned(),
            })?;
        let rule = self.provider.range_rule(num1, digits1, num2, digits2);
        let entry = slots
            .get(rule)
            .expect("range slot empty for selected rule; verify() must pass before rendering");

        let first = entry.spans[0];
        let second = entry.spans[1];
        let mut out =
            String::with_capacity(entry.text.len() + param1.len() + param2.len());
        out.push_str(&entry.text[..first.start]);
        out.push_str(param1);
        out.push_str(&entry.text[first.end..second.start]);
        out.push_str(param2);
        out.push_str(&entry.text[second.end..]);
        Ok(out)
    }

    /// Check that no mandatory plural rule is missing from any key.
    ///
    /// Pure read-only traversal of the three plural maps; reports the first
    /// empty mandatory slot found.
    ///
    /// # Errors
    ///
    /// `MissingPluralTranslation` citing locale, key, rule and category.
    pub fn verify(&self) -> Result<(), TranslationError> {
        self.verify_category(&self.cardinal, self.provider.plurals_cardinal(), "plural")?;
        self.verify_category(&self.ordinal, self.provider.plurals_ordinal(), "ordinal")?;
        self.verify_category(&self.range, self.provider.plurals_range(), "range")?;
        Ok(())
    }

    fn verify_category(
        &self,
        map: &HashMap<String, PluralSlots>,
        mandatory: &[PluralRule],
        category: &'static str,
    ) -> Result<(), TranslationError> {
        for (key, slots) in map {
            for &rule in mandatory {
                if slots.get(rule).is_none() {
                    return Err(TranslationError::MissingPluralTranslation {
                        locale: self.locale().to_owned(),
                        key: key.clone(),
                        rule,
                        category,
                    });
                }
            }
        }
        Ok(())
    }

    fn invalid_rule_error(
        category: Category,
        rule: PluralRule,
        locale: &str,
        key: &str,
        text: &str,
    ) -> TranslationError {
        category.error(format!(
            "{} plural rule '{rule}' does not exist for locale '{locale}' key: '{key}' text: '{text}'",
            category.label()
        ))
    }

    fn add_single_param(
        map: &mut HashMap<String, PluralSlots>,
        category: Category,
        locale: &str,
        key: &str,
        text: &str,
        rule: PluralRule,
        override_existing: bool,
    ) -> Result<(), TranslationError> {
        let slots = map.entry(key.to_owned()).or_default();
        if slots.get(rule).is_some() && !override_existing {
            return Err(TranslationError::ConflictingTranslation {
                locale: locale.to_owned(),
                key: key.to_owned(),
                rule,
                text: text.to_owned(),
            });
        }

        // Claim the slot first so a failed add leaves it empty, never stale.
        slots.clear(rule);

        let Some(span) = find_span(text, PARAM_ZERO, 0) else {
            return Err(category.error(format!(
                "parameter '{PARAM_ZERO}' not found, may want to use 'add' instead of 'add_{}'. locale: '{locale}' key: '{key}' text: '{text}'",
                category.label()
            )));
        };

        slots.set(
            rule,
            CompiledEntry {
                text: text.to_owned(),
                spans: vec![span],
            },
        );
        Ok(())
    }

    fn compile_plain(&self, key: &str, text: &str) -> Result<CompiledEntry, TranslationError> {
        let opens = text.matches('{').count();
        let closes = text.matches('}').count();
        if opens != closes {
            return Err(TranslationError::MissingBrace {
                locale: self.locale().to_owned(),
                key: key.to_owned(),
                text: text.to_owned(),
            });
        }

        let mut spans = Vec::with_capacity(opens);
        let mut matched = 0;
        let mut param = 0;
        while matched < opens {
            let needle = format!("{{{param}}}");
            let before = matched;
            let mut from = 0;
            while let Some(pos) = text[from..].find(&needle) {
                let start = from + pos;
                spans.push(Span {
                    start,
                    end: start + needle.len(),
                    param,
                });
                from = start + needle.len();
                matched += 1;
            }
            if matched == before {
                return Err(TranslationError::BadParamSyntax {
                    locale: self.locale().to_owned(),
                    param: needle,
                    key: key.to_owned(),
                    text: text.to_owned(),
                });
            }
            param += 1;
        }
        spans.sort_by_key(|span| span.start);

        Ok(CompiledEntry {
            text: text.to_owned(),
            spans,
        })
    }
}

fn find_span(text: &str, needle: &str, param: usize) -> Option<Span> {
    text.find(needle).map(|start| Span {
        start,
        end: start + needle.len(),
        param,
    })
}

fn splice_single(entry: &CompiledEntry, param: &str) -> String {
    let span = entry.spans[0];
    let mut out = String::with_capacity(entry.text.len() + param.len());
    out.push_str(&entry.text[..span.start]);
    out.push_str(param);
    out.push_str(&entry.text[span.end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingua_locale::BuiltinLocale;
    use proptest::prelude::*;

    fn store(tag: &str) -> TranslationStore {
        TranslationStore::new(Arc::new(BuiltinLocale::for_tag(tag).unwrap()))
    }

    #[test]
    fn plain_end_to_end() {
        let mut en = store("en");
        en.add("greeting", "Hello, {0}!", false).unwrap();
        assert_eq!(en.translate("greeting", &["World"]).unwrap(), "Hello, World!");
    }

    #[test]
    fn plain_multiple_params() {
        let mut en = store("en");
        en.add("farewell", "Goodbye, {0}. See you {1}.", false).unwrap();
        assert_eq!(
            en.translate("farewell", &["Bob", "tomorrow"]).unwrap(),
            "Goodbye, Bob. See you tomorrow."
        );
    }

    #[test]
    fn plain_repeated_placeholder() {
        let mut en = store("en");
        en.add("echo", "{0} and {0}", false).unwrap();
        assert_eq!(en.translate("echo", &["A"]).unwrap(), "A and A");
    }

    #[test]
    fn plain_out_of_order_placeholders() {
        let mut en = store("en");
        en.add("swap", "{1} before {0}", false).unwrap();
        assert_eq!(en.translate("swap", &["a", "b"]).unwrap(), "b before a");
    }

    #[test]
    fn plain_no_placeholders() {
        let mut en = store("en");
        en.add("static", "nothing to splice", false).unwrap();
        assert_eq!(en.translate("static", &[]).unwrap(), "nothing to splice");
    }

    #[test]
    fn unknown_key_errors() {
        let en = store("en");
        assert!(matches!(
            en.translate("nope", &[]),
            Err(TranslationError::UnknownTranslation { key }) if key == "nope"
        ));
    }

    #[test]
    fn unbalanced_braces_rejected() {
        let mut en = store("en");
        assert!(matches!(
            en.add("bad", "a {0", false),
            Err(TranslationError::MissingBrace { .. })
        ));
        assert!(matches!(
            en.add("bad2", "a 0} b", false),
            Err(TranslationError::MissingBrace { .. })
        ));
    }

    #[test]
    fn missing_index_rejected() {
        let mut en = store("en");
        let err = en.add("bad", "{0} and {2}", false).unwrap_err();
        assert!(matches!(
            err,
            TranslationError::BadParamSyntax { ref param, .. } if param == "{1}"
        ));
    }

    #[test]
    fn plain_conflict_and_override() {
        let mut en = store("en");
        en.add("greeting", "Hello", false).unwrap();
        assert!(matches!(
            en.add("greeting", "Hi", false),
            Err(TranslationError::ConflictingTranslation { rule: PluralRule::Unknown, .. })
        ));
        en.add("greeting", "Hi", true).unwrap();
        assert_eq!(en.translate("greeting", &[]).unwrap(), "Hi");
    }

    #[test]
    fn override_is_idempotent() {
        let mut en = store("en");
        en.add("greeting", "Hello, {0}!", true).unwrap();
        en.add("greeting", "Hello, {0}!", true).unwrap();
        assert_eq!(en.translate("greeting", &["World"]).unwrap(), "Hello, World!");
    }

    #[test]
    fn cardinal_add_and_render() {
        let mut en = store("en");
        en.add_cardinal("days", "{0} day left", PluralRule::One, false)
            .unwrap();
        en.add_cardinal("days", "{0} days left", PluralRule::Other, false)
            .unwrap();
        assert_eq!(
            en.translate_cardinal("days", 1.0, 0, "1").unwrap(),
            "1 day left"
        );
        assert_eq!(
            en.translate_cardinal("days", 5.0, 0, "5").unwrap(),
            "5 days left"
        );
    }

    #[test]
    fn cardinal_invalid_rule() {
        let mut en = store("en");
        // English cardinals never use `many`.
        let err = en
            .add_cardinal("days", "{0} days", PluralRule::Many, false)
            .unwrap_err();
        assert!(matches!(err, TranslationError::CardinalTranslation { .. }));
        assert!(err.to_string().contains("'many'"));
        assert!(err.to_string().contains("'en'"));
    }

    #[test]
    fn cardinal_missing_placeholder_rolls_back() {
        let mut en = store("en");
        let err = en
            .add_cardinal("days", "days left", PluralRule::One, false)
            .unwrap_err();
        assert!(matches!(err, TranslationError::CardinalTranslation { .. }));
        // The failed add must not leave a populated slot behind.
        assert!(en.cardinal.get("days").unwrap().get(PluralRule::One).is_none());
    }

    #[test]
    fn cardinal_failed_override_clears_previous_entry() {
        let mut en = store("en");
        en.add_cardinal("days", "{0} day", PluralRule::One, false)
            .unwrap();
        let err = en
            .add_cardinal("days", "no placeholder", PluralRule::One, true)
            .unwrap_err();
        assert!(matches!(err, TranslationError::CardinalTranslation { .. }));
        assert!(en.cardinal.get("days").unwrap().get(PluralRule::One).is_none());
    }

    #[test]
    fn cardinal_conflict_reports_rule() {
        let mut en = store("en");
        en.add_cardinal("days", "{0} day", PluralRule::One, false)
            .unwrap();
        let err = en
            .add_cardinal("days", "{0} dia", PluralRule::One, false)
            .unwrap_err();
        assert!(matches!(
            err,
            TranslationError::ConflictingTranslation { rule: PluralRule::One, .. }
        ));
    }

    #[test]
    fn ordinal_add_and_render() {
        let mut en = store("en");
        en.add_ordinal("day", "{0}st day", PluralRule::One, false).unwrap();
        en.add_ordinal("day", "{0}nd day", PluralRule::Two, false).unwrap();
        en.add_ordinal("day", "{0}rd day", PluralRule::Few, false).unwrap();
        en.add_ordinal("day", "{0}th day", PluralRule::Other, false).unwrap();
        assert_eq!(en.translate_ordinal("day", 1.0, 0, "1").unwrap(), "1st day");
        assert_eq!(en.translate_ordinal("day", 22.0, 0, "22").unwrap(), "22nd day");
        assert_eq!(en.translate_ordinal("day", 11.0, 0, "11").unwrap(), "11th day");
    }

    #[test]
    fn ordinal_missing_placeholder_rolls_back() {
        let mut en = store("en");
        let err = en
            .add_ordinal("day", "first day", PluralRule::One, false)
            .unwrap_err();
        assert!(matches!(err, TranslationError::OrdinalTranslation { .. }));
        assert!(en.ordinal.get("day").unwrap().get(PluralRule::One).is_none());
    }

    #[test]
    fn range_add_and_render() {
        let mut en = store("en");
        en.add_range("stay", "{0}-{1} days", PluralRule::Other, false)
            .unwrap();
        assert_eq!(
            en.translate_range("stay", 1.0, 0, 2.0, 0, "1", "2").unwrap(),
            "1-2 days"
        );
    }

    #[test]
    fn range_requires_both_placeholders() {
        let mut en = store("en");
        let err = en
            .add_range("stay", "{0} days", PluralRule::Other, false)
            .unwrap_err();
        assert!(matches!(err, TranslationError::RangeTranslation { .. }));
        assert!(err.to_string().contains("{1}"));
        assert!(en.range.get("stay").unwrap().get(PluralRule::Other).is_none());
    }

    #[test]
    fn range_requires_first_placeholder() {
        let mut en = store("en");
        let err = en
            .add_range("stay", "up to {1} days", PluralRule::Other, false)
            .unwrap_err();
        assert!(matches!(err, TranslationError::RangeTranslation { .. }));
        assert!(err.to_string().contains("{0}"));
    }

    #[test]
    fn plain_and_plural_namespaces_are_independent() {
        let mut en = store("en");
        en.add("days", "days", false).unwrap();
        en.add_cardinal("days", "{0} day", PluralRule::One, false).unwrap();
        en.add_cardinal("days", "{0} days", PluralRule::Other, false).unwrap();
        assert_eq!(en.translate("days", &[]).unwrap(), "days");
        assert_eq!(en.translate_cardinal("days", 2.0, 0, "2").unwrap(), "2 days");
    }

    #[test]
    fn verify_reports_first_missing_rule() {
        let mut en = store("en");
        en.add_cardinal("days", "{0} days", PluralRule::Other, false)
            .unwrap();
        let err = en.verify().unwrap_err();
        assert!(matches!(
            err,
            TranslationError::MissingPluralTranslation {
                rule: PluralRule::One,
                category: "plural",
                ref key,
                ..
            } if key == "days"
        ));

        en.add_cardinal("days", "{0} day", PluralRule::One, false)
            .unwrap();
        en.verify().unwrap();
    }

    #[test]
    fn verify_empty_store_succeeds() {
        assert!(store("en").verify().is_ok());
        let mut en = store("en");
        en.add("plain-only", "no plurals here", false).unwrap();
        assert!(en.verify().is_ok());
    }

    #[test]
    fn verify_covers_ordinal_and_range() {
        let mut en = store("en");
        en.add_ordinal("day", "{0}st", PluralRule::One, false).unwrap();
        let err = en.verify().unwrap_err();
        assert!(matches!(
            err,
            TranslationError::MissingPluralTranslation { category: "ordinal", .. }
        ));

        let mut en2 = store("en");
        en2.add_range("stay", "{0}-{1}", PluralRule::Other, false).unwrap();
        en2.verify().unwrap();
    }

    #[test]
    fn russian_cardinal_selection() {
        let mut ru = store("ru");
        ru.add_cardinal("files", "{0} файл", PluralRule::One, false).unwrap();
        ru.add_cardinal("files", "{0} файла", PluralRule::Few, false).unwrap();
        ru.add_cardinal("files", "{0} файлов", PluralRule::Many, false).unwrap();
        ru.add_cardinal("files", "{0} файла", PluralRule::Other, false).unwrap();
        ru.verify().unwrap();
        assert_eq!(ru.translate_cardinal("files", 1.0, 0, "1").unwrap(), "1 файл");
        assert_eq!(ru.translate_cardinal("files", 3.0, 0, "3").unwrap(), "3 файла");
        assert_eq!(ru.translate_cardinal("files", 5.0, 0, "5").unwrap(), "5 файлов");
        assert_eq!(ru.translate_cardinal("files", 21.0, 0, "21").unwrap(), "21 файл");
    }

    #[test]
    fn multibyte_literal_text_is_preserved() {
        let mut ru = store("ru");
        ru.add("greet", "Привет, {0}!", false).unwrap();
        assert_eq!(ru.translate("greet", &["мир"]).unwrap(), "Привет, мир!");
    }

    proptest! {
        // A template built from brace-free literal segments joined by
        // {0}..{N-1} placeholders must render back to the segments with the
        // parameters spliced between them.
        #[test]
        fn plain_render_reconstructs_template(
            segments in prop::collection::vec("[a-zA-Z0-9 .!,]{0,8}", 2..6),
            params in prop::collection::vec("[a-zA-Z0-9]{0,6}", 5),
        ) {
            let n = segments.len() - 1;
            let mut template = String::new();
            let mut expected = String::new();
            for (i, segment) in segments.iter().enumerate() {
                template.push_str(segment);
                expected.push_str(segment);
                if i < n {
                    template.push_str(&format!("{{{i}}}"));
                    expected.push_str(&params[i]);
                }
            }

            let mut en = store("en");
            en.add("p", &template, false).unwrap();
            let args: Vec<&str> = params.iter().take(n).map(String::as_str).collect();
            prop_assert_eq!(en.translate("p", &args).unwrap(), expected);
        }
    }
}
