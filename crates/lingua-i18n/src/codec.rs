//! TOML import/export bridge for translation stores.
//!
//! Each locale serializes to one TOML document: a table of records keyed by
//! translation key. A record carries the locale tag, an optional `rule`
//! type tag, an `override` flag, and up to six named plural-form strings
//! (`zero` through `other`). Plain translations populate only `other`.
//!
//! Import applies records through the same `add_*` operations direct
//! callers use, so all template validation and conflict policy applies
//! unchanged. The first failing record aborts the import; records already
//! applied stay committed.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use lingua_locale::PluralRule;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::TranslationError;
use crate::registry::TranslatorRegistry;
use crate::store::{PluralSlots, TranslationStore};

/// Rule type tag for plain translations.
pub const RULE_TYPE_PLAIN: &str = "plain";
/// Rule type tag for cardinal translations.
pub const RULE_TYPE_CARDINAL: &str = "cardinal";
/// Rule type tag for ordinal translations.
pub const RULE_TYPE_ORDINAL: &str = "ordinal";
/// Rule type tag for range translations.
pub const RULE_TYPE_RANGE: &str = "range";

/// File extension recognized by directory import.
pub const TRANSLATION_FILE_EXTENSION: &str = "toml";

/// One flat serialized translation record.
///
/// Empty string fields mean "absent"; `other` is always emitted because it
/// is mandatory for plain entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    #[serde(default)]
    pub locale: String,
    #[serde(default, rename = "override", skip_serializing_if = "is_false")]
    pub override_existing: bool,
    #[serde(default, rename = "rule", skip_serializing_if = "String::is_empty")]
    pub rule_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zero: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub one: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub two: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub few: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub many: String,
    #[serde(default)]
    pub other: String,
}

impl TranslationRecord {
    /// The six plural-form fields in fixed application order.
    fn plural_fields(&self) -> [(PluralRule, &str); 6] {
        [
            (PluralRule::Zero, self.zero.as_str()),
            (PluralRule::One, self.one.as_str()),
            (PluralRule::Two, self.two.as_str()),
            (PluralRule::Few, self.few.as_str()),
            (PluralRule::Many, self.many.as_str()),
            (PluralRule::Other, self.other.as_str()),
        ]
    }

    fn set_form(&mut self, rule: PluralRule, text: &str) {
        match rule {
            PluralRule::Zero => self.zero = text.to_owned(),
            PluralRule::One => self.one = text.to_owned(),
            PluralRule::Two => self.two = text.to_owned(),
            PluralRule::Few => self.few = text.to_owned(),
            PluralRule::Many => self.many = text.to_owned(),
            PluralRule::Other => self.other = text.to_owned(),
            PluralRule::Unknown => {}
        }
    }
}

/// One locale's aggregate translation document, keyed by translation key.
///
/// A `BTreeMap` keeps exported files byte-stable across runs.
pub type TranslationDocument = BTreeMap<String, TranslationRecord>;

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Apply every record of a parsed document to the registry.
///
/// Records resolve their locale exactly (no fallback). Dispatch follows the
/// `rule` tag: empty or `"plain"` routes `other` through a plain add;
/// plural tags route each non-empty form field through the matching add in
/// fixed field order (zero, one, two, few, many, other).
///
/// # Errors
///
/// `KeyNotString` for an empty record key, `LocaleNotRegistered`,
/// `InvalidRuleType`, or the first error from an underlying add. Earlier
/// records stay committed.
pub fn import_document(
    registry: &mut TranslatorRegistry,
    document: &TranslationDocument,
) -> Result<(), TranslationError> {
    for (key, record) in document {
        import_record(registry, key, record)?;
    }
    Ok(())
}

/// Parse a TOML document and apply it to the registry.
///
/// # Errors
///
/// `ImportReadFailure` on malformed TOML, plus everything
/// [`import_document`] returns.
pub fn import_str(registry: &mut TranslatorRegistry, data: &str) -> Result<(), TranslationError> {
    let document: TranslationDocument =
        toml::from_str(data).map_err(|source| TranslationError::ImportReadFailure {
            path: None,
            source,
        })?;
    import_document(registry, &document)
}

/// Import translations from a file, or from every `.toml` file under a
/// directory tree.
///
/// # Errors
///
/// `ImportPathFailure` when the path or a file cannot be read,
/// `ImportReadFailure` annotated with the originating file on parse
/// errors, plus everything [`import_document`] returns.
pub fn import_path(
    registry: &mut TranslatorRegistry,
    path: &Path,
) -> Result<(), TranslationError> {
    let metadata = fs::metadata(path).map_err(|source| TranslationError::ImportPathFailure {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        import_dir(registry, path)
    } else {
        import_file(registry, path)
    }
}

fn import_dir(registry: &mut TranslatorRegistry, dir: &Path) -> Result<(), TranslationError> {
    let entries = fs::read_dir(dir).map_err(|source| TranslationError::ImportPathFailure {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TranslationError::ImportPathFailure {
            path: dir.to_path_buf(),
            source,
        })?;
        paths.push(entry.path());
    }
    // Directory order is platform-dependent; sort so failures are stable.
    paths.sort();

    for path in paths {
        if path.is_dir() {
            import_dir(registry, &path)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext == TRANSLATION_FILE_EXTENSION)
        {
            import_file(registry, &path)?;
        }
    }
    Ok(())
}

fn import_file(registry: &mut TranslatorRegistry, path: &Path) -> Result<(), TranslationError> {
    debug!(file = %path.display(), "loading translation file");
    let data = fs::read_to_string(path).map_err(|source| TranslationError::ImportPathFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let document: TranslationDocument =
        toml::from_str(&data).map_err(|source| TranslationError::ImportReadFailure {
            path: Some(path.to_path_buf()),
            source,
        })?;
    import_document(registry, &document)
}

fn import_record(
    registry: &mut TranslatorRegistry,
    key: &str,
    record: &TranslationRecord,
) -> Result<(), TranslationError> {
    if key.is_empty() {
        return Err(TranslationError::KeyNotString);
    }

    let Some(store) = registry.get_translator_mut(&record.locale) else {
        let err = TranslationError::LocaleNotRegistered {
            locale: record.locale.clone(),
        };
        error!(locale = %record.locale, "{err}");
        return Err(err);
    };

    enum Kind {
        Cardinal,
        Ordinal,
        Range,
    }

    let rule_type = record.rule_type.to_lowercase();
    let kind = match rule_type.as_str() {
        "" | RULE_TYPE_PLAIN => {
            return store.add(key, &record.other, record.override_existing);
        }
        RULE_TYPE_CARDINAL => Kind::Cardinal,
        RULE_TYPE_ORDINAL => Kind::Ordinal,
        RULE_TYPE_RANGE => Kind::Range,
        _ => {
            let err = TranslationError::InvalidRuleType {
                rule_type: record.rule_type.clone(),
            };
            error!(rule_type = %record.rule_type, "{err}");
            return Err(err);
        }
    };

    for (rule, text) in record.plural_fields() {
        if text.is_empty() {
            continue;
        }
        match kind {
            Kind::Cardinal => store.add_cardinal(key, text, rule, record.override_existing)?,
            Kind::Ordinal => store.add_ordinal(key, text, rule, record.override_existing)?,
            Kind::Range => store.add_range(key, text, rule, record.override_existing)?,
        }
    }
    Ok(())
}

/// Export every registered locale to `<locale>.toml` under `dir`.
///
/// The directory is created when missing. Records for a locale aggregate
/// the plain map and all three plural maps; a key present in more than one
/// plural category collapses into a single record whose `rule` tag is the
/// last category written (cardinal, then ordinal, then range) — the flat
/// record format cannot express the distinction.
///
/// # Errors
///
/// `ExportPathFailure` when the directory cannot be created,
/// `ExportWriteFailure` when a document cannot be serialized or written.
pub fn export(registry: &TranslatorRegistry, dir: &Path) -> Result<(), TranslationError> {
    fs::create_dir_all(dir).map_err(|source| TranslationError::ExportPathFailure {
        path: dir.to_path_buf(),
        source,
    })?;

    for store in registry.stores() {
        let locale = store.locale();
        debug!(locale, "exporting locale");
        let document = build_document(store);

        let data = toml::to_string_pretty(&document).map_err(|source| {
            TranslationError::ExportWriteFailure {
                path: dir.to_path_buf(),
                source: Box::new(source),
            }
        })?;

        let file = dir.join(format!("{locale}.toml"));
        debug!(file = %file.display(), "writing translation file");
        fs::write(&file, data).map_err(|source| TranslationError::ExportWriteFailure {
            path: file.clone(),
            source: Box::new(source),
        })?;
    }
    Ok(())
}

pub(crate) fn build_document(store: &TranslationStore) -> TranslationDocument {
    let locale = store.locale();
    let mut document = TranslationDocument::new();

    for (key, entry) in &store.plain {
        let record = document.entry(key.clone()).or_default();
        record.locale = locale.to_owned();
        record.other = entry.text.clone();
    }

    collect_plurals(&mut document, locale, RULE_TYPE_CARDINAL, &store.cardinal);
    collect_plurals(&mut document, locale, RULE_TYPE_ORDINAL, &store.ordinal);
    collect_plurals(&mut document, locale, RULE_TYPE_RANGE, &store.range);

    document
}

fn collect_plurals(
    document: &mut TranslationDocument,
    locale: &str,
    rule_type: &str,
    map: &HashMap<String, PluralSlots>,
) {
    for (key, slots) in map {
        let mut populated = slots.iter().peekable();
        if populated.peek().is_none() {
            continue;
        }
        let record = document.entry(key.clone()).or_default();
        record.locale = locale.to_owned();
        record.rule_type = rule_type.to_owned();
        for (rule, entry) in populated {
            record.set_form(rule, &entry.text);
        }
    }
}
