//! Error taxonomy for translation operations.
//!
//! Every variant carries enough context to reconstruct the human-readable
//! message without re-deriving it from store state. Aggregate operations
//! (verify-all, directory import) stop at the first failure; nothing is
//! collected or silently swallowed.

use std::path::PathBuf;

use lingua_locale::PluralRule;
use thiserror::Error;

/// Failures produced by the translation store, registry and codec.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// A record key at the serialization boundary was not a usable
    /// non-empty string. Internal APIs take `&str` keys, so this only
    /// arises where untyped external data enters.
    #[error("translation key must be a non-empty string")]
    KeyNotString,

    /// Unbalanced `{`/`}` in a template.
    #[error("missing brace ({{}}), in translation. locale: '{locale}' key: '{key}' text: '{text}'")]
    MissingBrace {
        locale: String,
        key: String,
        text: String,
    },

    /// A plain template with N placeholders lacks a literal `{i}`.
    #[error(
        "bad parameter syntax, missing parameter '{param}' in translation. locale: '{locale}' key: '{key}' text: '{text}'"
    )]
    BadParamSyntax {
        locale: String,
        param: String,
        key: String,
        text: String,
    },

    /// Invalid rule or missing `{0}` for a cardinal translation.
    #[error("{text}")]
    CardinalTranslation { text: String },

    /// Invalid rule or missing `{0}` for an ordinal translation.
    #[error("{text}")]
    OrdinalTranslation { text: String },

    /// Invalid rule or missing `{0}`/`{1}` for a range translation.
    #[error("{text}")]
    RangeTranslation { text: String },

    /// An existing entry blocks a non-override add. `rule` is
    /// [`PluralRule::Unknown`] for plain-entry conflicts.
    #[error(
        "conflicting key '{key}' rule '{rule}' with text '{text}' for locale '{locale}', value being ignored"
    )]
    ConflictingTranslation {
        locale: String,
        key: String,
        rule: PluralRule,
        text: String,
    },

    /// A translator for the locale is already registered.
    #[error("conflicting translator for locale '{locale}'")]
    ExistingTranslator { locale: String },

    /// Render referenced a key absent from the store.
    #[error("unknown translation key: {key}")]
    UnknownTranslation { key: String },

    /// Import referenced a locale with no registered translator.
    #[error("locale '{locale}' is not registered")]
    LocaleNotRegistered { locale: String },

    /// Verification found an unpopulated mandatory rule slot.
    #[error(
        "missing '{category}' plural rule '{rule}' for translation with key '{key}' and locale '{locale}'"
    )]
    MissingPluralTranslation {
        locale: String,
        key: String,
        rule: PluralRule,
        category: &'static str,
    },

    /// A serialized record carried an unrecognized `rule` tag.
    #[error("rule type '{rule_type}' is not valid")]
    InvalidRuleType { rule_type: String },

    /// The import path could not be opened or read.
    #[error("failed to read import path '{}': {source}", .path.display())]
    ImportPathFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Imported translation data could not be parsed.
    #[error("failed to import translations{}: {source}", path_suffix(.path))]
    ImportReadFailure {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    /// The export directory could not be created.
    #[error("failed to create export path '{}': {source}", .path.display())]
    ExportPathFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation document could not be serialized or written.
    #[error("failed to export translations to '{}': {source}", .path.display())]
    ExportWriteFailure {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" from '{}'", p.display()))
        .unwrap_or_default()
}
