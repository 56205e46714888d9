//! The locale capability boundary consumed by the translation store.

use core::fmt;

use crate::rule::PluralRule;

/// Per-locale plural capability provider.
///
/// A provider answers two questions for each of the three plural categories
/// (cardinal, ordinal, range): which rules the locale supports at all, and
/// which rule applies to a concrete quantity.
///
/// The `digits` arguments carry the number of visible decimal fraction
/// digits of the rendered number, so a provider can distinguish `1` from
/// `1.0` where that affects the category. Providers never round or format;
/// the final display string is supplied by the caller at render time.
pub trait LocaleProvider: fmt::Debug + Send + Sync {
    /// Locale tag, e.g. `"en"` or `"pt-BR"`.
    fn locale(&self) -> &str;

    /// Rules a cardinal translation may legally target.
    fn plurals_cardinal(&self) -> &[PluralRule];

    /// Rules an ordinal translation may legally target.
    fn plurals_ordinal(&self) -> &[PluralRule];

    /// Rules a range translation may legally target.
    fn plurals_range(&self) -> &[PluralRule];

    /// Cardinal rule for a counting quantity.
    fn cardinal_rule(&self, num: f64, digits: u64) -> PluralRule;

    /// Ordinal rule for a rank/position quantity.
    fn ordinal_rule(&self, num: f64, digits: u64) -> PluralRule;

    /// Range rule for an interval between two quantities.
    fn range_rule(&self, num1: f64, digits1: u64, num2: f64, digits2: u64) -> PluralRule;
}
