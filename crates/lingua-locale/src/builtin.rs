//! Built-in providers covering the most common CLDR language families.
//!
//! # Invariants
//!
//! 1. Every rule function maps any quantity to exactly one [`PluralRule`].
//! 2. Each selection function only returns rules present in the matching
//!    valid-rule set, so add-time validation and render-time selection agree.
//! 3. Rules are pure functions: same quantity always yields same rule.

use crate::provider::LocaleProvider;
use crate::rule::PluralRule;

/// Language family determining which rule tables apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    /// English-like: `one` for exactly 1, `other` for everything else.
    English,
    /// French-like: `one` for 0-1 (fractions included), `other` otherwise.
    French,
    /// Russian/Slavic: `one`/`few`/`many` by the last two digits.
    Russian,
    /// Polish: like Russian with different `many` thresholds.
    Polish,
    /// Arabic: all six categories.
    Arabic,
    /// Chinese/Japanese/Korean-like: always `other`.
    NoPlurals,
}

/// A locale provider backed by one of the built-in rule families.
#[derive(Debug, Clone)]
pub struct BuiltinLocale {
    tag: String,
    family: RuleFamily,
}

impl BuiltinLocale {
    /// Create a provider with an explicit family, keeping the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>, family: RuleFamily) -> Self {
        Self {
            tag: tag.into(),
            family,
        }
    }

    /// Select the family for a locale tag by its primary language subtag.
    ///
    /// Returns `None` for languages without a built-in family; callers
    /// needing broader coverage supply their own [`LocaleProvider`].
    #[must_use]
    pub fn for_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);

        let family = match primary.to_ascii_lowercase().as_str() {
            "en" | "de" | "nl" | "sv" | "da" | "no" | "nb" | "nn" | "it" | "es" | "pt" | "el"
            | "hu" | "fi" | "et" | "he" | "tr" | "bg" => RuleFamily::English,
            "fr" | "hi" | "bn" => RuleFamily::French,
            "ru" | "uk" | "hr" | "sr" | "bs" => RuleFamily::Russian,
            "pl" => RuleFamily::Polish,
            "ar" => RuleFamily::Arabic,
            "zh" | "ja" | "ko" | "th" | "vi" | "id" | "ms" => RuleFamily::NoPlurals,
            _ => return None,
        };

        Some(Self::new(tag, family))
    }

    /// The family backing this provider.
    #[must_use]
    pub const fn family(&self) -> RuleFamily {
        self.family
    }
}

const CARDINAL_TWO_FORM: &[PluralRule] = &[PluralRule::One, PluralRule::Other];
const CARDINAL_SLAVIC: &[PluralRule] = &[
    PluralRule::One,
    PluralRule::Few,
    PluralRule::Many,
    PluralRule::Other,
];
const CARDINAL_ARABIC: &[PluralRule] = &[
    PluralRule::Zero,
    PluralRule::One,
    PluralRule::Two,
    PluralRule::Few,
    PluralRule::Many,
    PluralRule::Other,
];
const ORDINAL_ENGLISH: &[PluralRule] = &[
    PluralRule::One,
    PluralRule::Two,
    PluralRule::Few,
    PluralRule::Other,
];
const ONLY_OTHER: &[PluralRule] = &[PluralRule::Other];

impl LocaleProvider for BuiltinLocale {
    fn locale(&self) -> &str {
        &self.tag
    }

    fn plurals_cardinal(&self) -> &[PluralRule] {
        match self.family {
            RuleFamily::English | RuleFamily::French => CARDINAL_TWO_FORM,
            RuleFamily::Russian | RuleFamily::Polish => CARDINAL_SLAVIC,
            RuleFamily::Arabic => CARDINAL_ARABIC,
            RuleFamily::NoPlurals => ONLY_OTHER,
        }
    }

    fn plurals_ordinal(&self) -> &[PluralRule] {
        match self.family {
            RuleFamily::English => ORDINAL_ENGLISH,
            RuleFamily::French => CARDINAL_TWO_FORM,
            _ => ONLY_OTHER,
        }
    }

    fn plurals_range(&self) -> &[PluralRule] {
        match self.family {
            RuleFamily::English | RuleFamily::NoPlurals => ONLY_OTHER,
            RuleFamily::French => CARDINAL_TWO_FORM,
            RuleFamily::Russian | RuleFamily::Polish => CARDINAL_SLAVIC,
            RuleFamily::Arabic => CARDINAL_ARABIC,
        }
    }

    fn cardinal_rule(&self, num: f64, digits: u64) -> PluralRule {
        let n = integer_part(num);
        match self.family {
            RuleFamily::English => english_cardinal(n, digits),
            RuleFamily::French => french_cardinal(n),
            RuleFamily::Russian => russian_cardinal(n, digits),
            RuleFamily::Polish => polish_cardinal(n, digits),
            RuleFamily::Arabic => arabic_cardinal(n, digits),
            RuleFamily::NoPlurals => PluralRule::Other,
        }
    }

    fn ordinal_rule(&self, num: f64, _digits: u64) -> PluralRule {
        let n = integer_part(num);
        match self.family {
            RuleFamily::English => english_ordinal(n),
            RuleFamily::French => {
                if n == 1 {
                    PluralRule::One
                } else {
                    PluralRule::Other
                }
            }
            _ => PluralRule::Other,
        }
    }

    fn range_rule(&self, _num1: f64, _digits1: u64, num2: f64, digits2: u64) -> PluralRule {
        // The interval takes the category of its end value; English-style
        // locales collapse every combination to `other`.
        match self.family {
            RuleFamily::English | RuleFamily::NoPlurals => PluralRule::Other,
            _ => self.cardinal_rule(num2, digits2),
        }
    }
}

fn integer_part(num: f64) -> u64 {
    let trunc = num.abs().trunc();
    if trunc >= u64::MAX as f64 {
        u64::MAX
    } else {
        trunc as u64
    }
}

fn english_cardinal(n: u64, digits: u64) -> PluralRule {
    if n == 1 && digits == 0 {
        PluralRule::One
    } else {
        PluralRule::Other
    }
}

fn french_cardinal(n: u64) -> PluralRule {
    if n <= 1 {
        PluralRule::One
    } else {
        PluralRule::Other
    }
}

fn russian_cardinal(n: u64, digits: u64) -> PluralRule {
    if digits != 0 {
        return PluralRule::Other;
    }
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralRule::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralRule::Few
    } else {
        PluralRule::Many
    }
}

fn polish_cardinal(n: u64, digits: u64) -> PluralRule {
    if digits != 0 {
        return PluralRule::Other;
    }
    let mod10 = n % 10;
    let mod100 = n % 100;

    if n == 1 {
        PluralRule::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralRule::Few
    } else {
        PluralRule::Many
    }
}

fn arabic_cardinal(n: u64, digits: u64) -> PluralRule {
    if digits != 0 {
        return PluralRule::Other;
    }
    let mod100 = n % 100;
    match n {
        0 => PluralRule::Zero,
        1 => PluralRule::One,
        2 => PluralRule::Two,
        _ if (3..=10).contains(&mod100) => PluralRule::Few,
        _ if (11..=99).contains(&mod100) => PluralRule::Many,
        _ => PluralRule::Other,
    }
}

fn english_ordinal(n: u64) -> PluralRule {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralRule::One
    } else if mod10 == 2 && mod100 != 12 {
        PluralRule::Two
    } else if mod10 == 3 && mod100 != 13 {
        PluralRule::Few
    } else {
        PluralRule::Other
    }
}
