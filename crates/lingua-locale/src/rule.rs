//! CLDR plural rule identifiers.

use core::fmt;

/// A CLDR plural rule.
///
/// Rules map to dense ordinals (`Unknown` = 0 through `Other` = 6) so a
/// per-key translation table can be a fixed array indexed by rule. `Unknown`
/// is the empty-slot sentinel position and never a valid rule for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralRule {
    Unknown,
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralRule {
    /// Number of rule slots, including the `Unknown` sentinel.
    pub const COUNT: usize = 7;

    /// The six named rules in serialization field order.
    pub const NAMED: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// Dense ordinal for slot indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse one of the six CLDR rule names (`"zero"` through `"other"`).
    ///
    /// `"unknown"` is deliberately not parseable; it never appears in
    /// serialized documents.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Zero => write!(f, "zero"),
            Self::One => write!(f, "one"),
            Self::Two => write!(f, "two"),
            Self::Few => write!(f, "few"),
            Self::Many => write!(f, "many"),
            Self::Other => write!(f, "other"),
        }
    }
}
