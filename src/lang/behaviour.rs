//! Pure grammar rule functions shared across language profiles, plus the
//! construction-time validation of a profile's tables.
//!
//! Plural selection follows the CLDR form-classes, trimmed to the three
//! categories the scale-word tables actually distinguish.

use crate::lang::{DecimalStyle, LangEntry, PluralCategory, SegmentPolicy};

/// `one` for exactly 1, `many` otherwise (English, German).
pub(crate) fn english_rule(n: u32) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Many
    }
}

/// `one` for 0 and 1, `many` otherwise (French scale nouns).
pub(crate) fn french_rule(n: u32) -> PluralCategory {
    if n <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Many
    }
}

/// Slavic three-way split keyed on the last one or two digits:
/// 11–14 are always `many`; otherwise last digit 1 → `one`,
/// 2–4 → `few`, everything else → `many`.
pub(crate) fn slavic_rule(n: u32) -> PluralCategory {
    let tail = n % 100;
    if (11..=14).contains(&tail) {
        return PluralCategory::Many;
    }
    match tail % 10 {
        1 => PluralCategory::One,
        2..=4 => PluralCategory::Few,
        _ => PluralCategory::Many,
    }
}

/// No plural distinction at all (Chinese, Hindi scale words).
pub(crate) fn invariant_rule(_n: u32) -> PluralCategory {
    PluralCategory::Many
}

impl LangEntry {
    /// Check that every table the policy's grammar references is populated.
    /// An index miss past this point is a data bug, so a profile that fails
    /// here must never reach conversion.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.scales.is_empty() {
            return Err("empty scale-word table");
        }
        if self.zero.is_empty() || self.negative.is_empty() {
            return Err("missing zero or negative word");
        }
        if self.decimal_sep.is_empty() {
            return Err("missing decimal separator word");
        }
        match self.policy {
            SegmentPolicy::Western | SegmentPolicy::French { .. } => {
                if self.ones.len() < 20 || self.tens.len() < 10 {
                    return Err("ones table needs 0..=19 and tens 0..=9");
                }
                if self.hundred.is_none() {
                    return Err("missing hundred word");
                }
            }
            SegmentPolicy::Inverted => {
                if self.ones.len() < 20 || self.tens.len() < 10 {
                    return Err("ones table needs 0..=19 and tens 0..=9");
                }
                if self.hundred.is_none() || self.compound_one.is_none() {
                    return Err("missing hundred word or compound one");
                }
                if self.and_word.is_none() {
                    return Err("inverted compounds need a joining word");
                }
            }
            SegmentPolicy::Slavic => {
                if self.ones.len() < 20 || self.tens.len() < 10 || self.hundreds.len() < 10 {
                    return Err("ones/tens/hundreds tables incomplete");
                }
            }
            SegmentPolicy::Myriad => {
                if self.ones.len() < 10 {
                    return Err("digit table needs 0..=9");
                }
                if self.myriad_units.len() != 4 {
                    return Err("myriad place table needs exactly 4 entries");
                }
                if self.gap_word.is_none() {
                    return Err("myriad grouping needs a gap word");
                }
            }
            SegmentPolicy::Lookup => {
                if self.small_table.len() < 100 {
                    return Err("lookup table needs 0..=99");
                }
                if self.hundred.is_none() {
                    return Err("missing hundred word");
                }
            }
        }
        if self.decimal_style == DecimalStyle::Digits
            && self.ones.is_empty()
            && self.small_table.is_empty()
        {
            return Err("digit-wise decimals need a digit table");
        }
        Ok(())
    }
}
