pub(crate) mod behaviour;
pub mod data;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LangError {
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),
    #[error("language `{lang}` is misconfigured: {detail}")]
    Configuration {
        lang: &'static str,
        detail: &'static str,
    },
}

/// A registered language. Cheap handle; the actual grammar lives in the
/// [`LangEntry`] it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve a locale tag to a registered language, falling back from a
    /// region-qualified tag to its base language (`fr-CA` → `fr`).
    pub fn resolve(tag: &str) -> Result<Lang, LangError> {
        if let Some(lang) = data::from_code(tag) {
            return Ok(lang);
        }
        let base = tag.split(['-', '_']).next().unwrap_or(tag);
        data::from_code(base).ok_or_else(|| LangError::UnknownLanguage(tag.to_string()))
    }
}

pub const DEFAULT_LANG: Lang = data::ENG;

/// Grammatical gender axis. Languages without the axis ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

/// How the integer part is chunked before scale words are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Western 3-digit groups (thousand, million, …).
    Thousands,
    /// CJK 4-digit groups (万, 亿, …).
    Myriads,
    /// Indian: rightmost group is 3 digits, every higher group is 2
    /// (thousand, lakh, crore, …).
    LakhCrore,
}

impl Grouping {
    /// Digit width of the group at the given scale index.
    #[inline]
    pub const fn width(self, scale: u32) -> u32 {
        match self {
            Grouping::Thousands => 3,
            Grouping::Myriads => 4,
            Grouping::LakhCrore => {
                if scale == 0 {
                    3
                } else {
                    2
                }
            }
        }
    }

    /// Exclusive upper bound on a segment value at the given scale index.
    #[inline]
    pub const fn bound(self, scale: u32) -> u32 {
        10u32.pow(self.width(scale))
    }
}

/// The rendering strategy for one bounded-magnitude segment.
///
/// An enum of strategies, not an inheritance chain: each variant covers a
/// grammar family, and per-language differences within a family are plain
/// vocabulary data on the [`LangEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPolicy {
    /// Hundreds + hyphenated tens-ones, optional "and" (English).
    Western,
    /// "cent"/"et"/plural `-s` rules; `vigesimal` turns on the
    /// soixante-dix / quatre-vingt-dix composition (France vs. Belgium).
    French { vigesimal: bool },
    /// Ones-before-tens compounds glued with "und" (German).
    Inverted,
    /// Precomposed hundreds table plus gendered ones (Russian).
    Slavic,
    /// Per-digit place words within a 4-digit group, internal zero marker
    /// (Chinese).
    Myriad,
    /// Fully irregular 0–99 table plus a hundred word (Hindi).
    Lookup,
}

/// How the fractional digit string is spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalStyle {
    /// Each digit by its own word (Chinese, Hindi).
    Digits,
    /// Leading zeros digit-wise, then the rest through the whole-number
    /// pipeline (English, French, German, Russian).
    WholeNumber,
}

/// Plural form-class of a count, per the language's rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Few,
    Many,
}

/// Word forms and joining behaviour for one scale level.
#[derive(Debug, Clone, Copy)]
pub struct ScaleLevel {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
    /// Multiplier agrees feminine regardless of the requested gender
    /// (Russian thousands).
    pub feminine: bool,
    /// Glued to its multiplier and to the following group without a
    /// separator (German "tausend").
    pub attached: bool,
    /// A multiplier of exactly 1 is not spoken (French "mille").
    pub omit_one: bool,
    /// The scale word is a numeral adjective, so the multiplier drops its
    /// plural/standalone form before it ("quatre-vingt mille", "eintausend").
    pub adjectival: bool,
    /// Replacement word for a multiplier of exactly 1 (German "eine" Million).
    pub one_form: Option<&'static str>,
}

impl ScaleLevel {
    pub const fn invariant(word: &'static str) -> Self {
        Self {
            one: word,
            few: word,
            many: word,
            feminine: false,
            attached: false,
            omit_one: false,
            adjectival: false,
            one_form: None,
        }
    }

    pub const fn pair(one: &'static str, other: &'static str) -> Self {
        Self {
            one,
            few: other,
            many: other,
            ..Self::invariant(one)
        }
    }

    pub const fn forms(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self {
            one,
            few,
            many,
            ..Self::invariant(one)
        }
    }

    pub const fn feminine(mut self) -> Self {
        self.feminine = true;
        self
    }

    pub const fn attached(mut self) -> Self {
        self.attached = true;
        self
    }

    pub const fn omit_one(mut self) -> Self {
        self.omit_one = true;
        self
    }

    pub const fn adjectival(mut self) -> Self {
        self.adjectival = true;
        self
    }

    pub const fn one_form(mut self, word: &'static str) -> Self {
        self.one_form = Some(word);
        self
    }

    /// Pick the form for a plural category.
    #[inline]
    pub fn select(&self, category: PluralCategory) -> &'static str {
        match category {
            PluralCategory::One => self.one,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
        }
    }
}

/// The full grammar profile of one language: vocabulary tables plus the
/// strategy knobs the pipeline dispatches on.
///
/// Built once in [`data::LANG_TABLE`], immutable, shared read-only across
/// all conversions.
#[derive(Debug, Clone, Copy)]
pub struct LangEntry {
    pub grouping: Grouping,
    pub policy: SegmentPolicy,
    /// 0..=19 for compositional policies, 0..=9 for `Myriad`; index 0 is
    /// the zero word.
    pub ones: &'static [&'static str],
    /// Tens words indexed by tens digit; indices a policy never reads may
    /// hold composed forms for documentation value.
    pub tens: &'static [&'static str],
    /// Precomposed hundreds (Slavic policy only).
    pub hundreds: &'static [&'static str],
    /// Fully irregular 0..=99 table (Lookup policy only).
    pub small_table: &'static [&'static str],
    /// Gendered overrides for small values, e.g. Russian одна/две.
    pub feminine_ones: &'static [(u32, &'static str)],
    /// Compound form of "one" used inside glued words (German "ein").
    pub compound_one: Option<&'static str>,
    pub hundred: Option<&'static str>,
    pub omit_one_before_hundred: bool,
    /// Place words inside a 4-digit myriad group, indexed by place:
    /// `["", "十", "百", "千"]`.
    pub myriad_units: &'static [&'static str],
    /// Scale words for scale index 1, 2, … in order.
    pub scales: &'static [ScaleLevel],
    pub plural_rule: fn(u32) -> PluralCategory,
    pub zero: &'static str,
    pub negative: &'static str,
    pub decimal_sep: &'static str,
    pub decimal_style: DecimalStyle,
    pub separator: &'static str,
    /// Conjunction inserted by the grammar ("and", "et", "und").
    pub and_word: Option<&'static str>,
    /// Default for the caller-facing `and_conjunction` option.
    pub and_default: bool,
    /// Insert the conjunction before a closing units group < 100
    /// ("one thousand and five").
    pub final_and: bool,
    /// Spoken marker for skipped scale levels (Chinese 零).
    pub gap_word: Option<&'static str>,
}

impl LangEntry {
    #[inline]
    pub(crate) fn hundred_word(&self) -> &'static str {
        self.hundred.unwrap_or("")
    }
}
