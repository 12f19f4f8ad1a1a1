use crate::lang::{
    DecimalStyle, Grouping, Lang, LangEntry, ScaleLevel, SegmentPolicy,
    behaviour::{english_rule, french_rule, invariant_rule, slavic_rule},
};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – registers every language in a single table
/// ---------------------------------------------------------------------------
/// Each language keeps its vocabulary in its own `mod`, and this macro wires
/// the modules into the public constants, the phf lookup table and the
/// code-based resolver. Adding a language is one `mod` plus one line here.
macro_rules! define_languages {
    ($( $code:ident, $code_str:literal, $name:literal ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => [<$code:lower>]::ENTRY
                ),*
            };
        }

        /// Exact (case-insensitive) tag match; no fallback.
        pub fn from_code(code: &str) -> Option<Lang> {
            $(
                if code.eq_ignore_ascii_case($code_str) {
                    return Some($code);
                }
            )*
            None
        }

        /// Every registered language, for exhaustive sweeps in tests.
        pub fn all_langs() -> &'static [Lang] {
            const ALL: &[Lang] = &[$($code),*];
            ALL
        }
    };
}

define_languages! {
    ENG, "en", "English",
    FRA, "fr", "French",
    FRB, "fr-BE", "French (Belgium)",
    DEU, "de", "German",
    RUS, "ru", "Russian",
    ZHO, "zh", "Chinese",
    HIN, "hi", "Hindi",
}

// ---------------------------------------------------------------------------
//    English — 3-digit groups, short scale, "and" before a closing group
// ---------------------------------------------------------------------------
mod eng {
    use super::*;

    const ONES: &[&str] = &[
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
        "nineteen",
    ];

    const TENS: &[&str] = &[
        "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ];

    // Short scale up to vigintillion: segments above it are out of range.
    const SCALES: &[ScaleLevel] = &[
        ScaleLevel::invariant("thousand"),
        ScaleLevel::invariant("million"),
        ScaleLevel::invariant("billion"),
        ScaleLevel::invariant("trillion"),
        ScaleLevel::invariant("quadrillion"),
        ScaleLevel::invariant("quintillion"),
        ScaleLevel::invariant("sextillion"),
        ScaleLevel::invariant("septillion"),
        ScaleLevel::invariant("octillion"),
        ScaleLevel::invariant("nonillion"),
        ScaleLevel::invariant("decillion"),
        ScaleLevel::invariant("undecillion"),
        ScaleLevel::invariant("duodecillion"),
        ScaleLevel::invariant("tredecillion"),
        ScaleLevel::invariant("quattuordecillion"),
        ScaleLevel::invariant("quindecillion"),
        ScaleLevel::invariant("sexdecillion"),
        ScaleLevel::invariant("septendecillion"),
        ScaleLevel::invariant("octodecillion"),
        ScaleLevel::invariant("novemdecillion"),
        ScaleLevel::invariant("vigintillion"),
    ];

    pub const ENTRY: LangEntry = LangEntry {
        grouping: Grouping::Thousands,
        policy: SegmentPolicy::Western,
        ones: ONES,
        tens: TENS,
        hundreds: &[],
        small_table: &[],
        feminine_ones: &[],
        compound_one: None,
        hundred: Some("hundred"),
        omit_one_before_hundred: false,
        myriad_units: &[],
        scales: SCALES,
        plural_rule: english_rule,
        zero: "zero",
        negative: "minus",
        decimal_sep: "point",
        decimal_style: DecimalStyle::WholeNumber,
        separator: " ",
        and_word: Some("and"),
        and_default: true,
        final_and: true,
        gap_word: None,
    };
}

// ---------------------------------------------------------------------------
//    French — vigesimal 70/90, "et", plural -s on vingt/cent, long scale
// ---------------------------------------------------------------------------
mod fra {
    use super::*;

    const ONES: &[&str] = &[
        "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
        "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
        "dix-neuf",
    ];

    // Indices 7 and 9 are never read in vigesimal mode; the composed forms
    // stay in the table so the Belgian profile can share its shape.
    const TENS: &[&str] = &[
        "",
        "dix",
        "vingt",
        "trente",
        "quarante",
        "cinquante",
        "soixante",
        "soixante-dix",
        "quatre-vingt",
        "quatre-vingt-dix",
    ];

    // Long scale: mille is a numeral adjective (no "un", no agreement
    // before it), million and up are nouns that pluralize.
    const SCALES: &[ScaleLevel] = &[
        ScaleLevel::invariant("mille").omit_one().adjectival(),
        ScaleLevel::pair("million", "millions"),
        ScaleLevel::pair("milliard", "milliards"),
        ScaleLevel::pair("billion", "billions"),
        ScaleLevel::pair("billiard", "billiards"),
        ScaleLevel::pair("trillion", "trillions"),
        ScaleLevel::pair("trilliard", "trilliards"),
        ScaleLevel::pair("quadrillion", "quadrillions"),
        ScaleLevel::pair("quadrilliard", "quadrilliards"),
    ];

    pub const ENTRY: LangEntry = LangEntry {
        grouping: Grouping::Thousands,
        policy: SegmentPolicy::French { vigesimal: true },
        ones: ONES,
        tens: TENS,
        hundreds: &[],
        small_table: &[],
        feminine_ones: &[],
        compound_one: None,
        hundred: Some("cent"),
        omit_one_before_hundred: true,
        myriad_units: &[],
        scales: SCALES,
        plural_rule: french_rule,
        zero: "zéro",
        negative: "moins",
        decimal_sep: "virgule",
        decimal_style: DecimalStyle::WholeNumber,
        separator: " ",
        and_word: Some("et"),
        and_default: true,
        final_and: false,
        gap_word: None,
    };
}

// ---------------------------------------------------------------------------
//    French (Belgium) — septante/nonante, otherwise shares the French policy
// ---------------------------------------------------------------------------
mod frb {
    use super::*;

    const TENS: &[&str] = &[
        "",
        "dix",
        "vingt",
        "trente",
        "quarante",
        "cinquante",
        "soixante",
        "septante",
        "quatre-vingt",
        "nonante",
    ];

    pub const ENTRY: LangEntry = LangEntry {
        policy: SegmentPolicy::French { vigesimal: false },
        tens: TENS,
        ..fra::ENTRY
    };
}

// ---------------------------------------------------------------------------
//    German — inverted compounds, attached tausend, feminine "eine Million"
// ---------------------------------------------------------------------------
mod deu {
    use super::*;

    const ONES: &[&str] = &[
        "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
        "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
        "neunzehn",
    ];

    const TENS: &[&str] = &[
        "", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
        "neunzig",
    ];

    const SCALES: &[ScaleLevel] = &[
        ScaleLevel::invariant("tausend").attached().adjectival(),
        ScaleLevel::pair("Million", "Millionen").adjectival().one_form("eine"),
        ScaleLevel::pair("Milliarde", "Milliarden").adjectival().one_form("eine"),
        ScaleLevel::pair("Billion", "Billionen").adjectival().one_form("eine"),
        ScaleLevel::pair("Billiarde", "Billiarden").adjectival().one_form("eine"),
        ScaleLevel::pair("Trillion", "Trillionen").adjectival().one_form("eine"),
    ];

    pub const ENTRY: LangEntry = LangEntry {
        grouping: Grouping::Thousands,
        policy: SegmentPolicy::Inverted,
        ones: ONES,
        tens: TENS,
        hundreds: &[],
        small_table: &[],
        feminine_ones: &[],
        compound_one: Some("ein"),
        hundred: Some("hundert"),
        omit_one_before_hundred: false,
        myriad_units: &[],
        scales: SCALES,
        plural_rule: english_rule,
        zero: "null",
        negative: "minus",
        decimal_sep: "Komma",
        decimal_style: DecimalStyle::WholeNumber,
        separator: " ",
        and_word: Some("und"),
        and_default: true,
        final_and: false,
        gap_word: None,
    };
}

// ---------------------------------------------------------------------------
//    Russian — gendered ones, precomposed hundreds, three-form scale words
// ---------------------------------------------------------------------------
mod rus {
    use super::*;

    const ONES: &[&str] = &[
        "ноль",
        "один",
        "два",
        "три",
        "четыре",
        "пять",
        "шесть",
        "семь",
        "восемь",
        "девять",
        "десять",
        "одиннадцать",
        "двенадцать",
        "тринадцать",
        "четырнадцать",
        "пятнадцать",
        "шестнадцать",
        "семнадцать",
        "восемнадцать",
        "девятнадцать",
    ];

    const TENS: &[&str] = &[
        "",
        "десять",
        "двадцать",
        "тридцать",
        "сорок",
        "пятьдесят",
        "шестьдесят",
        "семьдесят",
        "восемьдесят",
        "девяносто",
    ];

    const HUNDREDS: &[&str] = &[
        "",
        "сто",
        "двести",
        "триста",
        "четыреста",
        "пятьсот",
        "шестьсот",
        "семьсот",
        "восемьсот",
        "девятьсот",
    ];

    const FEM_ONES: &[(u32, &str)] = &[(1, "одна"), (2, "две")];

    const SCALES: &[ScaleLevel] = &[
        ScaleLevel::forms("тысяча", "тысячи", "тысяч").feminine(),
        ScaleLevel::forms("миллион", "миллиона", "миллионов"),
        ScaleLevel::forms("миллиард", "миллиарда", "миллиардов"),
        ScaleLevel::forms("триллион", "триллиона", "триллионов"),
        ScaleLevel::forms("квадриллион", "квадриллиона", "квадриллионов"),
        ScaleLevel::forms("квинтиллион", "квинтиллиона", "квинтиллионов"),
    ];

    pub const ENTRY: LangEntry = LangEntry {
        grouping: Grouping::Thousands,
        policy: SegmentPolicy::Slavic,
        ones: ONES,
        tens: TENS,
        hundreds: HUNDREDS,
        small_table: &[],
        feminine_ones: FEM_ONES,
        compound_one: None,
        hundred: None,
        omit_one_before_hundred: false,
        myriad_units: &[],
        scales: SCALES,
        plural_rule: slavic_rule,
        zero: "ноль",
        negative: "минус",
        decimal_sep: "запятая",
        decimal_style: DecimalStyle::WholeNumber,
        separator: " ",
        and_word: None,
        and_default: false,
        final_and: false,
        gap_word: None,
    };
}

// ---------------------------------------------------------------------------
//    Chinese — myriad groups, 零 gap marker, digit-wise decimals
// ---------------------------------------------------------------------------
mod zho {
    use super::*;

    const ONES: &[&str] = &["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

    // Place words inside one 4-digit group, indexed by place.
    const UNITS: &[&str] = &["", "十", "百", "千"];

    const SCALES: &[ScaleLevel] = &[
        ScaleLevel::invariant("万"),
        ScaleLevel::invariant("亿"),
        ScaleLevel::invariant("兆"),
        ScaleLevel::invariant("京"),
    ];

    pub const ENTRY: LangEntry = LangEntry {
        grouping: Grouping::Myriads,
        policy: SegmentPolicy::Myriad,
        ones: ONES,
        tens: &[],
        hundreds: &[],
        small_table: &[],
        feminine_ones: &[],
        compound_one: None,
        hundred: None,
        omit_one_before_hundred: false,
        myriad_units: UNITS,
        scales: SCALES,
        plural_rule: invariant_rule,
        zero: "零",
        negative: "负",
        decimal_sep: "点",
        decimal_style: DecimalStyle::Digits,
        separator: "",
        and_word: None,
        and_default: false,
        final_and: false,
        gap_word: Some("零"),
    };
}

// ---------------------------------------------------------------------------
//    Hindi — lakh/crore grouping, fully irregular 0–99 table
// ---------------------------------------------------------------------------
mod hin {
    use super::*;

    #[rustfmt::skip]
    const SMALL: &[&str] = &[
        "शून्य", "एक", "दो", "तीन", "चार", "पाँच", "छह", "सात", "आठ", "नौ",
        "दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
        "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस",
        "तीस", "इकतीस", "बत्तीस", "तैंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस",
        "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चौवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
        "पचास", "इक्यावन", "बावन", "तिरपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
        "साठ", "इकसठ", "बासठ", "तिरसठ", "चौंसठ", "पैंसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर",
        "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उन्यासी",
        "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सत्तासी", "अट्ठासी", "नवासी",
        "नब्बे", "इक्यानवे", "बानवे", "तिरानवे", "चौरानवे", "पचानवे", "छियानवे", "सत्तानवे", "अट्ठानवे", "निन्यानवे",
    ];

    const SCALES: &[ScaleLevel] = &[
        ScaleLevel::invariant("हज़ार"),
        ScaleLevel::invariant("लाख"),
        ScaleLevel::invariant("करोड़"),
        ScaleLevel::invariant("अरब"),
        ScaleLevel::invariant("खरब"),
        ScaleLevel::invariant("नील"),
        ScaleLevel::invariant("पद्म"),
        ScaleLevel::invariant("शंख"),
    ];

    pub const ENTRY: LangEntry = LangEntry {
        grouping: Grouping::LakhCrore,
        policy: SegmentPolicy::Lookup,
        ones: &[],
        tens: &[],
        hundreds: &[],
        small_table: SMALL,
        feminine_ones: &[],
        compound_one: None,
        hundred: Some("सौ"),
        omit_one_before_hundred: false,
        myriad_units: &[],
        scales: SCALES,
        plural_rule: invariant_rule,
        zero: "शून्य",
        negative: "माइनस",
        decimal_sep: "दशमलव",
        decimal_style: DecimalStyle::Digits,
        separator: " ",
        and_word: None,
        and_default: false,
        final_and: false,
        gap_word: None,
    };
}
