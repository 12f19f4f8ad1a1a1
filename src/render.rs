//! Segment Renderer: one bounded-magnitude group to words, dispatched over
//! the language's [`SegmentPolicy`]. Pure function of (value, grammar
//! context); returns an empty string for 0 so the composer can treat a zero
//! segment as "render nothing, but keep the scale slot".

use crate::lang::{Gender, LangEntry, SegmentPolicy};

/// Grammatical context for one segment. Built by the composer, consumed
/// here; callers never construct it for out-of-bound values.
#[derive(Debug, Clone, Copy)]
pub struct GrammarCtx {
    pub gender: Gender,
    /// This segment multiplies an adjectival scale word, which suppresses
    /// plural agreement ("quatre-vingt mille") and standalone one-forms
    /// ("eintausend").
    pub multiplier: bool,
    /// This segment opens the spoken number (Chinese 十二 vs 一十二).
    pub head: bool,
    pub and_enabled: bool,
}

pub fn render_segment(value: u32, entry: &LangEntry, g: GrammarCtx) -> String {
    if value == 0 {
        return String::new();
    }
    match entry.policy {
        SegmentPolicy::Western => western(value, entry, g),
        SegmentPolicy::French { vigesimal } => french(value, entry, g, vigesimal),
        SegmentPolicy::Inverted => inverted(value, entry, g),
        SegmentPolicy::Slavic => slavic(value, entry, g),
        SegmentPolicy::Myriad => myriad(value, entry, g),
        SegmentPolicy::Lookup => lookup(value, entry),
    }
}

/// Gender-aware ones lookup; irregular feminine forms take precedence.
fn one_word(entry: &LangEntry, n: u32, g: GrammarCtx) -> &'static str {
    if g.gender == Gender::Feminine
        && let Some((_, word)) = entry.feminine_ones.iter().find(|(v, _)| *v == n)
    {
        return word;
    }
    entry.ones[n as usize]
}

// ---------------------------------------------------------------------------
//  Western: "three hundred and fifty-six"
// ---------------------------------------------------------------------------
fn western(value: u32, entry: &LangEntry, g: GrammarCtx) -> String {
    let h = value / 100;
    let rem = value % 100;
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if h > 0 {
        if h == 1 && entry.omit_one_before_hundred {
            parts.push(entry.hundred_word().to_string());
        } else {
            parts.push(format!("{} {}", entry.ones[h as usize], entry.hundred_word()));
        }
        if rem > 0
            && g.and_enabled
            && let Some(and) = entry.and_word
        {
            parts.push(and.to_string());
        }
    }
    if rem > 0 {
        parts.push(below_hundred(rem, entry, g));
    }
    parts.join(entry.separator)
}

/// Teens from the ones table, otherwise hyphenated tens-ones.
fn below_hundred(n: u32, entry: &LangEntry, g: GrammarCtx) -> String {
    if n < 20 {
        return one_word(entry, n, g).to_string();
    }
    let tens = entry.tens[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        o => format!("{tens}-{}", one_word(entry, o, g)),
    }
}

// ---------------------------------------------------------------------------
//  French: cent/et/-s, optionally the vigesimal 70s and 90s
// ---------------------------------------------------------------------------
fn french(value: u32, entry: &LangEntry, g: GrammarCtx, vigesimal: bool) -> String {
    let h = value / 100;
    let rem = value % 100;
    let mut parts: Vec<String> = Vec::with_capacity(2);

    if h > 0 {
        let mut word = String::new();
        if h > 1 {
            word.push_str(entry.ones[h as usize]);
            word.push(' ');
        }
        word.push_str(entry.hundred_word());
        // "deux cents", but invariable with a remainder or before an
        // adjectival scale word: "deux cent un", "deux cent mille"
        if h > 1 && rem == 0 && !g.multiplier {
            word.push('s');
        }
        parts.push(word);
    }
    if rem > 0 {
        parts.push(french_below_hundred(rem, entry, g, vigesimal));
    }
    parts.join(entry.separator)
}

fn french_below_hundred(n: u32, entry: &LangEntry, g: GrammarCtx, vigesimal: bool) -> String {
    if n < 20 {
        return entry.ones[n as usize].to_string();
    }
    let t = n / 10;
    let o = n % 10;

    // 70-79 and 90-99 lean on the lower score: soixante-douze,
    // quatre-vingt-onze; "et" only at soixante et onze.
    if vigesimal && (t == 7 || t == 9) {
        let (base, floor) = if t == 7 {
            (entry.tens[6], 60)
        } else {
            (entry.tens[8], 80)
        };
        let teen = entry.ones[(n - floor) as usize];
        if n == 71
            && let Some(et) = entry.and_word
        {
            return format!("{base} {et} {teen}");
        }
        return format!("{base}-{teen}");
    }

    let tens = entry.tens[t as usize];
    if o == 0 {
        // quatre-vingts takes its -s only when nothing follows
        if t == 8 && !g.multiplier {
            return format!("{tens}s");
        }
        return tens.to_string();
    }
    if o == 1
        && t != 8
        && let Some(et) = entry.and_word
    {
        return format!("{tens} {et} {}", entry.ones[1]);
    }
    format!("{tens}-{}", entry.ones[o as usize])
}

// ---------------------------------------------------------------------------
//  Inverted: "einhundertfünfundvierzig", ones before tens, no separator
// ---------------------------------------------------------------------------
fn inverted(value: u32, entry: &LangEntry, g: GrammarCtx) -> String {
    let compound_one = entry.compound_one.unwrap_or(entry.ones[1]);
    let und = entry.and_word.unwrap_or("");
    let h = value / 100;
    let rem = value % 100;
    let mut out = String::new();

    if h > 0 {
        out.push_str(if h == 1 {
            compound_one
        } else {
            entry.ones[h as usize]
        });
        out.push_str(entry.hundred_word());
    }
    if rem == 0 {
        return out;
    }
    if rem == 1 {
        // "eins" closes a word, "ein" multiplies: einhunderteins, eintausend
        out.push_str(if g.multiplier { compound_one } else { entry.ones[1] });
    } else if rem < 20 {
        out.push_str(entry.ones[rem as usize]);
    } else {
        let o = rem % 10;
        if o > 0 {
            out.push_str(if o == 1 {
                compound_one
            } else {
                entry.ones[o as usize]
            });
            out.push_str(und);
        }
        out.push_str(entry.tens[(rem / 10) as usize]);
    }
    out
}

// ---------------------------------------------------------------------------
//  Slavic: precomposed hundreds, gendered ones
// ---------------------------------------------------------------------------
fn slavic(value: u32, entry: &LangEntry, g: GrammarCtx) -> String {
    let h = value / 100;
    let rem = value % 100;
    let mut parts: Vec<&'static str> = Vec::with_capacity(3);

    if h > 0 {
        parts.push(entry.hundreds[h as usize]);
    }
    if rem > 0 {
        if rem < 20 {
            parts.push(one_word(entry, rem, g));
        } else {
            parts.push(entry.tens[(rem / 10) as usize]);
            let o = rem % 10;
            if o > 0 {
                parts.push(one_word(entry, o, g));
            }
        }
    }
    parts.join(entry.separator)
}

// ---------------------------------------------------------------------------
//  Myriad: digit + place word within a 4-digit group, one 零 per gap
// ---------------------------------------------------------------------------
fn myriad(value: u32, entry: &LangEntry, g: GrammarCtx) -> String {
    let digits = [value / 1000, value / 100 % 10, value / 10 % 10, value % 10];
    let mut out = String::new();
    let mut started = false;
    let mut gap = false;

    for (i, &d) in digits.iter().enumerate() {
        let place = 3 - i;
        if d == 0 {
            gap = started;
            continue;
        }
        if gap {
            out.push_str(entry.zero);
            gap = false;
        }
        // 十二 not 一十二, but only at the head of the whole number
        let bare_ten = d == 1 && place == 1 && !started && g.head;
        if !bare_ten {
            out.push_str(entry.ones[d as usize]);
        }
        out.push_str(entry.myriad_units[place]);
        started = true;
    }
    out
}

// ---------------------------------------------------------------------------
//  Lookup: irregular 0-99 table, hundred word for the units group
// ---------------------------------------------------------------------------
fn lookup(value: u32, entry: &LangEntry) -> String {
    if value < 100 {
        return entry.small_table[value as usize].to_string();
    }
    let h = value / 100;
    let rem = value % 100;
    let mut out = format!("{} {}", entry.small_table[h as usize], entry.hundred_word());
    if rem > 0 {
        out.push_str(entry.separator);
        out.push_str(entry.small_table[rem as usize]);
    }
    out
}
