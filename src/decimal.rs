//! Decimal Renderer: the fractional digit string to words, either digit by
//! digit or as leading zeros plus a whole-number reading of the rest. The
//! policy is a static property of the language, not a per-call option.

use crate::{
    compose::{ComposeError, compose},
    context::Context,
    lang::{DecimalStyle, LangEntry},
    segment::split,
};

pub fn render_decimal(digits: &str, ctx: &Context) -> Result<String, ComposeError> {
    let entry = &ctx.entry;
    match entry.decimal_style {
        DecimalStyle::Digits => {
            let words: Vec<&str> = digits.bytes().map(|b| digit_word(entry, b)).collect();
            Ok(words.join(entry.separator))
        }
        DecimalStyle::WholeNumber => {
            let stripped = digits.trim_start_matches('0');
            let mut parts: Vec<String> = Vec::new();
            // each skipped leading zero is spoken
            for _ in 0..digits.len() - stripped.len() {
                parts.push(entry.zero.to_string());
            }
            if !stripped.is_empty() {
                let segments = split(stripped, entry.grouping);
                parts.push(compose(&segments, ctx)?);
            }
            Ok(parts.join(entry.separator))
        }
    }
}

fn digit_word(entry: &LangEntry, b: u8) -> &'static str {
    let d = usize::from(b - b'0');
    if d == 0 {
        entry.zero
    } else if !entry.small_table.is_empty() {
        entry.small_table[d]
    } else {
        entry.ones[d]
    }
}
