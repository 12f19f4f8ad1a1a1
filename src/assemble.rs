//! Assembler: negative marker, integer words, decimal separator word and
//! decimal words, joined per the language's separator convention.

use crate::lang::LangEntry;

pub fn assemble(
    negative: bool,
    integer_words: &str,
    decimal_words: Option<&str>,
    entry: &LangEntry,
) -> String {
    let mut out = String::new();
    if negative {
        out.push_str(entry.negative);
        out.push_str(entry.separator);
    }
    out.push_str(integer_words);
    if let Some(decimal) = decimal_words {
        out.push_str(entry.separator);
        out.push_str(entry.decimal_sep);
        out.push_str(entry.separator);
        out.push_str(decimal);
    }
    out
}
