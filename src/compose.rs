//! Scale Composer: walks the segments most-significant first, renders each
//! non-zero group, attaches the pluralized scale word, and applies the
//! omission, zero-insertion and conjunction rules of the language.

use thiserror::Error;

use crate::{
    context::Context,
    lang::{Gender, ScaleLevel},
    render::{GrammarCtx, render_segment},
    segment::Segment,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("scale index {needed} exceeds the {available} scale words of `{lang}`")]
    OutOfRange {
        needed: u32,
        available: usize,
        lang: &'static str,
    },
}

/// Deterministic and pure: identical (segments, language, options) always
/// yield identical output. Zero segments render nothing but still drive the
/// gap detection.
pub fn compose(segments: &[Segment], ctx: &Context) -> Result<String, ComposeError> {
    let entry = &ctx.entry;

    let top = segments.first().map_or(0, |s| s.scale);
    if top as usize > entry.scales.len() {
        return Err(ComposeError::OutOfRange {
            needed: top,
            available: entry.scales.len(),
            lang: ctx.lang.code(),
        });
    }

    let mut out = String::new();
    let mut emitted = false;
    let mut prev_attached = false;
    let mut gap_pending = false;

    for seg in segments {
        if seg.value == 0 {
            gap_pending = gap_pending || emitted;
            continue;
        }
        debug_assert!(seg.value < entry.grouping.bound(seg.scale));

        let level: Option<&ScaleLevel> = match seg.scale {
            0 => None,
            s => Some(&entry.scales[s as usize - 1]),
        };

        let g = GrammarCtx {
            // multiplier gender is the scale word's own, not the caller's
            gender: match level {
                Some(l) if l.feminine => Gender::Feminine,
                Some(_) => Gender::Masculine,
                None => ctx.opts.gender,
            },
            multiplier: level.is_some_and(|l| l.adjectival),
            head: !emitted,
            and_enabled: ctx.and_enabled(),
        };

        let mut words = match level {
            Some(l) if seg.value == 1 && l.omit_one => String::new(),
            Some(l) if seg.value == 1 && l.one_form.is_some() => {
                l.one_form.unwrap_or_default().to_string()
            }
            _ => render_segment(seg.value, entry, g),
        };

        if let Some(l) = level {
            let form = l.select((entry.plural_rule)(seg.value));
            if words.is_empty() {
                words.push_str(form);
            } else {
                if !l.attached {
                    words.push_str(entry.separator);
                }
                words.push_str(form);
            }
        }

        if emitted {
            out.push_str(if prev_attached { "" } else { entry.separator });
        }

        // A 零-style gap marker covers skipped scale levels and a short
        // lower group alike; the digit-position delta, not adjacency,
        // decides (100000001 → 一亿零一).
        if emitted
            && let Some(gap) = entry.gap_word
        {
            let short_group = seg.value < entry.grouping.bound(seg.scale) / 10;
            if gap_pending || short_group {
                out.push_str(gap);
            }
        }

        // "one thousand and five": conjunction before a closing units
        // group below the hundred boundary
        if emitted
            && entry.final_and
            && seg.scale == 0
            && seg.value < 100
            && g.and_enabled
            && let Some(and) = entry.and_word
        {
            out.push_str(and);
            out.push_str(entry.separator);
        }

        out.push_str(&words);
        prev_attached = level.is_some_and(|l| l.attached);
        emitted = true;
        gap_pending = false;
    }

    Ok(out)
}
