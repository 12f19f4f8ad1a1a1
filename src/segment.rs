//! Segment Splitter: chunks the integer part's digit string into
//! scale-indexed groups per the language's grouping pattern.

use crate::lang::Grouping;
use smallvec::SmallVec;

/// One fixed-width chunk of the integer part, annotated with its scale
/// index (0 = units group). A zero segment still occupies its slot so the
/// composer can see skipped magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub value: u32,
    pub scale: u32,
}

/// Numbers overwhelmingly fit in a handful of groups; spill to the heap
/// only past 24 digits.
pub type Segments = SmallVec<[Segment; 8]>;

/// Split a validated decimal digit string into segments, most significant
/// first. `"0"` yields a single zero segment at scale 0. Never fails.
pub fn split(digits: &str, grouping: Grouping) -> Segments {
    debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));

    let bytes = digits.as_bytes();
    let mut out = Segments::new();
    let mut end = bytes.len();
    let mut scale = 0u32;
    while end > 0 {
        let width = grouping.width(scale) as usize;
        let start = end.saturating_sub(width);
        let value = bytes[start..end]
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        out.push(Segment { value, scale });
        end = start;
        scale += 1;
    }
    out.reverse();
    out
}
