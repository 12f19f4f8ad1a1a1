pub mod assemble;
pub mod compose;
pub mod context;
pub mod decimal;
pub mod lang;
pub mod render;
pub mod segment;
pub mod value;
pub mod wordy;

pub use context::Options;
pub use lang::data::{DEU, ENG, FRA, FRB, HIN, RUS, ZHO};
pub use lang::{Gender, Lang, LangError};
pub use value::{NumericValue, ParseError, Value};
pub use wordy::{Wordy, WordyBuilder, WordyError, convert};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
