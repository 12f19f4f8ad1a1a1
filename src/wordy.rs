use thiserror::Error;

use crate::{
    assemble::assemble,
    compose::{ComposeError, compose},
    context::{Context, Options},
    decimal::render_decimal,
    lang::{DEFAULT_LANG, Gender, Lang, LangError},
    segment,
    value::{self, NumericValue, ParseError, Value},
};
use num_bigint::BigUint;

#[derive(Debug, Error)]
pub enum WordyError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("language error: {0}")]
    Lang(#[from] LangError),
    #[error("compose error: {0}")]
    Compose(#[from] ComposeError),
}

/// A configured converter: one language, one set of options, reusable and
/// safe to share across threads.
pub struct Wordy {
    ctx: Context,
}

impl Wordy {
    pub fn builder() -> WordyBuilder {
        WordyBuilder::default()
    }

    #[inline]
    pub fn lang(&self) -> Lang {
        self.ctx.lang
    }

    /// Spell a value out in words. Accepts native integers, floats,
    /// big integers and numeric strings; strings and big integers are the
    /// exact path for values past float precision.
    pub fn convert(&self, value: impl Into<Value>) -> Result<String, WordyError> {
        let num = value::parse(value.into())?;
        self.spell(&num)
    }

    /// Walk an already-parsed value through split → render → compose →
    /// (decimal) → assemble.
    pub fn spell(&self, num: &NumericValue) -> Result<String, WordyError> {
        let entry = &self.ctx.entry;

        let integer_words = if num.integer == BigUint::from(0u8) {
            entry.zero.to_string()
        } else {
            let digits = num.integer.to_string();
            let segments = segment::split(&digits, entry.grouping);
            compose(&segments, &self.ctx)?
        };

        let decimal_words = match &num.decimals {
            Some(d) => Some(render_decimal(d, &self.ctx)?),
            None => None,
        };

        // sign is ignored when the whole value is zero ("-0", "-0.00")
        let negative = num.negative && !num.is_zero();
        Ok(assemble(
            negative,
            &integer_words,
            decimal_words.as_deref(),
            entry,
        ))
    }
}

pub struct WordyBuilder {
    lang: Lang,
    opts: Options,
}

impl Default for WordyBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            opts: Options::default(),
        }
    }
}

impl WordyBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.opts.gender = gender;
        self
    }

    pub fn and_conjunction(mut self, enabled: bool) -> Self {
        self.opts.and_conjunction = Some(enabled);
        self
    }

    /// Resolve and validate the language profile; configuration bugs in a
    /// profile surface here rather than at conversion time.
    pub fn build(self) -> Result<Wordy, WordyError> {
        let ctx = Context::new(self.lang, self.opts)?;
        Ok(Wordy { ctx })
    }
}

/// One-shot entry point: resolve a locale tag (with base-language fallback)
/// and convert with the language's default options.
pub fn convert(tag: &str, value: impl Into<Value>) -> Result<String, WordyError> {
    let lang = Lang::resolve(tag)?;
    Wordy::builder().lang(lang).build()?.convert(value)
}
