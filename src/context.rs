// src/context.rs
// The per-conversion configuration snapshot: language rules plus the
// caller's options, resolved and validated once, Copy, read-only after.

use crate::lang::{DEFAULT_LANG, Gender, Lang, LangEntry, LangError, data::LANG_TABLE};

/// Caller-supplied knobs layered over a language's defaults. The struct is
/// closed, so unrecognized options cannot be expressed; options a language
/// has no use for are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Gender of the final (units) group where the language has the axis;
    /// ignored elsewhere. Scale multipliers keep their own gender.
    pub gender: Gender,
    /// Override the language's "and"-conjunction default (English only);
    /// `None` keeps the language default. Grammatically mandatory joiners
    /// (French "et", German "und") are unaffected.
    pub and_conjunction: Option<bool>,
}

/// Runtime context passed through the conversion pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub lang: Lang,
    pub entry: LangEntry,
    pub opts: Options,
}

impl Default for Context {
    fn default() -> Self {
        // the default language ships with the crate and validates
        Self::new(DEFAULT_LANG, Options::default())
            .unwrap_or_else(|_| unreachable!("default language profile must validate"))
    }
}

impl Context {
    /// Look up and validate the language's profile. A table the grammar
    /// references but did not populate fails loudly here, not mid-conversion.
    pub fn new(lang: Lang, opts: Options) -> Result<Self, LangError> {
        let entry = LANG_TABLE
            .get(lang.code())
            .copied()
            .ok_or_else(|| LangError::UnknownLanguage(lang.code().to_string()))?;
        entry
            .validate()
            .map_err(|detail| LangError::Configuration {
                lang: lang.code(),
                detail,
            })?;
        Ok(Self { lang, entry, opts })
    }

    #[inline]
    pub fn and_enabled(&self) -> bool {
        self.opts.and_conjunction.unwrap_or(self.entry.and_default)
    }
}
