#[cfg(test)]
mod unit_tests {
    use crate::lang::behaviour::{english_rule, slavic_rule};
    use crate::lang::data::{LANG_TABLE, all_langs};
    use crate::lang::{Gender, Grouping, Lang, LangError, PluralCategory};
    use crate::render::{GrammarCtx, render_segment};
    use crate::segment::{Segment, split};
    use crate::value::{NumericValue, ParseError, Value, parse};
    use crate::{DEU, ENG, FRA, FRB, HIN, RUS, ZHO};
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn parse_plain_integer() {
        let n = parse(Value::from(123)).unwrap();
        assert!(!n.negative);
        assert_eq!(n.integer, BigUint::from(123u32));
        assert_eq!(n.decimals, None);
    }

    #[test]
    fn parse_string_trims_and_keeps_decimal_zeros() {
        let n = parse(Value::from(" -12.60 ")).unwrap();
        assert!(n.negative);
        assert_eq!(n.integer, BigUint::from(12u32));
        assert_eq!(n.decimals.as_deref(), Some("60"));
    }

    #[test]
    fn parse_strips_integer_leading_zeros() {
        let n = parse(Value::from("007")).unwrap();
        assert_eq!(n.integer, BigUint::from(7u32));
        let n = parse(Value::from("0.05")).unwrap();
        assert_eq!(n.integer, BigUint::from(0u32));
        assert_eq!(n.decimals.as_deref(), Some("05"));
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        for s in ["", "abc", "12.3.4", ".", ".5", "5.", "--5", "1 2", "1e5"] {
            assert!(
                matches!(parse(Value::from(s)), Err(ParseError::InvalidNumberFormat(_))),
                "expected rejection of {s:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_non_finite_floats() {
        assert!(matches!(
            parse(Value::from(f64::NAN)),
            Err(ParseError::InvalidNumberFormat(_))
        ));
        assert!(matches!(
            parse(Value::from(f64::INFINITY)),
            Err(ParseError::UnsupportedInput(_))
        ));
    }

    #[test]
    fn parse_float_uses_shortest_decimal_form() {
        let n = parse(Value::from(-12.6)).unwrap();
        assert!(n.negative);
        assert_eq!(n.integer, BigUint::from(12u32));
        assert_eq!(n.decimals.as_deref(), Some("6"));
    }

    #[test]
    fn parse_big_integers_exactly() {
        let n = parse(Value::from(u128::MAX)).unwrap();
        assert_eq!(n.integer.to_string(), u128::MAX.to_string());
        let n = parse(Value::from(BigInt::from(-5))).unwrap();
        assert!(n.negative);
        assert_eq!(n.integer, BigUint::from(5u32));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert!(parse(Value::from(-0.0)).unwrap().is_zero());
        assert!(parse(Value::from("-0.00")).unwrap().is_zero());
        assert!(!parse(Value::from("-0.05")).unwrap().is_zero());
        let n = NumericValue {
            negative: true,
            integer: BigUint::from(0u8),
            decimals: None,
        };
        assert!(n.is_zero());
    }

    #[test]
    fn split_western_groups() {
        let segs = split("1234567", Grouping::Thousands);
        assert_eq!(
            segs.as_slice(),
            &[
                Segment { value: 1, scale: 2 },
                Segment { value: 234, scale: 1 },
                Segment { value: 567, scale: 0 },
            ]
        );
    }

    #[test]
    fn split_myriad_groups() {
        let segs = split("12345", Grouping::Myriads);
        assert_eq!(
            segs.as_slice(),
            &[
                Segment { value: 1, scale: 1 },
                Segment { value: 2345, scale: 0 },
            ]
        );
    }

    #[test]
    fn split_lakh_crore_groups() {
        let segs = split("1234567", Grouping::LakhCrore);
        assert_eq!(
            segs.as_slice(),
            &[
                Segment { value: 12, scale: 2 },
                Segment { value: 34, scale: 1 },
                Segment { value: 567, scale: 0 },
            ]
        );
    }

    #[test]
    fn split_zero_keeps_its_slot() {
        let segs = split("0", Grouping::Thousands);
        assert_eq!(segs.as_slice(), &[Segment { value: 0, scale: 0 }]);
    }

    #[test]
    fn slavic_plural_form_classes() {
        use PluralCategory::*;
        let expected = [
            (1, One),
            (2, Few),
            (4, Few),
            (5, Many),
            (11, Many),
            (14, Many),
            (21, One),
            (22, Few),
            (25, Many),
            (100, Many),
            (101, One),
            (111, Many),
        ];
        for (n, cat) in expected {
            assert_eq!(slavic_rule(n), cat, "count {n}");
        }
    }

    #[test]
    fn english_plural_form_classes() {
        assert_eq!(english_rule(1), PluralCategory::One);
        assert_eq!(english_rule(2), PluralCategory::Many);
    }

    #[test]
    fn tag_resolution_with_fallback() {
        assert_eq!(Lang::resolve("fr-BE").unwrap(), FRB);
        assert_eq!(Lang::resolve("fr-CA").unwrap(), FRA);
        assert_eq!(Lang::resolve("FR").unwrap(), FRA);
        assert_eq!(Lang::resolve("zh_CN").unwrap(), ZHO);
        assert!(matches!(
            Lang::resolve("xx"),
            Err(LangError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn every_registered_profile_validates() {
        for lang in all_langs() {
            let entry = LANG_TABLE.get(lang.code()).unwrap();
            entry.validate().unwrap_or_else(|e| panic!("{}: {e}", lang.code()));
        }
    }

    #[test]
    fn gutted_profile_fails_validation() {
        let mut entry = LANG_TABLE.get(ENG.code()).copied().unwrap();
        entry.scales = &[];
        assert!(entry.validate().is_err());

        let mut entry = LANG_TABLE.get(RUS.code()).copied().unwrap();
        entry.hundreds = &[];
        assert!(entry.validate().is_err());
    }

    // Fuzz the declared segment bound for every language: no panic, no
    // empty rendering for a non-zero value, no out-of-table index.
    #[test]
    fn renderer_covers_full_segment_bound() {
        for lang in all_langs() {
            let entry = LANG_TABLE.get(lang.code()).unwrap();
            for gender in [Gender::Masculine, Gender::Feminine] {
                let g = GrammarCtx {
                    gender,
                    multiplier: false,
                    head: true,
                    and_enabled: true,
                };
                for value in 1..entry.grouping.bound(0) {
                    let words = render_segment(value, entry, g);
                    assert!(!words.is_empty(), "{} rendered {value} empty", lang.code());
                }
            }
        }
    }

    #[test]
    fn renderer_returns_empty_for_zero() {
        for lang in all_langs() {
            let entry = LANG_TABLE.get(lang.code()).unwrap();
            let g = GrammarCtx {
                gender: Gender::Masculine,
                multiplier: false,
                head: true,
                and_enabled: true,
            };
            assert_eq!(render_segment(0, entry, g), "");
        }
    }

    #[test]
    fn builder_rejects_nothing_for_shipped_langs() {
        for lang in [ENG, FRA, FRB, DEU, RUS, ZHO, HIN] {
            assert!(crate::Wordy::builder().lang(lang).build().is_ok());
        }
    }
}
