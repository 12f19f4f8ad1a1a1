mod prop_tests {
    use crate::lang::data::all_langs;
    use crate::segment::split;
    use crate::value::{Value, parse};
    use crate::{ENG, Wordy};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn conversion_is_deterministic(n in any::<u64>()) {
            for lang in all_langs() {
                let w = Wordy::builder().lang(*lang).build().unwrap();
                match w.convert(n) {
                    Ok(first) => prop_assert_eq!(w.convert(n).unwrap(), first),
                    // only admissible failure is running past the scale table
                    Err(e) => prop_assert!(matches!(e, crate::WordyError::Compose(_))),
                }
            }
        }

        #[test]
        fn negative_is_prefix_of_positive(n in 1u64..1_000_000_000_000) {
            let w = Wordy::builder().lang(ENG).build().unwrap();
            let positive = w.convert(n).unwrap();
            let negative = w.convert(-(n as i128)).unwrap();
            prop_assert_eq!(negative, format!("minus {positive}"));
        }

        #[test]
        fn non_zero_values_render_non_empty(n in 1u64..u64::MAX) {
            for lang in all_langs() {
                let w = Wordy::builder().lang(*lang).build().unwrap();
                if let Ok(words) = w.convert(n) {
                    prop_assert!(!words.is_empty());
                }
            }
        }

        #[test]
        fn digit_strings_always_parse(s in "[1-9][0-9]{0,29}") {
            let n = parse(Value::from(s.as_str())).unwrap();
            prop_assert_eq!(n.integer.to_string(), s);
            prop_assert_eq!(n.decimals, None);
        }

        #[test]
        fn integer_leading_zeros_are_insignificant(s in "[1-9][0-9]{0,20}") {
            let padded = format!("000{s}");
            prop_assert_eq!(
                parse(Value::from(padded.as_str())).unwrap(),
                parse(Value::from(s.as_str())).unwrap()
            );
        }

        #[test]
        fn decimal_digits_survive_verbatim(s in "[0-9]{1,20}") {
            let input = format!("1.{s}");
            let n = parse(Value::from(input.as_str())).unwrap();
            prop_assert_eq!(n.decimals.as_deref(), Some(s.as_str()));
        }

        // splitting must reproduce the digit string exactly, zero padding
        // included, for every grouping pattern
        #[test]
        fn segments_reassemble_to_input(s in "[1-9][0-9]{0,18}") {
            for lang in all_langs() {
                let grouping = crate::lang::data::LANG_TABLE
                    .get(lang.code())
                    .unwrap()
                    .grouping;
                let segs = split(&s, grouping);
                let mut rebuilt = String::new();
                for (i, seg) in segs.iter().enumerate() {
                    let width = grouping.width(seg.scale) as usize;
                    if i == 0 {
                        rebuilt.push_str(&seg.value.to_string());
                    } else {
                        rebuilt.push_str(&format!("{:0width$}", seg.value));
                    }
                    prop_assert!(seg.value < grouping.bound(seg.scale));
                }
                prop_assert_eq!(&rebuilt, &s, "grouping {:?}", grouping);
            }
        }

        #[test]
        fn float_path_agrees_with_string_path(n in -999_999i32..1_000_000) {
            let w = Wordy::builder().lang(ENG).build().unwrap();
            let via_float = w.convert(f64::from(n)).unwrap();
            let via_string = w.convert(n.to_string().as_str()).unwrap();
            prop_assert_eq!(via_float, via_string);
        }
    }
}
