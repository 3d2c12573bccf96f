use platescan::{find_all_patterns, find_region_plates, PatternKind, REGION_CODES};
use proptest::prelude::*;

// Small alphabet so plate, date and IP shapes turn up often.
const TEXT: &str = "[ВКРАОвкрBKPA0-9. ]{0,80}";

proptest! {
    #[test]
    fn plates_have_plate_shape(text in TEXT) {
        for plate in find_region_plates(&text) {
            let chars: Vec<char> = plate.chars().collect();
            prop_assert_eq!(chars.len(), 8);
            let prefix: String = chars[..2].iter().collect();
            prop_assert!(REGION_CODES.contains(&prefix.as_str()));
            prop_assert!(chars[2..6].iter().all(|c| c.is_ascii_digit()));
            prop_assert_eq!(plate.to_uppercase(), plate.clone());
        }
    }

    #[test]
    fn plate_count_ignores_limit(text in TEXT, limit in 0usize..5) {
        let plates = find_region_plates(&text);
        let report = find_all_patterns(&text, limit);
        if text.is_empty() {
            prop_assert!(report.is_empty());
        } else {
            let result = report.by_kind(PatternKind::Plate).unwrap();
            prop_assert_eq!(result.count, plates.len());
            prop_assert_eq!(result.examples.len(), limit.min(result.count));
            prop_assert_eq!(&result.examples[..], &plates[..result.examples.len()]);
        }
    }

    #[test]
    fn examples_never_exceed_limit(text in TEXT, limit in 0usize..5) {
        for entry in &find_all_patterns(&text, limit) {
            prop_assert!(entry.error.is_none());
            prop_assert_eq!(entry.result.examples.len(), limit.min(entry.result.count));
        }
    }

    #[test]
    fn repeated_calls_agree(text in TEXT, limit in 0usize..5) {
        prop_assert_eq!(find_region_plates(&text), find_region_plates(&text));
        prop_assert_eq!(find_all_patterns(&text, limit), find_all_patterns(&text, limit));
    }
}
