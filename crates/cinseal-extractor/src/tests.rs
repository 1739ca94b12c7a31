//! Behavioural tests for the IdentifierExtractor

#[cfg(test)]
mod tests {
    use crate::{extract, ExtractionResult, IdentifierExtractor};
    use proptest::prelude::*;

    fn found(text: &str) -> Option<String> {
        match extract(text) {
            ExtractionResult::Found(cin) => Some(cin.as_str().to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_single_letter_shape_found() {
        assert_eq!(found("Identifier: A123456").as_deref(), Some("A123456"));
    }

    #[test]
    fn test_double_letter_shape_found() {
        assert_eq!(found("CIN AB12345 (copy)").as_deref(), Some("AB12345"));
    }

    #[test]
    fn test_empty_text_not_found() {
        assert_eq!(extract(""), ExtractionResult::NotFound);
    }

    #[test]
    fn test_lowercase_and_mixed_case_not_matched() {
        assert_eq!(extract("a123456"), ExtractionResult::NotFound);
        assert_eq!(extract("ab12345"), ExtractionResult::NotFound);
        assert_eq!(extract("Ab12345"), ExtractionResult::NotFound);
    }

    #[test]
    fn test_five_digits_after_single_letter_not_matched() {
        assert_eq!(extract("ref A12345 end"), ExtractionResult::NotFound);
    }

    #[test]
    fn test_two_matches_are_ambiguous() {
        assert_eq!(
            extract("Holder AB12345, co-holder C654321"),
            ExtractionResult::Ambiguous(2)
        );
    }

    #[test]
    fn test_same_code_twice_is_ambiguous() {
        assert_eq!(
            extract("A123456 ... see A123456"),
            ExtractionResult::Ambiguous(2)
        );
    }

    #[test]
    fn test_adjacent_codes_counted_separately() {
        assert_eq!(extract("A123456B234567"), ExtractionResult::Ambiguous(2));
    }

    #[test]
    fn test_matches_inside_longer_runs() {
        // Matching is unanchored: shapes embedded in longer tokens still count
        assert_eq!(found("xA123456").as_deref(), Some("A123456"));
        assert_eq!(found("A12345678").as_deref(), Some("A123456"));
        assert_eq!(found("ABC12345").as_deref(), Some("BC12345"));
        assert_eq!(found("AB123456").as_deref(), Some("AB12345"));
    }

    #[test]
    fn test_multiline_text() {
        let text = "Page 1\n\nName: Jane Doe\nCIN:\nZK98765\n\nPage 2\nno code here";
        assert_eq!(found(text).as_deref(), Some("ZK98765"));
    }

    #[test]
    fn test_extractor_instance_matches_free_function() {
        let extractor = IdentifierExtractor::default();
        let text = "ID A000001";
        assert_eq!(extractor.extract(text), extract(text));
    }

    fn cin_strategy() -> impl Strategy<Value = String> {
        prop_oneof!["[A-Z][0-9]{6}", "[A-Z]{2}[0-9]{5}"]
    }

    proptest! {
        #[test]
        fn prop_exactly_one_match_is_found(
            prefix in "[a-z ]{0,20}",
            cin in cin_strategy(),
            suffix in "[a-z ]{0,20}",
        ) {
            let text = format!("{} {} {}", prefix, cin, suffix);
            prop_assert_eq!(found(&text), Some(cin));
        }

        #[test]
        fn prop_no_uppercase_means_not_found(text in "[a-z0-9 \n]{0,80}") {
            prop_assert_eq!(extract(&text), ExtractionResult::NotFound);
        }

        #[test]
        fn prop_multiple_matches_report_exact_count(
            cins in prop::collection::vec(cin_strategy(), 2..6),
            filler in "[a-z]{0,8}",
        ) {
            let text = cins.join(&format!(" {} ", filler));
            prop_assert_eq!(extract(&text), ExtractionResult::Ambiguous(cins.len()));
        }
    }
}
