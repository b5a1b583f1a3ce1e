use rpawowizard::builder::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simple_slices_and_concatenates() {
        let result = build_with_year(
            Strategy::Simple,
            &answers(&["15/05/1990", "0123456789", "10/12/2020"]),
            2024,
        );
        assert_eq!(result, "15678910/1");
    }

    #[test]
    fn test_simple_short_answers_take_what_is_available() {
        let result = build_with_year(Strategy::Simple, &answers(&["7", "89", "ab"]), 2024);
        assert_eq!(result, "789ab");
    }

    #[test]
    fn test_simple_all_empty_answers_build_an_empty_password() {
        let result = build_with_year(Strategy::Simple, &answers(&["", "", ""]), 2024);
        assert_eq!(result, "");
    }

    #[test]
    fn test_moderate_appends_year_suffix() {
        let result = build_with_year(Strategy::Moderate, &answers(&["Ahmed", "2023"]), 2024);
        assert_eq!(result, "Ahmed2023@24");
    }

    #[test]
    fn test_moderate_pads_single_digit_year() {
        let result = build_with_year(Strategy::Moderate, &answers(&["Ahmed", "2023"]), 2009);
        assert_eq!(result, "Ahmed2023@09");
    }

    #[test]
    fn test_robust_fixed_template() {
        let result = build_with_year(
            Strategy::Robust,
            &answers(&["Ahmed", "1234", "AH", "a", "99", "z"]),
            2024,
        );
        assert_eq!(result, "Ahmed.1234AH*#Aa99Zz@2024");
    }

    #[test]
    fn test_robust_year_literal_ignores_injected_year() {
        let result = build_with_year(
            Strategy::Robust,
            &answers(&["Ahmed", "1234", "AH", "a", "99", "z"]),
            2031,
        );
        assert!(result.ends_with("@2024"));
    }

    #[test]
    fn test_robust_case_folds_whole_answers() {
        let result = build_with_year(
            Strategy::Robust,
            &answers(&["Mona", "55", "MO", "ab", "77", "cd"]),
            2024,
        );
        assert_eq!(result, "Mona.55MO*#ABab77CDcd@2024");
    }

    #[test]
    fn test_insufficient_answers_return_empty() {
        assert_eq!(
            build_with_year(Strategy::Simple, &answers(&["a", "b"]), 2024),
            ""
        );
        assert_eq!(build_with_year(Strategy::Moderate, &answers(&["a"]), 2024), "");
        assert_eq!(
            build_with_year(Strategy::Robust, &answers(&["a", "b", "c", "d", "e"]), 2024),
            ""
        );
        assert_eq!(build_with_year(Strategy::Simple, &answers(&[]), 2024), "");
    }

    #[test]
    fn test_build_is_deterministic_for_fixed_year() {
        let set = answers(&["Ahmed", "2023"]);
        let first = build_with_year(Strategy::Moderate, &set, 2024);
        let second = build_with_year(Strategy::Moderate, &set, 2024);
        assert_eq!(first, second);
    }

    #[test]
    fn test_randomized_ignores_answers() {
        let result = build_with_year(Strategy::Randomized, &answers(&["ignored"]), 2024);
        assert_eq!(result.chars().count(), 16);
        assert!(!result.contains("ignored"));
    }
}
