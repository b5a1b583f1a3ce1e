use rpawowizard::randgen::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_class_coverage() {
        for _ in 0..1000 {
            let password = generate();
            assert_eq!(password.chars().count(), PASSWORD_LENGTH);
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| !c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_is_not_constant() {
        let sample: Vec<String> = (0..50).map(|_| generate()).collect();
        let first = &sample[0];
        assert!(sample.iter().any(|p| p != first));
    }

    #[test]
    fn test_generate_draws_only_from_known_classes() {
        let allowed = "abcdefghijklmnopqrstuvwxyz\
                       ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                       0123456789\
                       !@#$%^&*()_+-=[]{}|;:,.<>?";
        for _ in 0..100 {
            assert!(generate().chars().all(|c| allowed.contains(c)));
        }
    }
}
