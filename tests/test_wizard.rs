use rpawowizard::builder::Strategy;
use rpawowizard::wizard::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_wizard(strategy: Strategy) -> Wizard {
        let mut wizard = Wizard::new();
        wizard.begin().unwrap();
        wizard.select_strategy(strategy).unwrap();
        wizard
    }

    #[test]
    fn test_full_walk_through_questions() {
        let mut wizard = ready_wizard(Strategy::Moderate);
        assert_eq!(wizard.step(), Step::Questions);
        assert_eq!(wizard.current_question().unwrap().id, "name");

        wizard.submit_answer("Ahmed").unwrap();
        assert_eq!(wizard.current_question().unwrap().id, "number");

        let step = wizard.submit_answer("2023").unwrap();
        assert_eq!(step, Step::Result);
        assert!(wizard.password().starts_with("Ahmed2023@"));
    }

    #[test]
    fn test_randomized_routes_through_random_step() {
        let mut wizard = ready_wizard(Strategy::Randomized);
        assert_eq!(wizard.step(), Step::Random);
        let password = wizard.generate_random().unwrap().to_string();
        assert_eq!(password.chars().count(), 16);
        assert_eq!(wizard.step(), Step::Result);
        assert_eq!(wizard.password(), password);
    }

    #[test]
    fn test_empty_last_answer_keeps_questions_open() {
        let mut wizard = ready_wizard(Strategy::Moderate);
        wizard.submit_answer("Ahmed").unwrap();
        assert!(wizard.submit_answer("").is_err());
        assert_eq!(wizard.step(), Step::Questions);
        assert_eq!(wizard.current_question().unwrap().id, "number");
    }

    #[test]
    fn test_intermediate_answers_may_be_empty() {
        let mut wizard = ready_wizard(Strategy::Simple);
        wizard.submit_answer("").unwrap();
        wizard.submit_answer("").unwrap();
        let step = wizard.submit_answer("10/12/2020").unwrap();
        assert_eq!(step, Step::Result);
        assert_eq!(wizard.password(), "10/1");
    }

    #[test]
    fn test_robust_walk_builds_template_password() {
        let mut wizard = ready_wizard(Strategy::Robust);
        for answer in ["Ahmed", "1234", "AH", "a", "99"] {
            wizard.submit_answer(answer).unwrap();
        }
        let step = wizard.submit_answer("z").unwrap();
        assert_eq!(step, Step::Result);
        assert_eq!(wizard.password(), "Ahmed.1234AH*#Aa99Zz@2024");
    }

    #[test]
    fn test_restart_returns_to_selection() {
        let mut wizard = ready_wizard(Strategy::Randomized);
        wizard.generate_random().unwrap();
        wizard.restart().unwrap();
        assert_eq!(wizard.step(), Step::Selection);
        assert!(wizard.password().is_empty());
        assert!(wizard.answers().is_empty());
        assert_eq!(wizard.strategy(), None);
    }

    #[test]
    fn test_out_of_order_calls_are_rejected() {
        let mut wizard = Wizard::new();
        assert!(wizard.select_strategy(Strategy::Simple).is_err());
        assert!(wizard.submit_answer("x").is_err());
        assert!(wizard.generate_random().is_err());
        assert!(wizard.restart().is_err());

        wizard.begin().unwrap();
        assert!(wizard.begin().is_err());
        assert!(wizard.current_question().is_none());
    }
}
