use application::{
    ApplicationForm, Field,
    text::{capitalize_first, review_label},
};
use proptest::prelude::*;

fn answer_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("yes".to_string()),
        Just("no".to_string()),
        Just("cash".to_string()),
        Just("bank transfer".to_string()),
        "[a-zA-Z][a-zA-Z ]{0,16}",
    ]
}

proptest! {
    #[test]
    fn capitalization_ignores_input_case(answer in answer_strategy()) {
        let lower = capitalize_first(&answer.to_lowercase());
        let upper_first = capitalize_first(&answer);

        prop_assert!(lower.chars().next().unwrap().is_uppercase());
        prop_assert_eq!(lower.chars().next(), upper_first.chars().next());
        prop_assert_eq!(&lower[1..], &answer.to_lowercase()[1..]);
    }

    #[test]
    fn review_labels_never_start_with_space(key in "[a-z][a-zA-Z]{0,20}") {
        let label = review_label(&key);

        prop_assert!(!label.starts_with(' '));
        prop_assert!(label.chars().next().unwrap().is_uppercase());
        prop_assert_eq!(label.replace(' ', "").to_lowercase(), key.to_lowercase());
    }

    #[test]
    fn snapshots_only_change_the_touched_key(name in "[A-Za-z ]{1,24}", phone in "[0-9-]{1,12}") {
        let base = ApplicationForm::new().with_field(Field::FullName, name.clone());
        let next = base.with_field(Field::PhoneNumber, phone.clone());

        prop_assert_eq!(base.len(), 1);
        prop_assert_eq!(next.raw("fullName"), Some(name.as_str()));
        prop_assert_eq!(next.raw("phoneNumber"), Some(phone.as_str()));
    }
}
