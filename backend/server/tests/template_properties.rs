use application::{ApplicationForm, Field, text::NOT_PROVIDED};
use proptest::prelude::*;
use server::template::{render, unmatched_tokens};

const EMAIL_TEMPLATE: &str = include_str!("../../templates/email.html");

fn form_strategy() -> impl Strategy<Value = ApplicationForm> {
    proptest::collection::vec(
        (
            proptest::sample::select(Field::TEMPLATE.to_vec()),
            prop_oneof![Just(String::new()), "[a-zA-Z0-9 .,-]{1,24}"],
        ),
        0..Field::TEMPLATE.len(),
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(field, value)| (field.key(), value))
            .collect::<ApplicationForm>()
    })
}

#[test]
fn shipped_template_carries_every_field_once() {
    for field in Field::TEMPLATE {
        assert_eq!(EMAIL_TEMPLATE.matches(&field.token()).count(), 1, "{field}");
    }
    assert!(unmatched_tokens(EMAIL_TEMPLATE).is_empty());
}

proptest! {
    #[test]
    fn no_known_token_survives_rendering(form in form_strategy()) {
        let html = render(EMAIL_TEMPLATE, &form);

        prop_assert!(!html.contains("{{"));

        let missing = Field::TEMPLATE.iter().filter(|field| form.get(**field).is_none()).count();
        prop_assert_eq!(html.matches(NOT_PROVIDED).count(), missing);
    }

    #[test]
    fn categorical_answers_lead_with_capital(answer in "[a-z]{1,12}") {
        for field in Field::TEMPLATE.iter().filter(|field| field.is_categorical()) {
            let form = ApplicationForm::new().with_field(*field, answer.clone());
            let rendered = render(&field.token(), &form);

            prop_assert!(rendered.starts_with(&answer[..1].to_uppercase()));
            prop_assert_eq!(&rendered[1..], &answer[1..]);
        }
    }
}
