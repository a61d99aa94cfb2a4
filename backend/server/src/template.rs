use std::sync::LazyLock;

use application::{
    ApplicationForm, Field,
    text::{NOT_PROVIDED, capitalize_first, escape_html},
};
use regex::{Captures, Regex};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Text that replaces `{{field}}` in the email.
pub fn substitution(form: &ApplicationForm, field: Field) -> String {
    match form.get(field) {
        Some(value) if field.is_categorical() => capitalize_first(value),
        Some(value) => value.to_string(),
        None => NOT_PROVIDED.to_string(),
    }
}

fn template_field(key: &str) -> Option<Field> {
    Field::from_key(key).filter(|field| Field::TEMPLATE.contains(field))
}

/// Single pass over the template, so submitted text that happens to look like a
/// token is never expanded. Unknown tokens stay as written.
pub fn render(template: &str, form: &ApplicationForm) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures| match template_field(&caps[1]) {
            Some(field) => escape_html(&substitution(form, field)),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Tokens in `template` that [`render`] leaves as written.
pub fn unmatched_tokens(template: &str) -> Vec<String> {
    TOKEN
        .captures_iter(template)
        .filter(|caps| template_field(&caps[1]).is_none())
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tokens() -> String {
        Field::TEMPLATE
            .iter()
            .map(|field| format!("<td>{}</td>", field.token()))
            .collect()
    }

    #[test]
    fn test_missing_fields_render_not_provided() {
        let html = render(&all_tokens(), &ApplicationForm::new());

        assert!(!html.contains("{{"));
        assert_eq!(html.matches(NOT_PROVIDED).count(), Field::TEMPLATE.len());
    }

    #[test]
    fn test_categorical_answers_capitalized() {
        let form = ApplicationForm::new()
            .with_field(Field::Married, "no")
            .with_field(Field::PaymentMethod, "bank transfer")
            .with_field(Field::City, "lagos");

        assert_eq!(render("{{married}}", &form), "No");
        assert_eq!(render("{{paymentMethod}}", &form), "Bank transfer");
        assert_eq!(render("{{city}}", &form), "lagos");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let form = ApplicationForm::new().with_field(Field::FullName, "Jane Doe");

        assert_eq!(
            render("{{fullName}} / {{fullName}}", &form),
            "Jane Doe / Jane Doe"
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let form = ApplicationForm::new().with_field(Field::FullName, "Jane Doe");
        let html = render("{{FullName}} {{fullname}}", &form);

        assert_eq!(html, "{{FullName}} {{fullname}}");
        assert_eq!(
            unmatched_tokens("{{FullName}} {{fullname}}"),
            vec!["FullName", "fullname"]
        );
    }

    #[test]
    fn test_submitted_token_text_is_not_unmatched() {
        let template = "{{occupation}} {{email}} {{landlord}}";
        let form = ApplicationForm::new().with_field(Field::Occupation, "{{email}}");

        assert_eq!(render(template, &form), "{{email}} Not provided {{landlord}}");
        assert_eq!(unmatched_tokens(template), vec!["landlord"]);
    }

    #[test]
    fn test_unknown_tokens_left_literal() {
        let html = render("{{signature}} {{landlord}}", &ApplicationForm::new());

        assert_eq!(html, "{{signature}} {{landlord}}");
    }

    #[test]
    fn test_values_escaped_and_not_reexpanded() {
        let form = ApplicationForm::new()
            .with_field(Field::Occupation, "<script>{{email}}</script>")
            .with_field(Field::Email, "jane@example.com");

        assert_eq!(
            render("{{occupation}}", &form),
            "&lt;script&gt;{{email}}&lt;&#x2f;script&gt;"
        );
    }
}
