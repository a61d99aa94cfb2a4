use application::{
    ApplicationForm, Field,
    text::{NOT_PROVIDED, escape_html, review_label},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewValue {
    Text(String),
    /// Data URL of the drawn signature.
    Image(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub key: String,
    pub label: String,
    pub value: ReviewValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    pub entries: Vec<ReviewEntry>,
}

impl ReviewSummary {
    /// Known fields in form order, then any other submitted keys.
    pub fn from_form(form: &ApplicationForm) -> Self {
        let mut pairs: Vec<(&str, &str)> = Field::ALL
            .iter()
            .filter_map(|field| form.raw(field.key()).map(|value| (field.key(), value)))
            .collect();
        pairs.extend(form.iter().filter(|(key, _)| Field::from_key(key).is_none()));

        let entries = pairs
            .into_iter()
            .map(|(key, value)| ReviewEntry {
                key: key.to_string(),
                label: review_label(key),
                value: entry_value(key, value),
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&ReviewEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"review-section\"><h3>Personal Details</h3>");

        for entry in &self.entries {
            let label = escape_html(&entry.label);

            match &entry.value {
                ReviewValue::Image(src) => {
                    html.push_str(&format!("<p><strong>{label}:</strong></p>"));
                    html.push_str(&format!(
                        "<img src=\"{}\" alt=\"Applicant Signature\" style=\"max-width: 100%; border: 1px solid #ccc;\"/>",
                        escape_html(src)
                    ));
                }
                ReviewValue::Text(text) => {
                    html.push_str(&format!(
                        "<p><strong>{label}:</strong> {}</p>",
                        escape_html(text)
                    ));
                }
            }
        }

        html.push_str("</div>");
        html
    }
}

fn entry_value(key: &str, value: &str) -> ReviewValue {
    if value.is_empty() {
        ReviewValue::Text(NOT_PROVIDED.to_string())
    } else if key == Field::Signature.key() {
        ReviewValue::Image(value.to_string())
    } else {
        ReviewValue::Text(value.to_string())
    }
}
