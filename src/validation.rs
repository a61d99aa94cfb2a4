use application::{Field, FieldKind};

use crate::{
    inputs::{FormInputs, read},
    steps::Step,
};

pub const REQUIRED_ALERT: &str = "Please answer all required questions before proceeding.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub missing: Vec<Field>,
    /// Text-like elements to outline as invalid.
    pub invalid_inputs: Vec<&'static str>,
    /// Text-like elements whose invalid outline should be removed.
    pub cleared_inputs: Vec<&'static str>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn alert(&self) -> Option<&'static str> {
        (!self.is_valid()).then_some(REQUIRED_ALERT)
    }
}

/// Checks the required fields of one step. Radio groups need a checked member,
/// everything text-like a non-blank value. Unchecked radios are reported but not
/// outlined.
pub fn validate_step<I: FormInputs + ?Sized>(step: &Step, inputs: &I) -> ValidationReport {
    let mut report = ValidationReport::default();

    for spec in step.required() {
        if spec.kind == FieldKind::Signature {
            continue;
        }

        let filled = read(inputs, spec).is_some_and(|value| !value.trim().is_empty());

        match (filled, spec.kind.is_text_like()) {
            (true, true) => report.cleared_inputs.push(spec.ui_id),
            (true, false) => {}
            (false, text_like) => {
                report.missing.push(spec.field);
                if text_like {
                    report.invalid_inputs.push(spec.ui_id);
                }
            }
        }
    }

    report
}
