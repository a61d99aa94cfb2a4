use application::{ApplicationForm, Field, FieldKind, SubmitResponse};

use crate::{
    inputs::{FormInputs, read},
    review::ReviewSummary,
    steps::Steps,
    submit::{
        ERROR_VIEW, LOADING_MESSAGE, NETWORK_FAILURE, SubmissionError, SubmitClient, SubmitError,
    },
    validation::{validate_step, ValidationReport},
};

/// What the page should show for the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub index: usize,
    pub title: &'static str,
    pub progress: String,
    pub show_prev: bool,
    pub show_next: bool,
    pub show_agree: bool,
    pub agree_enabled: bool,
    /// Only on the last step.
    pub review: Option<ReviewSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved(StepView),
    Blocked(ValidationReport),
    Stayed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// Loading indicator shown, Agree disabled.
    Submitting,
    /// Thank-you view.
    Submitted,
    /// Message for the alert; the error view is shown and Agree re-enabled.
    Failed(String),
}

impl Phase {
    /// Text that replaces the form while it is hidden.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Phase::Submitting => Some(LOADING_MESSAGE),
            Phase::Failed(_) => Some(ERROR_VIEW),
            Phase::Editing | Phase::Submitted => None,
        }
    }

    pub fn alert(&self) -> Option<&str> {
        match self {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub struct FormController {
    steps: Steps,
    current: usize,
    snapshot: ApplicationForm,
    phase: Phase,
}

impl FormController {
    pub fn new(steps: Steps) -> Self {
        Self {
            steps,
            current: 0,
            snapshot: ApplicationForm::new(),
            phase: Phase::Editing,
        }
    }

    pub fn steps(&self) -> &Steps {
        &self.steps
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn snapshot(&self) -> &ApplicationForm {
        &self.snapshot
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    fn is_last(&self, index: usize) -> bool {
        index == self.steps.last_index()
    }

    /// Makes `index` the visible step, clamped to the last one. Entering the last
    /// step re-collects every input for the review.
    pub fn show_step<I: FormInputs + ?Sized>(&mut self, index: usize, inputs: &I) -> StepView {
        self.current = index.min(self.steps.last_index());

        if self.is_last(self.current) {
            self.collect_all_form_data(inputs);
        }

        self.view()
    }

    pub fn view(&self) -> StepView {
        let index = self.current;
        let last = self.is_last(index);

        StepView {
            index,
            title: self.steps.get(index).map_or("", |step| step.title),
            progress: format!("Step {} of {}", index + 1, self.steps.len()),
            show_prev: index > 0,
            show_next: !last,
            show_agree: last,
            agree_enabled: self.phase != Phase::Submitting,
            review: last.then(|| ReviewSummary::from_form(&self.snapshot)),
        }
    }

    pub fn next<I: FormInputs + ?Sized>(&mut self, inputs: &I) -> Transition {
        let Some(step) = self.steps.get(self.current) else {
            return Transition::Stayed;
        };

        let report = validate_step(step, inputs);
        if !report.is_valid() {
            return Transition::Blocked(report);
        }

        if self.is_last(self.current) {
            return Transition::Stayed;
        }

        Transition::Moved(self.show_step(self.current + 1, inputs))
    }

    pub fn prev(&mut self) -> Transition {
        if self.current == 0 {
            return Transition::Stayed;
        }

        self.current -= 1;
        Transition::Moved(self.view())
    }

    /// Rebuilds the snapshot from every element on the page, not just the
    /// current step. The signature is kept from the previous snapshot.
    pub fn collect_all_form_data<I: FormInputs + ?Sized>(&mut self, inputs: &I) -> &ApplicationForm {
        let mut next = self
            .steps
            .specs()
            .filter(|spec| spec.kind != FieldKind::Signature)
            .filter_map(|spec| read(inputs, spec).map(|value| (spec.field.key(), value)))
            .collect::<ApplicationForm>();

        if let Some(signature) = self.snapshot.raw(Field::Signature.key()) {
            next = next.with_field(Field::Signature, signature);
        }

        self.snapshot = next;
        &self.snapshot
    }

    pub fn signature_captured(&mut self, data_url: String) {
        self.snapshot = self.snapshot.with_field(Field::Signature, data_url);
    }

    pub fn signature_cleared(&mut self) {
        self.snapshot = self.snapshot.without(Field::Signature.key());
    }

    /// Flips to [`Phase::Submitting`] and hands out the snapshot to send. Refused
    /// while a request is in flight or after a successful submission.
    pub fn begin_submission(&mut self) -> Result<ApplicationForm, SubmissionError> {
        match self.phase {
            Phase::Submitting => return Err(SubmissionError::InFlight),
            Phase::Submitted => return Err(SubmissionError::AlreadySubmitted),
            Phase::Editing | Phase::Failed(_) => {}
        }

        if !self.is_last(self.current) {
            return Err(SubmissionError::NotOnReviewStep);
        }

        self.phase = Phase::Submitting;
        Ok(self.snapshot.clone())
    }

    pub fn settle_submission(&mut self, result: Result<SubmitResponse, SubmitError>) -> &Phase {
        self.phase = match result {
            Ok(response) if response.success => Phase::Submitted,
            Ok(response) => Phase::Failed(format!("An error occurred: {}", response.message)),
            Err(_) => Phase::Failed(NETWORK_FAILURE.to_string()),
        };

        &self.phase
    }

    pub async fn agree<C: SubmitClient + ?Sized>(
        &mut self,
        client: &C,
    ) -> Result<&Phase, SubmissionError> {
        let form = self.begin_submission()?;
        let result = client.submit(&form).await;

        Ok(self.settle_submission(result))
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Steps::standard())
    }
}
