use std::collections::HashMap;

use application::{FieldKind, FieldSpec};

/// Current state of the page's form elements, looked up by element id or
/// radio group name.
pub trait FormInputs {
    fn text(&self, ui_id: &str) -> Option<String>;

    fn checked(&self, group: &str) -> Option<String>;

    fn selected(&self, ui_id: &str) -> Option<String>;
}

/// Value the element behind `spec` currently holds. Signatures come from the
/// pad, never from here.
pub fn read<I: FormInputs + ?Sized>(inputs: &I, spec: &FieldSpec) -> Option<String> {
    match spec.kind {
        FieldKind::Radio => inputs.checked(spec.ui_id),
        FieldKind::Select => inputs.selected(spec.ui_id),
        FieldKind::Signature => None,
        _ => inputs.text(spec.ui_id),
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryInputs {
    values: HashMap<String, String>,
    radios: HashMap<String, String>,
}

impl MemoryInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, ui_id: &str, value: &str) -> &mut Self {
        self.values.insert(ui_id.to_string(), value.to_string());
        self
    }

    pub fn check(&mut self, group: &str, value: &str) -> &mut Self {
        self.radios.insert(group.to_string(), value.to_string());
        self
    }

    pub fn uncheck(&mut self, group: &str) -> &mut Self {
        self.radios.remove(group);
        self
    }
}

impl FormInputs for MemoryInputs {
    fn text(&self, ui_id: &str) -> Option<String> {
        self.values.get(ui_id).cloned()
    }

    fn checked(&self, group: &str) -> Option<String> {
        self.radios.get(group).cloned()
    }

    fn selected(&self, ui_id: &str) -> Option<String> {
        self.values.get(ui_id).cloned()
    }
}
