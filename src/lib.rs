//! # Tenant Application Form
//!
//! Client logic of the multi-step tenant application. Nothing here touches a
//! DOM: the host page forwards events and reads back views.
//!
//! ## Flow
//!
//! - One [`Step`](steps::Step) visible at a time, progress shown as `Step i of N`
//! - Next validates the current step only, Previous never validates
//! - Entering the last step collects every input and renders the review
//! - The signature is drawn on a canvas and stored as a PNG data URL
//! - Agree posts the collected snapshot to `/submit`, once per click
//!
//! ## Host Responsibilities
//!
//! | Controller output | Host does |
//! |-------------------|-----------|
//! | [`StepView`](controller::StepView) | toggle step visibility, buttons, progress label, review HTML |
//! | [`Transition::Blocked`](controller::Transition::Blocked) | alert, red border on `invalid_inputs`, reset `cleared_inputs` |
//! | [`EventDisposition::PreventDefault`](signature::EventDisposition) | `preventDefault()` on the touch event |
//! | [`Phase`](controller::Phase) | loading indicator, thank-you view, error view |
//!
//! ## Data
//!
//! Every update produces a new [`ApplicationForm`](application::ApplicationForm)
//! snapshot. The mapping from element ids to keys is the static schema in
//! [`application::fields`], not derived from the ids at runtime.

pub mod controller;
pub mod inputs;
pub mod review;
pub mod signature;
pub mod steps;
pub mod submit;
pub mod validation;

pub use controller::{FormController, Phase, StepView, Transition};
pub use inputs::{FormInputs, MemoryInputs};
pub use steps::{Step, Steps};
