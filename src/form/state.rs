use std::rc::Rc;

use yew::prelude::*;

use crate::form::rota::LoadingRota;
use crate::form::validator::{self, ValidationErrors};
use crate::submission::Submission;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub firma: String,
    pub content: String,
    pub consent: bool,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            firma: String::new(),
            content: String::new(),
            consent: true,  // Checked unless the user opts out
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitStatus::Pending)
    }
}

pub enum FieldEdit {
    Name(String),
    Email(String),
    Firma(String),
    Content(String),
    Consent(bool),
}

pub enum FormAction {
    Edit(FieldEdit),
    Rejected(ValidationErrors),
    Started,
    Tick,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: ValidationErrors,
    pub status: SubmitStatus,
    pub rota: LoadingRota,
    /// Set once a submit was rejected; edits re-run validation from then on.
    revalidate: bool,
}

impl FormState {
    /// Validated payload for a new submission. Refuses while one is in flight.
    pub fn accept(&self) -> Result<Submission, ValidationErrors> {
        if self.status.is_pending() {
            return Err(ValidationErrors::default());
        }
        validator::validate(&self.values)
    }

    pub fn word_count(&self) -> usize {
        validator::word_count(&self.values.content)
    }
}

#[cfg(test)]
impl FormState {
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(edit) => {
                match edit {
                    FieldEdit::Name(v) => next.values.name = v,
                    FieldEdit::Email(v) => next.values.email = v,
                    FieldEdit::Firma(v) => next.values.firma = v,
                    FieldEdit::Content(v) => next.values.content = v,
                    FieldEdit::Consent(v) => next.values.consent = v,
                }
                if next.revalidate {
                    next.errors = validator::check(&next.values);
                }
            }
            FormAction::Rejected(errors) => {
                if next.status.is_pending() {
                    return self;
                }
                next.errors = errors;
                next.revalidate = true;
            }
            FormAction::Started => {
                if next.status.is_pending() {
                    return self;
                }
                next.errors = ValidationErrors::default();
                next.status = SubmitStatus::Pending;
                next.rota = next.rota.reset();
            }
            FormAction::Tick => {
                if !next.status.is_pending() {
                    return self;
                }
                next.rota = next.rota.tick();
            }
            FormAction::Succeeded => {
                next = FormState {
                    status: SubmitStatus::Succeeded,
                    ..FormState::default()
                };
            }
            FormAction::Failed => {
                next.status = SubmitStatus::Failed;
                next.rota = next.rota.reset();
            }
        }
        Rc::new(next)
    }
}
