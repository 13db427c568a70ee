use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{Catalog, Inquiry, Relay, RelayError};

/// Copy used by the toasts shown after a submission.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FormSettings {
    pub response_window: String,
    pub fallback_email: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            response_window: "24 hours".to_owned(),
            fallback_email: "hello@zenocreatives.com".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn sent(settings: &FormSettings) -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Message sent!".to_owned(),
            description: format!(
                "We'll get back to you within {}.",
                settings.response_window
            ),
        }
    }

    pub fn failed(settings: &FormSettings) -> Self {
        Self {
            kind: ToastKind::Error,
            title: "Failed to send message".to_owned(),
            description: format!(
                "Please try again or email us directly at {}.",
                settings.fallback_email
            ),
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A previous submission is still in flight; nothing was sent.
    Busy,
    /// Required fields are missing or invalid; nothing was sent.
    Incomplete(zeno_shared::Error),
    Finished(Toast),
}

/// Contact form state owned by the view for as long as it is mounted.
///
/// `submit` drives one full round trip. `begin` and `complete` expose the two
/// halves for callers that share the form and must not hold it across the call.
pub struct ContactForm {
    draft: Inquiry,
    busy: bool,
    catalog: Catalog,
    settings: FormSettings,
}

impl ContactForm {
    pub fn new(catalog: Catalog, settings: FormSettings) -> Self {
        Self {
            draft: Inquiry::default(),
            busy: false,
            catalog,
            settings,
        }
    }

    pub fn draft(&self) -> &Inquiry {
        &self.draft
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Controls are disabled while a submission is in flight.
    pub fn controls_enabled(&self) -> bool {
        !self.busy
    }

    /// Applies an edit to the draft. Returns false, leaving the draft untouched,
    /// while the controls are disabled.
    pub fn edit(&mut self, f: impl FnOnce(&mut Inquiry)) -> bool {
        if self.busy {
            return false;
        }

        f(&mut self.draft);
        true
    }

    /// Back to a freshly mounted form.
    pub fn reset(&mut self) {
        self.draft = Inquiry::default();
        self.busy = false;
    }

    /// Starts a submission: `Ok(None)` when one is already in flight, an error
    /// when required fields are missing, otherwise the payload to send.
    pub fn begin(&mut self) -> zeno_shared::Result<Option<Inquiry>> {
        if self.busy {
            tracing::debug!("Submission already in flight, ignoring");
            return Ok(None);
        }

        self.check_required()?;
        self.busy = true;

        Ok(Some(self.draft.clone()))
    }

    /// Finishes the in-flight submission and returns the single toast to show.
    pub fn complete(&mut self, result: Result<Value, RelayError>) -> Toast {
        self.busy = false;

        match result {
            Ok(data) => {
                tracing::info!(data = %data, "Inquiry sent");
                self.draft = Inquiry::default();
                Toast::sent(&self.settings)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to send inquiry");
                Toast::failed(&self.settings)
            }
        }
    }

    pub async fn submit<R: Relay + ?Sized>(&mut self, relay: &R) -> SubmitOutcome {
        let inquiry = match self.begin() {
            Ok(Some(inquiry)) => inquiry,
            Ok(None) => return SubmitOutcome::Busy,
            Err(err) => return SubmitOutcome::Incomplete(err),
        };

        let result = relay.send(&inquiry).await;

        SubmitOutcome::Finished(self.complete(result))
    }

    fn check_required(&self) -> zeno_shared::Result<()> {
        let mut errors = match self.draft.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if !self.draft.project_type.is_empty()
            && !self.catalog.accepts_project_type(&self.draft.project_type)
        {
            errors.add("project_type", ValidationError::new("choice"));
        }

        if !self.draft.budget.is_empty() && !self.catalog.accepts_budget(&self.draft.budget) {
            errors.add("budget", ValidationError::new("choice"));
        }

        if errors.is_empty() {
            return Ok(());
        }

        Err(errors.into())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(Catalog::default(), FormSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(|d| {
            d.name = "Jane Doe".to_owned();
            d.email = "jane@x.com".to_owned();
            d.project_type = "Motion Graphics".to_owned();
            d.budget = "$1,000 - $2,000".to_owned();
            d.message = "Need a 30s explainer.".to_owned();
        });
        form
    }

    #[test]
    fn test_begin_sets_busy_and_disables_controls() {
        let mut form = filled();
        let inquiry = form.begin().unwrap().unwrap();

        assert_eq!(inquiry.name, "Jane Doe");
        assert!(form.is_busy());
        assert!(!form.controls_enabled());
        assert!(!form.edit(|d| d.name = "Someone Else".to_owned()));
        assert_eq!(form.draft().name, "Jane Doe");
    }

    #[test]
    fn test_begin_while_busy_is_ignored() {
        let mut form = filled();
        assert!(form.begin().unwrap().is_some());
        assert!(form.begin().unwrap().is_none());
    }

    #[test]
    fn test_unknown_choice_is_incomplete() {
        let mut form = filled();
        form.edit(|d| d.budget = "$1,000,000".to_owned());

        let err = form.begin().unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["budget"]);
        assert!(!form.is_busy());
    }

    #[test]
    fn test_empty_form_is_incomplete() {
        let mut form = ContactForm::default();
        let err = form.begin().unwrap_err();

        assert_eq!(
            err.invalid_fields(),
            vec!["budget", "email", "message", "name", "project_type"]
        );
    }

    #[test]
    fn test_complete_success_resets_fields() {
        let mut form = filled();
        form.begin().unwrap();

        let toast = form.complete(Ok(serde_json::json!({"id": "1"})));
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.description, "We'll get back to you within 24 hours.");
        assert_eq!(form.draft(), &Inquiry::default());
        assert!(!form.is_busy());
    }

    #[test]
    fn test_complete_failure_keeps_fields() {
        let mut form = filled();
        let before = form.draft().clone();
        form.begin().unwrap();

        let toast = form.complete(Err(RelayError::Failed("boom".to_owned())));
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.description.contains("hello@zenocreatives.com"));
        assert_eq!(form.draft(), &before);
        assert!(form.controls_enabled());
    }

    #[test]
    fn test_reset_clears_busy() {
        let mut form = filled();
        form.begin().unwrap();
        form.reset();

        assert!(!form.is_busy());
        assert!(form.draft().name.is_empty());
    }
}
