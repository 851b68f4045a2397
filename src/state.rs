use std::fmt::Display;

use thiserror::Error;

use crate::contact::{ContactError, ContactForm};
use crate::portfolio::{filter_projects, Project, ALL_CATEGORY, CATEGORIES, PROJECTS};
use crate::theme::Theme;

/// How long the "thank you" message stays up after a submission.
pub const ACK_WINDOW_MS: u64 = 4_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown project category: {0}")]
    UnknownCategory(String),
}

/// All transient UI state of the page. Owned by the page component; nothing
/// here outlives a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub filter: &'static str,
    pub theme: Theme,
    pub thank_you: bool,
    pub chat_open: bool,
    /// Contents of the contact form fields.
    pub draft: ContactForm,
    /// Bumped on every acknowledgment so a stale reset can be told apart.
    ack_seq: u64,
}

/// Handed back when an acknowledgment is shown: the reset to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckReset {
    pub seq: u64,
    pub delay_ms: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            filter: ALL_CATEGORY,
            theme: Theme::Light,
            thank_you: false,
            chat_open: false,
            draft: ContactForm::default(),
            ack_seq: 0,
        }
    }
}

impl PageState {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Selects a filter label from the derived category set. Unknown labels
    /// leave the current filter untouched.
    pub fn set_filter(&mut self, category: &str) -> Result<(), FilterError> {
        let label = CATEGORIES
            .iter()
            .find(|c| **c == category)
            .ok_or_else(|| FilterError::UnknownCategory(category.to_string()))?;
        self.filter = *label;
        Ok(())
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        filter_projects(&PROJECTS, self.filter)
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    /// The form to send, or the first missing field. Nothing should be
    /// dispatched on error.
    pub fn submission_form(&self) -> Result<ContactForm, ContactError> {
        self.draft.validate()?;
        Ok(self.draft.clone())
    }

    /// Completes a submission whatever its outcome: failures are only logged,
    /// the fields are cleared and the acknowledgment is shown.
    pub fn finish_submission<E: Display>(&mut self, result: Result<(), E>) -> AckReset {
        if let Err(e) = result {
            log::error!("Contact submission failed: {e}");
        }
        self.draft = ContactForm::default();
        self.thank_you = true;
        self.ack_seq += 1;
        AckReset {
            seq: self.ack_seq,
            delay_ms: ACK_WINDOW_MS,
        }
    }

    /// Hides the acknowledgment if `seq` belongs to the latest submission.
    /// Returns whether anything changed.
    pub fn expire_acknowledgment(&mut self, seq: u64) -> bool {
        if seq != self.ack_seq || !self.thank_you {
            return false;
        }
        self.thank_you = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PageState::default();
        assert_eq!(state.filter, "All");
        assert!(!state.theme.is_dark());
        assert!(!state.thank_you);
        assert!(!state.chat_open);
        assert_eq!(state.visible_projects().len(), 3);
    }

    #[test]
    fn test_set_filter_qa() {
        let mut state = PageState::default();
        state.set_filter("QA").unwrap();
        let titles = state
            .visible_projects()
            .iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Selenium Framework", "API Test Suite"]);

        state.set_filter("All").unwrap();
        assert_eq!(state.visible_projects().len(), PROJECTS.len());
    }

    #[test]
    fn test_set_filter_rejects_unknown() {
        let mut state = PageState::default();
        state.set_filter("Data").unwrap();
        let err = state.set_filter("Design").unwrap_err();
        assert_eq!(err, FilterError::UnknownCategory("Design".to_string()));
        assert_eq!(state.filter, "Data");
    }

    #[test]
    fn test_toggle_theme_only_touches_presentation() {
        let mut state = PageState::default();
        state.set_filter("QA").unwrap();
        let before = state.clone();
        let projects_before = PROJECTS;

        state.toggle_theme();
        assert!(state.theme.is_dark());
        assert_eq!(state.visible_projects(), before.visible_projects());

        state.toggle_theme();
        assert_eq!(state, before);
        assert_eq!(PROJECTS, projects_before);
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_submission_form_requires_fields() {
        let mut state = PageState::default();
        assert!(matches!(
            state.submission_form(),
            Err(ContactError::MissingField("name"))
        ));

        state.draft = filled();
        state.draft.message = " ".to_string();
        assert_eq!(state.submission_form().unwrap().message, " ");
    }

    #[test]
    fn test_finish_submission_clears_and_acknowledges() {
        let mut state = PageState::default();
        state.toggle_chat();
        state.draft = filled();

        let reset = state.finish_submission::<String>(Ok(()));
        assert_eq!(state.draft, ContactForm::default());
        assert!(state.thank_you);
        assert!(state.chat_open);
        assert_eq!(reset.delay_ms, 4_000);

        assert!(state.expire_acknowledgment(reset.seq));
        assert!(!state.thank_you);
        assert!(state.chat_open);
    }

    #[test]
    fn test_finish_submission_acknowledges_on_failure() {
        let mut state = PageState::default();
        state.draft = filled();

        let reset = state.finish_submission(Err("network unreachable"));
        assert_eq!(state.draft, ContactForm::default());
        assert!(state.thank_you);
        assert_eq!(reset.delay_ms, ACK_WINDOW_MS);
    }

    #[test]
    fn test_second_submission_restarts_window() {
        let mut state = PageState::default();
        state.draft = filled();
        let first = state.finish_submission::<String>(Ok(()));

        state.draft = filled();
        let second = state.finish_submission::<String>(Ok(()));
        assert_ne!(first.seq, second.seq);

        // the reset scheduled by the first submission must not hide the second
        assert!(!state.expire_acknowledgment(first.seq));
        assert!(state.thank_you);
        assert!(state.expire_acknowledgment(second.seq));
        assert!(!state.thank_you);
        assert!(!state.expire_acknowledgment(second.seq));
    }
}
