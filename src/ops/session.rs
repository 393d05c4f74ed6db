use crate::model::email::{EmailId, EmailRecord};
use crate::model::filter::FilterCriteria;
use crate::ops::templater::generate_response;
use crate::ops::triage::TriageStore;

/// Error type for session transitions that take an id
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no email with id {0}")]
    UnknownEmail(String),
    #[error("no email selected")]
    NoSelection,
}

/// Top-level tabs of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Inbox,
    Analytics,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Inbox, Tab::Analytics, Tab::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Inbox => "Inbox",
            Tab::Analytics => "Analytics",
            Tab::Settings => "Settings",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Inbox => Tab::Analytics,
            Tab::Analytics => Tab::Settings,
            Tab::Settings => Tab::Inbox,
        }
    }
}

/// Actions whose real effect lives outside the desk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    Send,
    SaveDraft,
}

impl HookAction {
    pub fn label(self) -> &'static str {
        match self {
            HookAction::Send => "send",
            HookAction::SaveDraft => "save draft",
        }
    }
}

/// Receiver for send/save actions. The desk has no transport or storage of
/// its own; an implementation decides what these mean.
pub trait ResponseHooks {
    fn on_action(&mut self, action: HookAction, record: &EmailRecord, draft: &str);
}

/// Hooks that only record the action in the log
#[derive(Debug, Default)]
pub struct LogHooks;

impl ResponseHooks for LogHooks {
    fn on_action(&mut self, action: HookAction, record: &EmailRecord, draft: &str) {
        tracing::info!(
            action = action.label(),
            email = %record.id,
            draft_len = draft.len(),
            "response hook invoked"
        );
    }
}

/// View-session state: active tab, selection, filter and the draft buffer.
/// The record collection itself lives in the `TriageStore` and is passed in
/// where needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub tab: Tab,
    pub selected: Option<EmailId>,
    pub filter: FilterCriteria,
    pub draft: String,
}

impl Session {
    /// Start on the inbox with the first record selected (if any)
    pub fn new(store: &TriageStore) -> Self {
        let mut session = Session::default();
        if let Some(first) = store.first() {
            session.select(first);
        }
        session
    }

    /// Select a record and replace the draft with a fresh template
    pub fn select(&mut self, record: &EmailRecord) {
        self.selected = Some(record.id.clone());
        self.draft = generate_response(record);
    }

    pub fn select_id(&mut self, store: &TriageStore, id: &str) -> Result<(), SessionError> {
        let record = store
            .get(id)
            .ok_or_else(|| SessionError::UnknownEmail(id.to_string()))?;
        self.select(record);
        Ok(())
    }

    pub fn edit_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Replace the filter. The selection is kept even if it no longer matches.
    pub fn change_filter(&mut self, criteria: FilterCriteria) {
        tracing::debug!(?criteria, "filter changed");
        self.filter = criteria;
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Re-run the templater on the current selection, dropping any edits
    pub fn regenerate(&mut self, store: &TriageStore) -> Result<(), SessionError> {
        let record = self.selected_record(store).ok_or(SessionError::NoSelection)?;
        self.draft = generate_response(record);
        Ok(())
    }

    /// Hand the current draft to `hooks`. Session state is unchanged.
    pub fn dispatch(
        &self,
        action: HookAction,
        store: &TriageStore,
        hooks: &mut dyn ResponseHooks,
    ) -> Result<(), SessionError> {
        let record = self.selected_record(store).ok_or(SessionError::NoSelection)?;
        hooks.on_action(action, record, &self.draft);
        Ok(())
    }

    pub fn selected_record<'a>(&self, store: &'a TriageStore) -> Option<&'a EmailRecord> {
        self.selected.as_deref().and_then(|id| store.get(id))
    }

    /// Records visible under the current filter
    pub fn visible<'a>(&self, store: &'a TriageStore) -> Vec<&'a EmailRecord> {
        store.filter(&self.filter)
    }

    /// True if the selected record is hidden by the current filter
    pub fn selection_hidden(&self, store: &TriageStore) -> bool {
        match self.selected.as_deref() {
            Some(id) => !self.visible(store).iter().any(|r| r.id == id),
            None => false,
        }
    }
}
