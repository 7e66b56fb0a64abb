//! Prompt Session - Keystroke reducer for the prompt picker
//!
//! `Idle → TriggerActive → (VariableCollection | direct insert) → Idle`, with
//! `CreatingTemplate` entered when the "create new" entry is confirmed.
//!
//! The reducer is pure: it takes the previous session, one event and the
//! current catalog snapshot, and returns the next session plus an effect the
//! caller has to carry out (open a form, show the rewritten buffer).

use serde::{Deserialize, Serialize};

use super::{rank, substitute_trigger, substitute_variables, trigger, unique_placeholders};
use crate::domain::entities::{Candidate, PromptTemplate};
use crate::domain::value_objects::TriggerState;

/// Phase of the picker state machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    /// No trigger token at the end of the buffer
    #[default]
    Idle,
    /// Candidate list visible
    TriggerActive { filter_text: String, selected: usize },
    /// Waiting for the value-collection form
    VariableCollection {
        template: PromptTemplate,
        variables: Vec<String>,
        /// Buffer with the trigger token already replaced by the template content
        pending_buffer: String,
    },
    /// Waiting for the external "create template" flow
    CreatingTemplate,
}

/// Input to the reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The buffer text changed (any keystroke that edits text)
    BufferChanged(String),
    NavigateNext,
    NavigatePrevious,
    /// Forward with wrap-around
    TabCycle,
    Cancel,
    /// Select the highlighted candidate
    Confirm,
    /// Reply from the value-collection form, one value per variable
    VariablesSubmitted(Vec<String>),
    /// The "create template" flow finished or was dismissed
    TemplateFlowClosed,
}

/// Work the caller has to do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    None,
    /// The buffer was rewritten; show this text
    BufferRewritten(String),
    /// Open the value-collection form for these variables
    CollectVariables {
        template: PromptTemplate,
        variables: Vec<String>,
    },
    /// Open the "create template" form
    OpenTemplateCreator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptSession {
    buffer: String,
    phase: SessionPhase,
}

impl PromptSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing buffer text, deriving the trigger phase
    pub fn with_buffer(buffer: impl Into<String>) -> Self {
        let buffer = buffer.into();
        let phase = derive_phase(&buffer);
        Self { buffer, phase }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, SessionPhase::Idle)
    }

    pub fn trigger(&self) -> TriggerState {
        match &self.phase {
            SessionPhase::TriggerActive { filter_text, .. } => TriggerState::active(filter_text),
            _ => TriggerState::inactive(),
        }
    }

    /// Highlighted index, clamped to the current candidate list
    pub fn selected_index(&self, catalog: &[PromptTemplate]) -> Option<usize> {
        match &self.phase {
            SessionPhase::TriggerActive {
                filter_text,
                selected,
            } => Some(clamp(*selected, rank(catalog, filter_text).len())),
            _ => None,
        }
    }

    /// Candidates to render; empty unless the list is visible
    pub fn candidates(&self, catalog: &[PromptTemplate]) -> Vec<Candidate> {
        match &self.phase {
            SessionPhase::TriggerActive { filter_text, .. } => rank(catalog, filter_text),
            _ => Vec::new(),
        }
    }

    /// Apply one event against the current catalog snapshot
    pub fn reduce(self, event: SessionEvent, catalog: &[PromptTemplate]) -> (Self, SessionEffect) {
        let Self { buffer, phase } = self;

        match (phase, event) {
            (
                SessionPhase::Idle | SessionPhase::TriggerActive { .. },
                SessionEvent::BufferChanged(text),
            ) => {
                let phase = derive_phase(&text);
                tracing::debug!(?phase, "Buffer changed");
                (Self { buffer: text, phase }, SessionEffect::None)
            }

            (
                SessionPhase::TriggerActive {
                    filter_text,
                    selected,
                },
                nav @ (SessionEvent::NavigateNext
                | SessionEvent::NavigatePrevious
                | SessionEvent::TabCycle),
            ) => {
                let count = rank(catalog, &filter_text).len();
                let selected = navigate(&nav, clamp(selected, count), count);
                (
                    Self {
                        buffer,
                        phase: SessionPhase::TriggerActive {
                            filter_text,
                            selected,
                        },
                    },
                    SessionEffect::None,
                )
            }

            (
                SessionPhase::TriggerActive {
                    filter_text,
                    selected,
                },
                SessionEvent::Confirm,
            ) => confirm(buffer, &filter_text, selected, catalog),

            (
                SessionPhase::VariableCollection {
                    variables,
                    pending_buffer,
                    ..
                },
                SessionEvent::VariablesSubmitted(values),
            ) => {
                let buffer = substitute_variables(&pending_buffer, &variables, &values);
                tracing::debug!(variables = variables.len(), "Variables substituted");
                (
                    Self {
                        buffer: buffer.clone(),
                        phase: SessionPhase::Idle,
                    },
                    SessionEffect::BufferRewritten(buffer),
                )
            }

            (SessionPhase::CreatingTemplate, SessionEvent::TemplateFlowClosed) => {
                tracing::debug!("Template creation flow closed");
                (
                    Self {
                        buffer,
                        phase: SessionPhase::Idle,
                    },
                    SessionEffect::None,
                )
            }

            (_, SessionEvent::Cancel) => {
                tracing::debug!("Prompt selection cancelled");
                (
                    Self {
                        buffer,
                        phase: SessionPhase::Idle,
                    },
                    SessionEffect::None,
                )
            }

            (phase, event) => {
                tracing::debug!(?phase, ?event, "Event ignored in current phase");
                (Self { buffer, phase }, SessionEffect::None)
            }
        }
    }
}

fn derive_phase(buffer: &str) -> SessionPhase {
    let state = trigger::detect(buffer);
    if state.is_active {
        SessionPhase::TriggerActive {
            filter_text: state.filter_text,
            selected: 0,
        }
    } else {
        SessionPhase::Idle
    }
}

fn clamp(selected: usize, count: usize) -> usize {
    selected.min(count.saturating_sub(1))
}

fn navigate(event: &SessionEvent, selected: usize, count: usize) -> usize {
    let last = count.saturating_sub(1);
    match event {
        SessionEvent::NavigateNext => (selected + 1).min(last),
        SessionEvent::NavigatePrevious => selected.saturating_sub(1),
        SessionEvent::TabCycle if selected < last => selected + 1,
        SessionEvent::TabCycle => 0,
        _ => selected,
    }
}

fn confirm(
    buffer: String,
    filter_text: &str,
    selected: usize,
    catalog: &[PromptTemplate],
) -> (PromptSession, SessionEffect) {
    let mut candidates = rank(catalog, filter_text);
    let index = clamp(selected, candidates.len());
    // rank always yields at least the "create new" entry
    let candidate = candidates.swap_remove(index);

    match candidate {
        Candidate::CreateNew => {
            tracing::debug!("Create-new entry selected");
            (
                PromptSession {
                    buffer,
                    phase: SessionPhase::CreatingTemplate,
                },
                SessionEffect::OpenTemplateCreator,
            )
        }
        Candidate::Real(template) => {
            let variables = unique_placeholders(&template.content);
            let spliced = substitute_trigger(&buffer, &template.content);

            if variables.is_empty() {
                tracing::debug!(name = %template.name, "Prompt inserted directly");
                (
                    PromptSession {
                        buffer: spliced.clone(),
                        phase: SessionPhase::Idle,
                    },
                    SessionEffect::BufferRewritten(spliced),
                )
            } else {
                tracing::debug!(
                    name = %template.name,
                    variables = variables.len(),
                    "Prompt needs variable values"
                );
                (
                    PromptSession {
                        buffer,
                        phase: SessionPhase::VariableCollection {
                            template: template.clone(),
                            variables: variables.clone(),
                            pending_buffer: spliced,
                        },
                    },
                    SessionEffect::CollectVariables {
                        template,
                        variables,
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<PromptTemplate> {
        vec![
            PromptTemplate::new("Weather", "Weather in {{city}} for {{day}} in {{city}}", ""),
            PromptTemplate::new("Wave", "Say hello", ""),
            PromptTemplate::new("Summarize", "Summarize this:", ""),
        ]
    }

    fn typed(text: &str, catalog: &[PromptTemplate]) -> PromptSession {
        PromptSession::new()
            .reduce(SessionEvent::BufferChanged(text.to_string()), catalog)
            .0
    }

    fn step(
        session: PromptSession,
        event: SessionEvent,
        catalog: &[PromptTemplate],
    ) -> PromptSession {
        session.reduce(event, catalog).0
    }

    #[test]
    fn test_buffer_change_activates_and_deactivates() {
        let catalog = catalog();
        let session = typed("hi /wa", &catalog);
        assert_eq!(session.trigger(), TriggerState::active("wa"));
        assert_eq!(session.selected_index(&catalog), Some(0));

        let session = step(session, SessionEvent::BufferChanged("hi /wa ".into()), &catalog);
        assert!(session.is_idle());
        assert_eq!(session.selected_index(&catalog), None);
        assert!(session.candidates(&catalog).is_empty());
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let catalog = catalog();
        // "/w" matches Weather, Wave + create new = 3 candidates
        let mut session = typed("/w", &catalog);
        for _ in 0..5 {
            session = step(session, SessionEvent::NavigateNext, &catalog);
        }
        assert_eq!(session.selected_index(&catalog), Some(2));

        for _ in 0..5 {
            session = step(session, SessionEvent::NavigatePrevious, &catalog);
        }
        assert_eq!(session.selected_index(&catalog), Some(0));
    }

    #[test]
    fn test_tab_wraps_to_first() {
        let catalog = catalog();
        let mut session = typed("/w", &catalog);
        session = step(session, SessionEvent::TabCycle, &catalog);
        session = step(session, SessionEvent::TabCycle, &catalog);
        assert_eq!(session.selected_index(&catalog), Some(2));
        session = step(session, SessionEvent::TabCycle, &catalog);
        assert_eq!(session.selected_index(&catalog), Some(0));
    }

    #[test]
    fn test_typing_resets_selection() {
        let catalog = catalog();
        let session = step(typed("/w", &catalog), SessionEvent::NavigateNext, &catalog);
        assert_eq!(session.selected_index(&catalog), Some(1));

        let session = step(session, SessionEvent::BufferChanged("/wa".into()), &catalog);
        assert_eq!(session.selected_index(&catalog), Some(0));
    }

    #[test]
    fn test_cancel_hides_list_without_touching_buffer() {
        let catalog = catalog();
        let (session, effect) = typed("note /su", &catalog).reduce(SessionEvent::Cancel, &catalog);
        assert!(session.is_idle());
        assert_eq!(session.buffer(), "note /su");
        assert_eq!(effect, SessionEffect::None);
    }

    #[test]
    fn test_confirm_without_variables_inserts_directly() {
        let catalog = catalog();
        let (session, effect) =
            typed("Please /sum", &catalog).reduce(SessionEvent::Confirm, &catalog);

        assert!(session.is_idle());
        assert_eq!(session.buffer(), "Please Summarize this:");
        assert_eq!(
            effect,
            SessionEffect::BufferRewritten("Please Summarize this:".into())
        );
    }

    #[test]
    fn test_confirm_with_variables_collects_then_substitutes() {
        let catalog = catalog();
        let (session, effect) = typed("Q: /weat", &catalog).reduce(SessionEvent::Confirm, &catalog);

        match effect {
            SessionEffect::CollectVariables { template, variables } => {
                assert_eq!(template.name, "Weather");
                assert_eq!(variables, vec!["city", "day"]);
            }
            other => panic!("unexpected effect: {other:?}"),
        }
        assert_eq!(session.buffer(), "Q: /weat");

        let (session, effect) = session.reduce(
            SessionEvent::VariablesSubmitted(vec!["Oslo".into(), "Friday".into()]),
            &catalog,
        );
        let expected = "Q: Weather in Oslo for Friday in Oslo";
        assert!(session.is_idle());
        assert_eq!(session.buffer(), expected);
        assert_eq!(effect, SessionEffect::BufferRewritten(expected.into()));
    }

    #[test]
    fn test_cancel_variable_collection_keeps_original_buffer() {
        let catalog = catalog();
        let session = step(typed("Q: /weat", &catalog), SessionEvent::Confirm, &catalog);
        let (session, effect) = session.reduce(SessionEvent::Cancel, &catalog);

        assert!(session.is_idle());
        assert_eq!(session.buffer(), "Q: /weat");
        assert_eq!(effect, SessionEffect::None);
    }

    #[test]
    fn test_confirm_on_last_entry_opens_creator() {
        let catalog = catalog();
        let mut session = step(typed("/", &catalog), SessionEvent::NavigatePrevious, &catalog);
        for _ in 0..3 {
            session = step(session, SessionEvent::NavigateNext, &catalog);
        }
        assert_eq!(session.selected_index(&catalog), Some(3));

        let (session, effect) = session.reduce(SessionEvent::Confirm, &catalog);
        assert_eq!(effect, SessionEffect::OpenTemplateCreator);
        assert_eq!(session.phase(), &SessionPhase::CreatingTemplate);

        let (session, effect) = session.reduce(SessionEvent::TemplateFlowClosed, &catalog);
        assert!(session.is_idle());
        assert_eq!(session.buffer(), "/");
        assert_eq!(effect, SessionEffect::None);
    }

    #[test]
    fn test_no_matches_confirm_opens_creator() {
        let catalog = catalog();
        let (_, effect) = typed("/zzz", &catalog).reduce(SessionEvent::Confirm, &catalog);
        assert_eq!(effect, SessionEffect::OpenTemplateCreator);
    }

    #[test]
    fn test_selection_clamps_when_catalog_shrinks() {
        let full = catalog();
        let mut session = typed("/", &full);
        for _ in 0..3 {
            session = step(session, SessionEvent::NavigateNext, &full);
        }

        let shrunk = vec![full[0].clone()];
        assert_eq!(session.selected_index(&shrunk), Some(1));
        let (_, effect) = session.reduce(SessionEvent::Confirm, &shrunk);
        assert_eq!(effect, SessionEffect::OpenTemplateCreator);
    }

    #[test]
    fn test_events_outside_their_phase_are_ignored() {
        let catalog = catalog();
        let idle = PromptSession::with_buffer("plain text");
        let (after, effect) = idle.clone().reduce(SessionEvent::Confirm, &catalog);
        assert_eq!(after, idle);
        assert_eq!(effect, SessionEffect::None);

        let collecting = step(typed("/weat", &catalog), SessionEvent::Confirm, &catalog);
        let after = step(collecting.clone(), SessionEvent::BufferChanged("x".into()), &catalog);
        assert_eq!(after, collecting);
    }
}
