//! Prompt Driver
//!
//! Runs the session reducer and resolves its effects through the
//! collaborator ports, so a caller only has to feed keystrokes.

use crate::domain::entities::PromptCatalog;
use crate::ports::{TemplateCreator, VariableCollector};

use super::{PromptSession, SessionEffect, SessionEvent};

pub struct PromptDriver<'a, V, T>
where
    V: VariableCollector + ?Sized,
    T: TemplateCreator + ?Sized,
{
    collector: &'a V,
    creator: &'a T,
}

impl<'a, V, T> PromptDriver<'a, V, T>
where
    V: VariableCollector + ?Sized,
    T: TemplateCreator + ?Sized,
{
    pub fn new(collector: &'a V, creator: &'a T) -> Self {
        Self { collector, creator }
    }

    /// Feed one event and follow up on any form it opens
    ///
    /// Returns the resulting session and, when the buffer was rewritten,
    /// the new buffer text. Templates produced by the creator are appended
    /// to `catalog`; a template the catalog rejects is logged and dropped,
    /// and the session still returns to idle with its buffer intact.
    pub fn dispatch(
        &self,
        session: PromptSession,
        event: SessionEvent,
        catalog: &mut PromptCatalog,
    ) -> (PromptSession, Option<String>) {
        let mut session = session;
        let mut event = event;

        loop {
            let (next, effect) = session.reduce(event, catalog.templates());
            session = next;

            event = match effect {
                SessionEffect::None => return (session, None),
                SessionEffect::BufferRewritten(buffer) => return (session, Some(buffer)),
                SessionEffect::CollectVariables {
                    template,
                    variables,
                } => match self.collector.collect(&template, &variables) {
                    Some(values) => SessionEvent::VariablesSubmitted(values),
                    None => {
                        tracing::info!(name = %template.name, "Variable collection cancelled");
                        SessionEvent::Cancel
                    }
                },
                SessionEffect::OpenTemplateCreator => {
                    if let Some(template) = self.creator.create() {
                        match catalog.add(template) {
                            Ok(added) => {
                                tracing::info!(id = %added.id, name = %added.name, "Prompt created")
                            }
                            Err(e) => tracing::warn!("Created prompt rejected: {}", e),
                        }
                    }
                    SessionEvent::TemplateFlowClosed
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PromptTemplate;

    struct FixedValues(Option<Vec<String>>);

    impl VariableCollector for FixedValues {
        fn collect(
            &self,
            _template: &PromptTemplate,
            _variables: &[String],
        ) -> Option<Vec<String>> {
            self.0.clone()
        }
    }

    struct FixedTemplate(Option<PromptTemplate>);

    impl TemplateCreator for FixedTemplate {
        fn create(&self) -> Option<PromptTemplate> {
            self.0.clone()
        }
    }

    fn catalog() -> PromptCatalog {
        PromptCatalog::from_templates(vec![PromptTemplate::new(
            "Email",
            "Dear {{name}}, {{body}}",
            "",
        )])
    }

    #[test]
    fn test_dispatch_collects_and_rewrites() {
        let collector = FixedValues(Some(vec!["Sam".into(), "thanks!".into()]));
        let creator = FixedTemplate(None);
        let driver = PromptDriver::new(&collector, &creator);
        let mut catalog = catalog();

        let session = PromptSession::with_buffer("/em");
        let (session, buffer) = driver.dispatch(session, SessionEvent::Confirm, &mut catalog);

        assert!(session.is_idle());
        assert_eq!(buffer.as_deref(), Some("Dear Sam, thanks!"));
    }

    #[test]
    fn test_dispatch_cancelled_collection_leaves_buffer() {
        let collector = FixedValues(None);
        let creator = FixedTemplate(None);
        let driver = PromptDriver::new(&collector, &creator);
        let mut catalog = catalog();

        let (session, buffer) = driver.dispatch(
            PromptSession::with_buffer("/em"),
            SessionEvent::Confirm,
            &mut catalog,
        );

        assert!(session.is_idle());
        assert_eq!(session.buffer(), "/em");
        assert_eq!(buffer, None);
    }

    #[test]
    fn test_dispatch_creates_template() {
        let collector = FixedValues(None);
        let creator = FixedTemplate(Some(PromptTemplate::new("Todo", "Make a todo list", "")));
        let driver = PromptDriver::new(&collector, &creator);
        let mut catalog = catalog();

        let (session, buffer) = driver.dispatch(
            PromptSession::with_buffer("/x"),
            SessionEvent::Confirm,
            &mut catalog,
        );

        assert!(session.is_idle());
        assert_eq!(buffer, None);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find_by_name("todo").is_some());
    }

    #[test]
    fn test_rejected_created_template_keeps_buffer() {
        let collector = FixedValues(None);
        let creator = FixedTemplate(Some(PromptTemplate::new_blank()));
        let driver = PromptDriver::new(&collector, &creator);
        let mut catalog = catalog();

        let (session, buffer) = driver.dispatch(
            PromptSession::with_buffer("keep this /x"),
            SessionEvent::Confirm,
            &mut catalog,
        );

        assert!(session.is_idle());
        assert_eq!(session.buffer(), "keep this /x");
        assert_eq!(buffer, None);
        assert_eq!(catalog.len(), 1);
    }
}
