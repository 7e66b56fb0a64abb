//! Terminal forms for the engine's collaborator ports

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use dialoguer::{Input, Select};
use promptbar::{Candidate, PromptTemplate, TemplateCreator, VariableCollector};

/// Answers value-collection requests from `--var` presets, asking
/// interactively for anything missing
pub struct TerminalForms {
    presets: HashMap<String, String>,
    interactive: bool,
}

impl TerminalForms {
    pub fn new(presets: HashMap<String, String>, interactive: bool) -> Self {
        Self {
            presets,
            interactive,
        }
    }
}

impl VariableCollector for TerminalForms {
    fn collect(&self, template: &PromptTemplate, variables: &[String]) -> Option<Vec<String>> {
        if self.interactive {
            eprintln!("{} {}", "Fill in".dimmed(), template.name.cyan());
        }

        let mut values = Vec::with_capacity(variables.len());
        for name in variables {
            if let Some(value) = self.presets.get(name) {
                values.push(value.clone());
                continue;
            }
            if !self.interactive {
                tracing::warn!(variable = %name, "No value given and input is disabled");
                return None;
            }
            // An interrupted prompt counts as cancelling the whole form
            let value = Input::<String>::new()
                .with_prompt(name.as_str())
                .allow_empty(true)
                .interact_text()
                .ok()?;
            values.push(value);
        }
        Some(values)
    }
}

impl TemplateCreator for TerminalForms {
    fn create(&self) -> Option<PromptTemplate> {
        if !self.interactive {
            return None;
        }

        eprintln!("{}", "New Prompt".bold());
        match read_template_fields(None) {
            Ok((name, description, content)) => {
                Some(PromptTemplate::new(name, content, description))
            }
            Err(e) => {
                tracing::info!("Prompt creation cancelled: {}", e);
                None
            }
        }
    }
}

/// Ask for name, description and content, pre-filled from `existing`
pub fn read_template_fields(existing: Option<&PromptTemplate>) -> Result<(String, String, String)> {
    let name: String = Input::new()
        .with_prompt("Name")
        .with_initial_text(existing.map(|t| t.name.as_str()).unwrap_or(""))
        .interact_text()
        .context("Failed to read name")?;
    if name.trim().is_empty() {
        bail!("Prompt name must not be empty");
    }

    let description: String = Input::new()
        .with_prompt("Description")
        .with_initial_text(existing.map(|t| t.description.as_str()).unwrap_or(""))
        .allow_empty(true)
        .interact_text()
        .context("Failed to read description")?;

    let content: String = Input::new()
        .with_prompt("Content (use {{variable}} for placeholders)")
        .with_initial_text(existing.map(|t| t.content.as_str()).unwrap_or(""))
        .allow_empty(true)
        .interact_text()
        .context("Failed to read content")?;

    Ok((name, description, content.trim().to_string()))
}

/// Let the user pick a candidate; `None` when dismissed
pub fn pick_candidate(candidates: &[Candidate]) -> Result<Option<usize>> {
    let items: Vec<&str> = candidates.iter().map(Candidate::label).collect();
    Select::new()
        .with_prompt("Prompt")
        .items(&items)
        .default(0)
        .interact_opt()
        .context("Failed to read selection")
}
