//! Promptbar CLI - Prompt catalog and slash-command expansion
//!
//! Plays the UI role around the prompt engine: keeps the catalog on disk,
//! feeds buffer text through the picker and asks for placeholder values.

mod config;
mod forms;
mod store;

use std::collections::HashMap;
use std::io::IsTerminal;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use promptbar::{
    detect, rank, unique_placeholders, Candidate, PromptCatalog, PromptDriver, PromptRepository,
    PromptSession, PromptTemplate, SessionEvent,
};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use config::Config;
use forms::TerminalForms;
use store::JsonPromptStore;

#[derive(Parser)]
#[command(name = "promptbar")]
#[command(about = "Promptbar CLI - Slash-command prompt templates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the prompt catalog
    Prompt {
        #[command(subcommand)]
        action: PromptAction,
    },

    /// List the placeholders of a template text
    Vars {
        /// Template content
        content: String,
    },

    /// Show the trigger state and candidates for a buffer
    Candidates {
        /// Buffer text, cursor at the end (e.g. "Tell me about /wea")
        buffer: String,
    },

    /// Expand the trailing /command of a buffer with a prompt
    Expand {
        /// Buffer text, cursor at the end
        buffer: String,
        /// Candidate index to select (asks if not given)
        #[arg(short, long)]
        select: Option<usize>,
        /// Placeholder value as name=value (repeatable)
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
        /// Never prompt; fail when a value is missing
        #[arg(long)]
        no_input: bool,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum PromptAction {
    /// Add a prompt (asks for missing fields)
    Add {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Template content with {{placeholders}}
        #[arg(short, long)]
        content: Option<String>,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Folder to file the prompt under
        #[arg(short, long)]
        folder: Option<String>,
    },
    /// List prompts
    List {
        /// Only prompts in this folder
        #[arg(short, long)]
        folder: Option<String>,
    },
    /// Show one prompt
    Show {
        /// Prompt id or name
        prompt: String,
    },
    /// Replace a prompt's name, content and description
    Edit {
        /// Prompt id or name
        prompt: String,
    },
    /// Remove a prompt
    Remove {
        /// Prompt id or name
        prompt: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_tracing(&config);

    match cli.command {
        Commands::Prompt { action } => cmd_prompt(&config, action),
        Commands::Vars { content } => cmd_vars(&content),
        Commands::Candidates { buffer } => cmd_candidates(&config, &buffer),
        Commands::Expand {
            buffer,
            select,
            vars,
            no_input,
        } => cmd_expand(&config, buffer, select, vars, no_input),
        Commands::Config => cmd_config(&config),
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("PROMPTBAR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value but found '{}'", s)),
    }
}

fn open_store(config: &Config) -> Result<JsonPromptStore> {
    Ok(JsonPromptStore::new(config.prompts_path()?))
}

/// Resolve a prompt by id, falling back to a case-insensitive name match
fn resolve<'a>(catalog: &'a PromptCatalog, key: &str) -> Result<&'a PromptTemplate> {
    if let Ok(id) = key.parse::<Uuid>() {
        if let Some(template) = catalog.get(id) {
            return Ok(template);
        }
    }
    catalog
        .find_by_name(key)
        .with_context(|| format!("Prompt '{}' not found", key))
}

/// Templates to list, optionally narrowed to one folder
fn listed<'a>(catalog: &'a PromptCatalog, folder: Option<&'a str>) -> Vec<&'a PromptTemplate> {
    match folder {
        Some(folder) => catalog.in_folder(folder).collect(),
        None => catalog.templates().iter().collect(),
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_prompt(config: &Config, action: PromptAction) -> Result<()> {
    let store = open_store(config)?;
    let mut catalog = store.load()?;

    match action {
        PromptAction::Add {
            name,
            content,
            description,
            folder,
        } => {
            let template = match (name, content) {
                (Some(name), Some(content)) => PromptTemplate::new(
                    name,
                    content.trim(),
                    description.unwrap_or_default(),
                ),
                (None, None) => {
                    let (name, description, content) = forms::read_template_fields(None)?;
                    PromptTemplate::new(name, content, description)
                }
                _ => bail!("Provide both --name and --content, or neither to be asked"),
            };
            let template = match folder {
                Some(folder) => template.with_folder(folder),
                None => template,
            };

            let added = catalog.add(template)?;
            println!("{} Prompt '{}' added ({})", "✓".green(), added.name, added.id);
            store.save(&catalog)?;
        }

        PromptAction::List { folder } => {
            if catalog.is_empty() {
                println!("No prompts yet.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  promptbar prompt add --name <NAME> --content <TEXT>");
                return Ok(());
            }

            let templates = listed(&catalog, folder.as_deref());
            if templates.is_empty() {
                println!("No prompts in folder '{}'.", folder.unwrap_or_default());
                return Ok(());
            }

            println!("{}", "Prompts:".bold());
            for template in templates {
                let vars = template.variables();
                let vars_label = if vars.is_empty() {
                    String::new()
                } else {
                    format!(" {{{}}}", vars.join(", ")).yellow().to_string()
                };
                let folder_label = match &template.folder_id {
                    Some(folder) => format!(" [{}]", folder).blue().to_string(),
                    None => String::new(),
                };
                println!(
                    "  {} {}{}{} {}",
                    template.id.to_string()[..8].dimmed(),
                    template.name.cyan().bold(),
                    folder_label,
                    vars_label,
                    truncate_string(&template.description, 50).dimmed()
                );
            }
        }

        PromptAction::Show { prompt } => {
            let template = resolve(&catalog, &prompt)?;
            println!("{} {}", "Name:".bold(), template.name.cyan());
            println!("{} {}", "Id:".bold(), template.id);
            if let Some(folder) = &template.folder_id {
                println!("{} {}", "Folder:".bold(), folder);
            }
            if !template.description.is_empty() {
                println!("{} {}", "Description:".bold(), template.description);
            }
            println!("{} {}", "Variables:".bold(), template.variables().join(", "));
            println!("{}", "---".dimmed());
            println!("{}", template.content);
        }

        PromptAction::Edit { prompt } => {
            let existing = resolve(&catalog, &prompt)?.clone();
            let (name, description, content) = forms::read_template_fields(Some(&existing))?;

            let updated = catalog.update(existing.replaced_with(name, content, description))?;
            println!("{} Prompt '{}' updated", "✓".green(), updated.name);
            store.save(&catalog)?;
        }

        PromptAction::Remove { prompt } => {
            let id = resolve(&catalog, &prompt)?.id;
            let removed = catalog.remove(id)?;
            store.save(&catalog)?;
            println!("{} Prompt '{}' removed", "✓".green(), removed.name);
        }
    }

    Ok(())
}

fn cmd_vars(content: &str) -> Result<()> {
    for name in unique_placeholders(content) {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_candidates(config: &Config, buffer: &str) -> Result<()> {
    let catalog = open_store(config)?.load()?;
    let trigger = detect(buffer);

    if !trigger.is_active {
        println!("{}", "No /command at the end of the buffer.".dimmed());
        return Ok(());
    }

    println!("{} '{}'", "Filter:".bold(), trigger.filter_text);
    for (index, candidate) in rank(catalog.templates(), &trigger.filter_text)
        .iter()
        .enumerate()
    {
        let label = match candidate {
            Candidate::Real(template) => template.name.cyan().to_string(),
            Candidate::CreateNew => candidate.label().green().to_string(),
        };
        println!("  {:>2}. {}", index, label);
    }

    Ok(())
}

fn cmd_expand(
    config: &Config,
    buffer: String,
    select: Option<usize>,
    vars: Vec<(String, String)>,
    no_input: bool,
) -> Result<()> {
    let store = open_store(config)?;
    let mut catalog = store.load()?;
    let count_before = catalog.len();

    let interactive = !no_input && std::io::stdin().is_terminal();
    let forms = TerminalForms::new(vars.into_iter().collect::<HashMap<_, _>>(), interactive);
    let driver = PromptDriver::new(&forms, &forms);

    let (mut session, _) = driver.dispatch(
        PromptSession::new(),
        SessionEvent::BufferChanged(buffer),
        &mut catalog,
    );

    if session.is_idle() {
        println!("{}", session.buffer());
        return Ok(());
    }

    let candidates = session.candidates(catalog.templates());
    let index = match select {
        Some(index) if index < candidates.len() => index,
        Some(index) => bail!(
            "Candidate {} out of range (0..{})",
            index,
            candidates.len() - 1
        ),
        None if interactive => match forms::pick_candidate(&candidates)? {
            Some(index) => index,
            None => {
                println!("{}", session.buffer());
                return Ok(());
            }
        },
        None => 0,
    };

    for _ in 0..index {
        session = session
            .reduce(SessionEvent::NavigateNext, catalog.templates())
            .0;
    }

    let (session, rewritten) = driver.dispatch(session, SessionEvent::Confirm, &mut catalog);

    if catalog.len() != count_before {
        store.save(&catalog)?;
        eprintln!("{} Prompt saved to {:?}", "✓".green(), store.path());
    }

    match rewritten {
        Some(text) => println!("{}", text),
        None => {
            if no_input && candidates.get(index).is_some_and(|c| !c.is_create_new()) {
                bail!("Missing placeholder values; pass them with --var name=value");
            }
            println!("{}", session.buffer());
        }
    }

    Ok(())
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

fn cmd_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Prompts file: {:?}", config.prompts_path()?);
    println!("  Log level: {}", config.log_level.cyan());

    let catalog = open_store(config)?.load()?;
    println!("  Prompts: {}", catalog.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var() {
        assert_eq!(
            parse_var("city=Oslo").unwrap(),
            ("city".to_string(), "Oslo".to_string())
        );
        assert_eq!(
            parse_var("expr=a=b").unwrap(),
            ("expr".to_string(), "a=b".to_string())
        );
        assert!(parse_var("=x").is_err());
        assert!(parse_var("novalue").is_err());
    }

    #[test]
    fn test_resolve_by_id_or_name() {
        let mut catalog = PromptCatalog::new();
        let id = catalog
            .add(PromptTemplate::new("Weather", "Weather in {{city}}", ""))
            .unwrap()
            .id;

        assert_eq!(resolve(&catalog, &id.to_string()).unwrap().id, id);
        assert_eq!(resolve(&catalog, "weather").unwrap().id, id);
        assert!(resolve(&catalog, "missing").is_err());
    }

    #[test]
    fn test_listed_narrows_to_folder() {
        let mut catalog = PromptCatalog::new();
        catalog
            .add(PromptTemplate::new("Weather", "Weather in {{city}}", ""))
            .unwrap();
        catalog
            .add(PromptTemplate::new("Standup", "Today I {{plan}}", "").with_folder("work"))
            .unwrap();

        assert_eq!(listed(&catalog, None).len(), 2);
        let work: Vec<&str> = listed(&catalog, Some("work"))
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(work, vec!["Standup"]);
        assert!(listed(&catalog, Some("home")).is_empty());
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("ありがとうございます", 3), "ありが...");
    }
}
