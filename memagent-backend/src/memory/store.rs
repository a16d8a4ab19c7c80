use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::memory::persist;
use crate::memory::records::{Fact, Interaction, Procedure, ShortTermEntry};
use crate::memory::search::search_keywords;

pub const FACTS_FILE: &str = "facts.json";
pub const PROCEDURES_FILE: &str = "procedures.json";
pub const INTERACTIONS_FILE: &str = "interactions.json";
pub const SHORT_TERM_FILE: &str = "short_term_memory.json";

/// Per-section retrieval limit used by callers that don't pick their own.
pub const DEFAULT_SEARCH_LIMIT: usize = 3;

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Searchable text of an interaction. The context path injects a line break
/// between the two halves; search uses a plain space.
fn interaction_content(interaction: &Interaction, separator: &str) -> String {
    format!(
        "user: {}{}agent: {}",
        interaction.user_message, separator, interaction.agent_message
    )
}

/// The agent's four memory categories, held in memory for the lifetime of
/// the store and rewritten to disk after every mutation. Missing or broken
/// backing files load as empty collections.
pub struct Memory {
    root: PathBuf,
    pub facts: Vec<Fact>,
    pub procedures: BTreeMap<String, Procedure>,
    pub interactions: Vec<Interaction>,
    pub short_term: Vec<ShortTermEntry>,
}

impl Memory {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        persist::ensure_dir(&root);

        Self {
            facts: persist::load_collection(&root, FACTS_FILE).unwrap_or_default(),
            procedures: persist::load_collection(&root, PROCEDURES_FILE).unwrap_or_default(),
            interactions: persist::load_collection(&root, INTERACTIONS_FILE).unwrap_or_default(),
            short_term: persist::load_collection(&root, SHORT_TERM_FILE).unwrap_or_default(),
            root,
        }
    }

    /// Append a fact. No validation here: the command layer decides what is
    /// worth storing.
    pub fn add_fact(&mut self, fact: impl Into<String>, category: impl Into<String>) {
        self.facts.push(Fact {
            fact: fact.into(),
            category: category.into(),
            timestamp: now_iso(),
        });
        persist::save_collection(&self.root, FACTS_FILE, &self.facts);
    }

    /// Insert or overwrite a procedure. Names are unique; re-teaching a name
    /// replaces its description, steps and timestamp.
    pub fn add_procedure(
        &mut self,
        name: impl Into<String>,
        steps: Vec<String>,
        description: impl Into<String>,
    ) {
        let name = name.into();
        self.procedures.insert(
            name.clone(),
            Procedure {
                name,
                description: description.into(),
                steps,
                timestamp: now_iso(),
            },
        );
        persist::save_collection(&self.root, PROCEDURES_FILE, &self.procedures);
    }

    pub fn add_interaction(
        &mut self,
        user_message: impl Into<String>,
        agent_message: impl Into<String>,
        metadata: Option<Value>,
    ) {
        self.interactions.push(Interaction {
            user_message: user_message.into(),
            agent_message: agent_message.into(),
            metadata,
            timestamp: now_iso(),
        });
        persist::save_collection(&self.root, INTERACTIONS_FILE, &self.interactions);
    }

    pub fn add_short_term(&mut self, content: impl Into<String>, importance: f64) {
        self.short_term.push(ShortTermEntry {
            content: content.into(),
            importance,
            timestamp: now_iso(),
        });
        persist::save_collection(&self.root, SHORT_TERM_FILE, &self.short_term);
    }

    pub fn search_facts(&self, query: &str, limit: usize) -> Vec<Fact> {
        search_keywords(query, &self.facts, |f| f.fact.clone(), limit)
    }

    pub fn search_procedures(&self, query: &str, limit: usize) -> Vec<Procedure> {
        let procedures: Vec<Procedure> = self.procedures.values().cloned().collect();
        search_keywords(
            query,
            &procedures,
            |p| format!("{} {}", p.name, p.description),
            limit,
        )
    }

    pub fn search_interactions(&self, query: &str, limit: usize) -> Vec<Interaction> {
        search_keywords(
            query,
            &self.interactions,
            |i| interaction_content(i, " "),
            limit,
        )
    }

    /// The last `limit` interactions in original insertion order.
    pub fn recent_interactions(&self, limit: usize) -> Vec<Interaction> {
        let start = self.interactions.len().saturating_sub(limit);
        self.interactions[start..].to_vec()
    }

    /// All short-term entries ordered by importance, then timestamp, both
    /// descending. Read-only projection; stored order is untouched.
    pub fn sorted_short_term(&self) -> Vec<ShortTermEntry> {
        let mut entries = self.short_term.clone();
        entries.sort_by(|a, b| {
            b.importance
                .total_cmp(&a.importance)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        entries
    }

    /// Compose the prompt context: recent interactions, top-matching facts
    /// and procedures, and all short-term notes sorted by importance. All
    /// four labels are always emitted, even over empty collections.
    pub fn build_context(&self, query: &str, limit: usize) -> String {
        let interactions = self
            .recent_interactions(limit)
            .iter()
            .map(|i| interaction_content(i, "\n"))
            .collect::<Vec<_>>()
            .join("\n");

        let facts = self
            .search_facts(query, limit)
            .iter()
            .map(|f| format!("Fact: {}", f.fact))
            .collect::<Vec<_>>()
            .join("\n");

        let procedures = self
            .search_procedures(query, limit)
            .iter()
            .enumerate()
            .map(|(index, p)| {
                format!(
                    "Procedure {}. {}: {}\nProcedure's Steps: \n{}",
                    index + 1,
                    p.name,
                    p.description,
                    p.steps.join("\n")
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let short_term = self
            .sorted_short_term()
            .iter()
            .map(|entry| format!("Short term memory: {}", entry.content))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Recent interactions: {}\nFacts: {}\nProcedures: {}\nRecent memory with current context sorted by importance and timestamp: {}",
            interactions, facts, procedures, short_term
        )
        .trim()
        .to_string()
    }
}
