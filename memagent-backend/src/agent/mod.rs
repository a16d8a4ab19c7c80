//! The conversational agent: routes teach commands into the memory store,
//! assembles retrieved context, and round-trips the message through the
//! completion endpoint.

use crate::ai::{AiError, Message, OpenAiClient};
use crate::commands;
use crate::config::Config;
use crate::memory::Memory;
use crate::memory::store::DEFAULT_SEARCH_LIMIT;
use crate::prompts;

pub struct Agent {
    pub memory: Memory,
    client: OpenAiClient,
    system_prompt: String,
}

impl Agent {
    pub fn new(config: &Config) -> Result<Self, AiError> {
        let mut memory = Memory::new(&config.memory_dir);

        // Seed the self-knowledge facts once per root.
        if memory.facts.is_empty() {
            for fact in prompts::seed_assistant_facts() {
                memory.add_fact(fact, "fact");
            }
            log::info!("Seeded {} assistant facts", memory.facts.len());
        }

        let client = OpenAiClient::new(&config.api_key, &config.api_endpoint, &config.model)?;

        Ok(Self {
            memory,
            client,
            system_prompt: prompts::system_prompt(),
        })
    }

    /// Process one user turn: apply any teach command, send the composed
    /// prompt plus retrieved context to the model, and record the exchange.
    /// Nothing is recorded when the completion call fails, so every stored
    /// interaction has a real agent response.
    pub async fn process_message(&mut self, user_input: &str) -> Result<String, AiError> {
        // Fact triggers take precedence over procedure triggers.
        if let Some(trigger) = commands::first_trigger(user_input, commands::FACT_TRIGGERS) {
            self.learn_fact(user_input, trigger);
        } else if let Some(trigger) =
            commands::first_trigger(user_input, commands::PROCEDURE_TRIGGERS)
        {
            self.learn_procedure(user_input, trigger);
        }

        let context = self.memory.build_context(user_input, DEFAULT_SEARCH_LIMIT);
        let messages = vec![
            Message::system(self.system_prompt.clone()),
            Message::system(format!("Relevant memory:\n{}", context)),
            Message::user(user_input),
        ];

        let reply = self.client.generate_text(messages).await?;
        self.memory.add_interaction(user_input, &reply, None);
        Ok(reply)
    }

    /// Store the text after the trigger phrase as a new fact, keeping the
    /// original casing of the message. An empty payload stores nothing.
    pub fn learn_fact(&mut self, message: &str, trigger: &str) {
        let Some(payload) = payload_after_trigger(message, trigger) else {
            log::warn!("Fact command with empty payload: {:?}", message);
            return;
        };

        // "Remember this fact: X" carries a leading separator; drop it.
        let fact = payload.trim_start_matches(':').trim();
        if fact.is_empty() {
            log::warn!("Fact command with empty payload: {:?}", message);
            return;
        }

        log::info!("Learning fact: {}", fact);
        self.memory.add_fact(fact, "fact");
    }

    /// Parse "<name>: <step>, <step>, ..." after the trigger phrase and
    /// store the procedure with numbered steps. Malformed payloads (no
    /// colon, empty name, no steps) store nothing.
    pub fn learn_procedure(&mut self, message: &str, trigger: &str) {
        let Some(payload) = payload_after_trigger(message, trigger) else {
            log::warn!("Procedure command with empty payload: {:?}", message);
            return;
        };

        let Some((name, steps_raw)) = payload.split_once(':') else {
            log::warn!("Procedure command without a name/steps separator: {:?}", message);
            return;
        };

        let name = name.trim();
        let steps: Vec<String> = steps_raw
            .split(',')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .enumerate()
            .map(|(index, step)| format!("{}. {}", index + 1, step))
            .collect();

        if name.is_empty() || steps.is_empty() {
            log::warn!("Procedure command missing a name or steps: {:?}", message);
            return;
        }

        log::info!("Learning procedure: {} ({} steps)", name, steps.len());
        // The raw steps text doubles as the description, so the procedure
        // is findable by its step words.
        self.memory.add_procedure(name, steps, steps_raw.trim());
    }
}

/// Original-cased text after the first occurrence of the (lower-case)
/// trigger phrase, or None when nothing but whitespace follows.
fn payload_after_trigger(message: &str, trigger: &str) -> Option<String> {
    let lowered = message.to_lowercase();
    let start = lowered.find(trigger)? + trigger.len();
    let payload = message.get(start..).unwrap_or("").trim();
    (!payload.is_empty()).then(|| payload.to_string())
}
