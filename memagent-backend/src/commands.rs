//! Teach-command trigger phrases and the format descriptions surfaced to
//! the model. Single source of truth: the agent matches against the phrase
//! lists, the system prompt renders the descriptions and examples.

/// Trigger phrases for teach-a-fact commands, matched in list order.
/// Fact triggers take precedence over procedure triggers when both could
/// match the same message.
pub const FACT_TRIGGERS: &[&str] = &[
    "remember that",
    "remember this",
    "remember this fact",
    "remember this knowledge",
    "remember this information",
    "remember this detail",
];

/// Trigger phrases for teach-a-procedure commands, matched in list order.
pub const PROCEDURE_TRIGGERS: &[&str] = &[
    "remember the procedure",
    "remember the steps for",
    "remember the steps",
];

/// First phrase in `triggers` (list order) found anywhere in the
/// lower-cased message.
pub fn first_trigger<'a>(message: &str, triggers: &[&'a str]) -> Option<&'a str> {
    let lowered = message.to_lowercase();
    triggers
        .iter()
        .copied()
        .find(|trigger| lowered.contains(trigger))
}

pub const FACT_FORMAT_DESCRIPTION: &str = "\
To teach me a new fact, use one of these formats:
- \"Remember that [fact]\"
- \"Remember this [fact]\"
- \"Remember this fact [fact]\"
- \"Remember this knowledge [fact]\"
- \"Remember this information [fact]\"
- \"Remember this detail [fact]\"";

pub const PROCEDURE_FORMAT_DESCRIPTION: &str = "\
To teach me a new procedure, use one of these formats:
- \"Remember the procedure [procedure_name]: [step1], [step2], [step3]\"
- \"Remember the steps for [procedure_name]: [step1], [step2], [step3]\"
- \"Remember the steps [procedure_name]: [step1], [step2], [step3]\"";

pub const FACT_FORMAT_EXAMPLES: &[&str] = &[
    "Remember that Python is a programming language",
    "Remember this fact: The user's name is John",
    "Remember this knowledge: Machine learning uses algorithms",
];

pub const PROCEDURE_FORMAT_EXAMPLES: &[&str] = &[
    "Remember the procedure making coffee: boil water, add coffee grounds, stir, wait 5 minutes",
    "Remember the steps for greeting: say hello, ask how they are, wait for response",
    "Remember the steps troubleshooting: identify problem, check common causes, test solution",
];
