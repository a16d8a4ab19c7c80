//! File-backed memory for the agent.
//!
//! Four categories, each persisted as one whole JSON document under the
//! memory root:
//! - facts.json — semantic knowledge (array)
//! - procedures.json — named step lists (object keyed by name)
//! - interactions.json — user/agent exchanges (array)
//! - short_term_memory.json — importance-weighted working notes (array)
//!
//! Retrieval is pure keyword overlap; there is no embedding index and no
//! ranking signal beyond term counts.

pub mod persist;
pub mod records;
pub mod search;
pub mod store;


pub use records::{Fact, Interaction, Procedure, ShortTermEntry};
pub use store::Memory;
