// ABOUTME: AgentFacts (NANDA JSON-LD) schema support.
// ABOUTME: Groups the document generator and the required/recommended-field validator.

pub mod generate;
pub mod validate;

/// JSON-LD context written into generated documents.
pub const NANDA_CONTEXT: &str = "https://nanda.dev/ns/agent-facts/v1";

/// Prefix every valid `@context` must start with.
pub const NANDA_NAMESPACE_PREFIX: &str = "https://nanda.dev";

/// Prefix every valid `id` must start with.
pub const NANDA_ID_PREFIX: &str = "nanda:";
