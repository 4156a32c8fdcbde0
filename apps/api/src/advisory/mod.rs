// Advisory layer: scheme shortlist, deterministic fallback, sanitizer for
// generated output, and the orchestrator that ties them together.
// All generation calls go through llm_client; nothing here talks to the provider.

pub mod advisor;
pub mod fallback;
pub mod language;
pub mod prompts;
pub mod sanitizer;
pub mod schemes;

pub use advisor::Advisor;
