// Deterministic career matching: static catalog, scoring rules, ranking engine.
// No I/O and no LLM calls in this module.

pub mod catalog;
pub mod engine;
pub mod rules;

pub use catalog::Catalog;
pub use engine::match_careers;
