//! Career guidance API: match, advise, assemble.
pub mod handlers;
