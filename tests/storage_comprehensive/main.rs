//! Comprehensive integration suite over the public engramdb surface.
//!
//! Exercises the engine contracts and the agent-memory facades together,
//! the way an embedding host consumes them.

mod engine_contracts;
mod facades;
