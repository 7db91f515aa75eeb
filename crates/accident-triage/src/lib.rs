//! Decision-support engine for minor traffic accidents.
//!
//! A deterministic rule engine classifies structured accident facts into a
//! GREEN/YELLOW/RED risk bucket; a text-generation collaborator (when one is
//! configured) adds a prose explanation and clarifying questions, with
//! templated fallbacks so the classification never depends on it.

pub mod config;
pub mod error;
pub mod generation;
pub mod telemetry;
pub mod workflows;
