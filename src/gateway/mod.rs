//! Generative service gateway: client trait, wire schemas, and prompts.
//!
//! ## Key Types
//!
//! - `LlmClient`: Schema-constrained JSON generation trait
//! - `HttpLlmClient`: Blocking Gemini `generateContent` implementation
//! - `FakeLlmClient`: Scripted responses for tests
//! - `LlmError`: Everything that can go wrong at the service boundary

pub mod client;
pub mod prompts;
pub mod schema;

pub use client::{FakeLlmClient, HttpLlmClient, LlmClient, LlmError};
