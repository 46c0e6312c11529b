//! Narration adapters.
//!
//! Only the mock lives here; the production LLM client is a separate
//! deployment concern outside this crate.

mod mock;

pub use mock::{MockNarration, MockNarrator};
