pub mod store; // src/store/{mod,kv,scan}.rs

// Convenience re-exports
pub use store::{Snippet, SnippetStore};
