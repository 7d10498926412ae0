// Engine library root
// UI-independent core: theme state and application, card search, remote document updates.

pub mod config;
pub mod error;
pub mod remote;
pub mod search;
pub mod theme;

pub use error::{EngineError, EngineResult};
