//! Oceanview core types: session storage, configuration and shared errors

pub mod config;
pub mod error;
pub mod session;
pub mod validation;

pub use config::FrontendConfig;
pub use error::{CoreError, CoreResult};
pub use session::{MemorySessionStore, SessionKeys, SessionStore};
pub use validation::ValidateConfig;
