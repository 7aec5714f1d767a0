pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ApiConfig, ClientConfig, ConfigError, UiConfig};
pub use session::{Session, SessionSnapshot, SessionStore, TOKEN_KEY, USER_ID_KEY};
