pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStorage;

pub use session::{default_session, PlatformStorage, Session, AUTH_TOKEN_KEY, ENTRY_VERIFIED_KEY};
pub use storage::SessionStorage;
