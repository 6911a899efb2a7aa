//! Tabsync Store - State and Coordination
//!
//! Everything between the pure grid model and the HTTP layer: the persisted
//! key-value state store trait, the clock abstraction, the persisted-window
//! rate limiter, the single process-wide store lock, row lookup across
//! sheets, and the row-identifier assignment pass.

pub mod assign;
pub mod clock;
pub mod index;
pub mod kv;
pub mod limiter;
pub mod lock;

// Re-export commonly used types
pub use assign::{assign_all, assign_row_ids, AssignReport};
pub use clock::{Clock, ManualClock, SystemClock};
pub use index::{find_row, RowLocation};
pub use kv::{InMemoryStateStore, StateStore, SECRET_TOKEN_KEY};
pub use limiter::{RateCategory, RateLimiter};
pub use lock::{LockTimeout, SheetGuard, SheetLock};
