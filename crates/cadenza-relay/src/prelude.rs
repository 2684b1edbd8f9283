//! Prelude module - commonly used types for convenient import.
//!
//! Use `use cadenza_relay::prelude::*;` to import all essential types.

// Relay
pub use crate::{NotificationKind, SessionEventRelay};

// Client surface
pub use crate::{ArcClient, BrowserCallback, BrowsingClient, SessionClient};

// Handle
pub use crate::{ClientHandle, HandleReleased};

// Executor contract
pub use crate::{TokioExecutor, UnitOfWork, WorkExecutor};
