//! Cadenza Relay - delivers remote session notifications to a local client.
//!
//! This crate provides:
//! - A weak client handle with an explicit, concurrently observable
//!   liveness state
//! - The [`SessionEventRelay`], which guards every incoming notification
//!   against a released client and malformed payloads
//! - The work-submission contract used to move browsing callbacks off the
//!   transport thread
//!
//! # Architecture
//!
//! The transport calls one relay method per notification kind, possibly
//! from several threads at once. Each method resolves the weak handle,
//! decodes and validates the raw payload, and either invokes the client
//! directly on the calling thread (session kinds) or submits the callback
//! to the client's registered executor (browsing kinds). No method ever
//! returns an error to the transport: late, misdirected, or garbled
//! notifications are dropped with a log line.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cadenza_relay::{ArcClient, SessionClient, SessionEventRelay};
//!
//! struct Quiet;
//! impl SessionClient for Quiet {}
//!
//! let client: ArcClient = Arc::new(Quiet);
//! let relay = SessionEventRelay::bind(&client);
//!
//! // Transport side: deliver a notification.
//! relay.on_repeat_mode_changed(1);
//!
//! // Owner side: tear down; later deliveries are dropped.
//! relay.destroy();
//! relay.on_repeat_mode_changed(2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod client;
mod executor;
mod handle;
mod kind;
mod relay;

pub use client::{ArcClient, BrowserCallback, BrowsingClient, SessionClient};
pub use executor::{TokioExecutor, UnitOfWork, WorkExecutor};
pub use handle::{ClientHandle, HandleReleased};
pub use kind::NotificationKind;
pub use relay::SessionEventRelay;
