//! Cadenza Core - Domain model for the Cadenza remote session relay.
//!
//! This crate provides:
//! - Typed payloads for session notifications (items, playback state,
//!   commands, connection snapshots)
//! - The opaque [`WireRecord`] envelope handed over by the transport, and
//!   the decode contract that turns it into typed payloads
//!
//! # Decode contract
//!
//! The transport delivers payload fields as optional [`WireRecord`]s. An
//! absent record means the peer did not send the field; a present record
//! that fails to decode is a malformed payload and is handled by the relay
//! layer, never by the client.
//!
//! ```rust
//! use cadenza_core::{MediaItem, WireRecord};
//!
//! let record = WireRecord::new(serde_json::json!({ "id": "song-1" }));
//! let item: MediaItem = record.decode().unwrap();
//! assert_eq!(item.id, "song-1");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod command;
mod item;
mod playback;
mod session;
mod wire;

pub use command::{CommandButton, SessionCommand, SessionCommandGroup};
pub use item::{MediaItem, MediaMetadata};
pub use playback::{BufferingState, PlaybackInfo, PlayerState, RepeatMode, ShuffleMode};
pub use session::{ConnectedRecord, ConnectionSnapshot};
pub use wire::{DecodeError, Extras, WireRecord};
