//! Prelude module - commonly used types for convenient import.
//!
//! Use `use cadenza_core::prelude::*;` to import all essential types.

// Wire layer
pub use crate::{DecodeError, Extras, WireRecord};

// Items
pub use crate::{MediaItem, MediaMetadata};

// Playback
pub use crate::{BufferingState, PlaybackInfo, PlayerState, RepeatMode, ShuffleMode};

// Commands
pub use crate::{CommandButton, SessionCommand, SessionCommandGroup};

// Connection
pub use crate::{ConnectedRecord, ConnectionSnapshot};
