//! Connection-time payloads.

use crate::command::SessionCommandGroup;
use crate::item::MediaItem;
use crate::playback::{PlaybackInfo, PlayerState, RepeatMode, ShuffleMode};
use crate::wire::WireRecord;

/// Raw fields of the `connected` notification, as handed over by the
/// transport before any decoding.
///
/// The peer sends its entire visible state in one call when the channel is
/// established; each structured field arrives as an undecoded record.
#[derive(Debug, Clone, Default)]
pub struct ConnectedRecord {
    /// Commands the session allows this client to send.
    pub allowed_commands: Option<WireRecord>,
    /// Player state integer code.
    pub player_state: i32,
    /// Currently selected item, if any.
    pub current_item: Option<WireRecord>,
    /// Timestamp of the position measurement, in milliseconds.
    pub position_event_time_ms: u64,
    /// Playback position at that timestamp, in milliseconds.
    pub position_ms: u64,
    /// Current playback speed factor.
    pub playback_speed: f32,
    /// Buffered position, in milliseconds.
    pub buffered_position_ms: u64,
    /// Output routing and volume description.
    pub playback_info: Option<WireRecord>,
    /// Shuffle mode integer code.
    pub shuffle_mode: i32,
    /// Repeat mode integer code.
    pub repeat_mode: i32,
    /// Current playlist; the peer may omit it entirely.
    pub playlist: Option<Vec<WireRecord>>,
}

/// Fully decoded session state delivered to the client on connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSnapshot {
    /// Commands the session allows this client to send.
    pub allowed_commands: Option<SessionCommandGroup>,
    /// Player state at connection time.
    pub player_state: PlayerState,
    /// Currently selected item, if any.
    pub current_item: Option<MediaItem>,
    /// Timestamp of the position measurement, in milliseconds.
    pub position_event_time_ms: u64,
    /// Playback position at that timestamp, in milliseconds.
    pub position_ms: u64,
    /// Current playback speed factor.
    pub playback_speed: f32,
    /// Buffered position, in milliseconds.
    pub buffered_position_ms: u64,
    /// Output routing and volume description.
    pub playback_info: Option<PlaybackInfo>,
    /// Shuffle mode at connection time.
    pub shuffle_mode: ShuffleMode,
    /// Repeat mode at connection time.
    pub repeat_mode: RepeatMode,
    /// Current playlist, with undecodable entries already filtered out;
    /// absent when the peer sent none.
    pub playlist: Option<Vec<MediaItem>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_record_default_is_bare() {
        let record = ConnectedRecord::default();
        assert!(record.allowed_commands.is_none());
        assert!(record.playlist.is_none());
        assert_eq!(record.player_state, 0);
    }
}
