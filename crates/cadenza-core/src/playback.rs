//! Playback state and volume routing payloads.
//!
//! Scalar states arrive on the wire as integer codes; conversion keeps the
//! peer's numbering and maps unrecognized codes to an explicit `Other`
//! variant rather than failing the whole notification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player lifecycle state reported by the remote session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    /// No item selected, player idle.
    Idle,
    /// Playback paused.
    Paused,
    /// Actively playing.
    Playing,
    /// The player hit an unrecoverable error.
    Error,
    /// A code this client does not recognize.
    Other(i32),
}

impl PlayerState {
    /// Convert the wire integer code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Idle,
            1 => Self::Paused,
            2 => Self::Playing,
            3 => Self::Error,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Paused => write!(f, "paused"),
            Self::Playing => write!(f, "playing"),
            Self::Error => write!(f, "error"),
            Self::Other(code) => write!(f, "other({code})"),
        }
    }
}

/// Buffering progress for the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferingState {
    /// Buffering state is not known.
    Unknown,
    /// Enough data buffered to keep playing.
    BufferingAndPlayable,
    /// Buffering, playback would starve.
    BufferingAndStarved,
    /// Buffering finished for the whole item.
    Complete,
    /// A code this client does not recognize.
    Other(i32),
}

impl BufferingState {
    /// Convert the wire integer code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::BufferingAndPlayable,
            2 => Self::BufferingAndStarved,
            3 => Self::Complete,
            other => Self::Other(other),
        }
    }
}

/// Playlist repeat behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// No repeat.
    None,
    /// Repeat the current item.
    One,
    /// Repeat the whole playlist.
    All,
    /// Repeat across the session's item group.
    Group,
    /// A code this client does not recognize.
    Other(i32),
}

impl RepeatMode {
    /// Convert the wire integer code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::One,
            2 => Self::All,
            3 => Self::Group,
            other => Self::Other(other),
        }
    }
}

/// Playlist shuffle behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    /// Play in playlist order.
    None,
    /// Shuffle the whole playlist.
    All,
    /// Shuffle across the session's item group.
    Group,
    /// A code this client does not recognize.
    Other(i32),
}

impl ShuffleMode {
    /// Convert the wire integer code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::All,
            2 => Self::Group,
            other => Self::Other(other),
        }
    }
}

/// How playback output is produced and controlled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackInfo {
    /// 1 for local output, 2 for remote (routed) output.
    pub playback_type: i32,
    /// Volume control capability code.
    pub control_type: i32,
    /// Maximum volume step of the output.
    pub max_volume: i32,
    /// Current volume step of the output.
    pub current_volume: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_state_codes() {
        assert_eq!(PlayerState::from_code(0), PlayerState::Idle);
        assert_eq!(PlayerState::from_code(2), PlayerState::Playing);
        assert_eq!(PlayerState::from_code(3), PlayerState::Error);
    }

    #[test]
    fn test_unknown_codes_are_preserved() {
        assert_eq!(PlayerState::from_code(42), PlayerState::Other(42));
        assert_eq!(BufferingState::from_code(-1), BufferingState::Other(-1));
        assert_eq!(RepeatMode::from_code(9), RepeatMode::Other(9));
        assert_eq!(ShuffleMode::from_code(9), ShuffleMode::Other(9));
    }

    #[test]
    fn test_playback_info_decodes() {
        let info: PlaybackInfo = serde_json::from_value(serde_json::json!({
            "playback_type": 1,
            "control_type": 2,
            "max_volume": 15,
            "current_volume": 7
        }))
        .unwrap();
        assert_eq!(info.max_volume, 15);
        assert_eq!(info.current_volume, 7);
    }
}
