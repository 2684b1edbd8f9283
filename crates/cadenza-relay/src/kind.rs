//! Notification kind tags, used in diagnostics.

use std::fmt;

/// Tag for every notification kind the relay can deliver.
///
/// The transport demultiplexes by kind before calling the relay; the tag
/// exists so guard failures can name the kind they dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Current item selected or cleared.
    CurrentItemChanged,
    /// Player state transition.
    PlayerStateChanged,
    /// Playback speed change.
    PlaybackSpeedChanged,
    /// Buffering progress change.
    BufferingStateChanged,
    /// Playlist replaced.
    PlaylistChanged,
    /// Playlist metadata replaced or cleared.
    PlaylistMetadataChanged,
    /// Repeat mode change.
    RepeatModeChanged,
    /// Shuffle mode change.
    ShuffleModeChanged,
    /// Output routing / volume change.
    PlaybackInfoChanged,
    /// A seek finished.
    SeekCompleted,
    /// Playback error report.
    Error,
    /// Media route list change.
    RoutesChanged,
    /// Channel established, full state snapshot.
    Connected,
    /// Channel torn down by the peer.
    Disconnected,
    /// Custom button layout replaced.
    CustomLayoutChanged,
    /// Allowed command set replaced.
    AllowedCommandsChanged,
    /// Peer-defined command.
    CustomCommand,
    /// Browsing: library root lookup finished.
    LibraryRootResolved,
    /// Browsing: single item lookup finished.
    ItemResolved,
    /// Browsing: children page loaded.
    ChildrenResolved,
    /// Browsing: search result count changed.
    SearchResultChanged,
    /// Browsing: search result page loaded.
    SearchResultResolved,
    /// Browsing: a parent's children changed.
    ChildrenChanged,
}

impl NotificationKind {
    /// Stable name used in log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrentItemChanged => "current_item_changed",
            Self::PlayerStateChanged => "player_state_changed",
            Self::PlaybackSpeedChanged => "playback_speed_changed",
            Self::BufferingStateChanged => "buffering_state_changed",
            Self::PlaylistChanged => "playlist_changed",
            Self::PlaylistMetadataChanged => "playlist_metadata_changed",
            Self::RepeatModeChanged => "repeat_mode_changed",
            Self::ShuffleModeChanged => "shuffle_mode_changed",
            Self::PlaybackInfoChanged => "playback_info_changed",
            Self::SeekCompleted => "seek_completed",
            Self::Error => "error",
            Self::RoutesChanged => "routes_changed",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::CustomLayoutChanged => "custom_layout_changed",
            Self::AllowedCommandsChanged => "allowed_commands_changed",
            Self::CustomCommand => "custom_command",
            Self::LibraryRootResolved => "library_root_resolved",
            Self::ItemResolved => "item_resolved",
            Self::ChildrenResolved => "children_resolved",
            Self::SearchResultChanged => "search_result_changed",
            Self::SearchResultResolved => "search_result_resolved",
            Self::ChildrenChanged => "children_changed",
        }
    }

    /// Whether the kind is only meaningful to a browsing client.
    #[must_use]
    pub const fn is_browsing(self) -> bool {
        matches!(
            self,
            Self::LibraryRootResolved
                | Self::ItemResolved
                | Self::ChildrenResolved
                | Self::SearchResultChanged
                | Self::SearchResultResolved
                | Self::ChildrenChanged
        )
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
