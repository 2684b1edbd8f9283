//! Client-side traits the relay delivers into.
//!
//! Every method receives fully decoded, validated payloads; clients never
//! see wire records. All methods default to no-ops so a client only
//! implements the notifications it cares about.

use std::sync::Arc;

use cadenza_core::{
    BufferingState, CommandButton, ConnectionSnapshot, Extras, MediaItem, MediaMetadata,
    PlaybackInfo, PlayerState, RepeatMode, SessionCommand, SessionCommandGroup, ShuffleMode,
};

use crate::executor::WorkExecutor;

/// Shared client wrapper.
pub type ArcClient = Arc<dyn SessionClient>;

impl std::fmt::Debug for dyn SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn SessionClient")
    }
}

/// The local client receiving session notifications.
///
/// Session methods are invoked synchronously on the transport thread that
/// delivered the notification; implementations must not block it.
pub trait SessionClient: Send + Sync {
    /// The session selected a new current item, or cleared it (`None`).
    fn on_current_item_changed(&self, item: Option<MediaItem>) {
        let _ = item;
    }

    /// Player state changed at `event_time_ms`, with the playback position
    /// measured at that time.
    fn on_player_state_changed(&self, event_time_ms: u64, position_ms: u64, state: PlayerState) {
        let _ = (event_time_ms, position_ms, state);
    }

    /// Playback speed changed.
    fn on_playback_speed_changed(&self, event_time_ms: u64, position_ms: u64, speed: f32) {
        let _ = (event_time_ms, position_ms, speed);
    }

    /// Buffering progress changed for `item`.
    fn on_buffering_state_changed(
        &self,
        item: Option<MediaItem>,
        state: BufferingState,
        buffered_position_ms: u64,
    ) {
        let _ = (item, state, buffered_position_ms);
    }

    /// The playlist was replaced. Undecodable entries have been filtered out.
    fn on_playlist_changed(&self, playlist: Vec<MediaItem>, metadata: Option<MediaMetadata>) {
        let _ = (playlist, metadata);
    }

    /// The playlist metadata changed; `None` clears it.
    fn on_playlist_metadata_changed(&self, metadata: Option<MediaMetadata>) {
        let _ = metadata;
    }

    /// Repeat mode changed.
    fn on_repeat_mode_changed(&self, mode: RepeatMode) {
        let _ = mode;
    }

    /// Shuffle mode changed.
    fn on_shuffle_mode_changed(&self, mode: ShuffleMode) {
        let _ = mode;
    }

    /// Output routing or volume description changed.
    fn on_playback_info_changed(&self, info: PlaybackInfo) {
        let _ = info;
    }

    /// A seek requested earlier finished at `seek_position_ms`.
    fn on_seek_completed(&self, event_time_ms: u64, position_ms: u64, seek_position_ms: u64) {
        let _ = (event_time_ms, position_ms, seek_position_ms);
    }

    /// The session reported a playback error.
    fn on_error(&self, code: i32, extras: Option<Extras>) {
        let _ = (code, extras);
    }

    /// Available media routes changed.
    fn on_routes_changed(&self, routes: Vec<Extras>) {
        let _ = routes;
    }

    /// The channel to the session is established; carries the session's
    /// entire visible state.
    fn on_connected(&self, snapshot: ConnectionSnapshot) {
        let _ = snapshot;
    }

    /// The session went away. The client should shut down its side of the
    /// channel; no further notifications will follow.
    fn on_disconnected(&self) {}

    /// The session published a new custom button layout. Undecodable
    /// buttons have been filtered out.
    fn on_custom_layout_changed(&self, layout: Vec<CommandButton>) {
        let _ = layout;
    }

    /// The set of commands the session accepts changed.
    fn on_allowed_commands_changed(&self, commands: SessionCommandGroup) {
        let _ = commands;
    }

    /// The session sent a custom command.
    fn on_custom_command(&self, command: SessionCommand, args: Option<Extras>) {
        let _ = (command, args);
    }

    /// Capability query: the browsing side of this client, if it has one.
    ///
    /// Browsing-kind notifications are only deliverable when this returns
    /// `Some`; a plain client silently ignores them.
    fn browsing(&self) -> Option<&dyn BrowsingClient> {
        None
    }
}

/// Capability surface of a client that also browses the session's library.
///
/// Browsing callbacks are not invoked on the transport thread; the relay
/// submits them to [`executor`](BrowsingClient::executor) and returns.
pub trait BrowsingClient: Send + Sync {
    /// The callback object receiving browsing notifications.
    fn callback(&self) -> Arc<dyn BrowserCallback>;

    /// The execution context browsing callbacks run on.
    fn executor(&self) -> Arc<dyn WorkExecutor>;
}

/// Browsing notifications, delivered on the client's registered executor.
pub trait BrowserCallback: Send + Sync {
    /// The library root requested earlier has been resolved.
    fn on_library_root_resolved(
        &self,
        root_hints: Option<Extras>,
        root_id: Option<String>,
        root_extras: Option<Extras>,
    ) {
        let _ = (root_hints, root_id, root_extras);
    }

    /// A single item lookup finished; `None` means the id is unknown.
    fn on_item_resolved(&self, item_id: String, item: Option<MediaItem>) {
        let _ = (item_id, item);
    }

    /// A page of children finished loading. Undecodable entries have been
    /// filtered out; `None` means the parent could not be listed.
    fn on_children_resolved(
        &self,
        parent_id: String,
        page: u32,
        page_size: u32,
        children: Option<Vec<MediaItem>>,
        extras: Option<Extras>,
    ) {
        let _ = (parent_id, page, page_size, children, extras);
    }

    /// The result count for an outstanding search changed.
    fn on_search_result_changed(&self, query: String, item_count: u32, extras: Option<Extras>) {
        let _ = (query, item_count, extras);
    }

    /// A page of search results finished loading.
    fn on_search_result_resolved(
        &self,
        query: String,
        page: u32,
        page_size: u32,
        items: Option<Vec<MediaItem>>,
        extras: Option<Extras>,
    ) {
        let _ = (query, page, page_size, items, extras);
    }

    /// The children of `parent_id` changed on the session side.
    fn on_children_changed(&self, parent_id: String, item_count: u32, extras: Option<Extras>) {
        let _ = (parent_id, item_count, extras);
    }
}
