//! The notification relay: guard, decode, deliver.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use cadenza_core::{
    BufferingState, CommandButton, ConnectedRecord, ConnectionSnapshot, Extras, MediaItem,
    MediaMetadata, PlaybackInfo, PlayerState, RepeatMode, SessionCommand, SessionCommandGroup,
    ShuffleMode, WireRecord,
};

use crate::client::{ArcClient, BrowserCallback};
use crate::executor::WorkExecutor;
use crate::handle::ClientHandle;
use crate::kind::NotificationKind;

/// Receives per-kind notification calls from the transport and forwards
/// them to the bound client.
///
/// Every delivery method returns `()` no matter what happened inside:
/// a released client, a malformed payload, or a capability mismatch only
/// ever costs that one notification. Methods may be called concurrently
/// from any number of transport threads.
#[derive(Debug)]
pub struct SessionEventRelay {
    handle: ClientHandle,
}

impl SessionEventRelay {
    /// Create a relay bound weakly to `client`.
    #[must_use]
    pub fn bind(client: &ArcClient) -> Self {
        Self {
            handle: ClientHandle::bind(client),
        }
    }

    /// Release the client handle. Called by the relay's owner at teardown.
    ///
    /// Idempotent; in-flight work already submitted to an executor is not
    /// recalled.
    pub fn destroy(&self) {
        self.handle.destroy();
    }

    /// Resolve the client, logging a warning when the handle is released.
    ///
    /// Data arriving for a released client outside the teardown window
    /// usually means the peer or the transport kept delivering past the
    /// channel teardown.
    fn client(&self, kind: NotificationKind) -> Option<ArcClient> {
        match self.handle.resolve() {
            Ok(client) => Some(client),
            Err(_) => {
                warn!(
                    kind = %kind,
                    "dropping notification for released client, likely a defect in the peer or transport"
                );
                None
            },
        }
    }

    /// Resolve the browsing capability for a browsing-only kind.
    ///
    /// A released handle logs like [`Self::client`]; a plain client is a
    /// normal capability mismatch and drops silently.
    fn browser(
        &self,
        kind: NotificationKind,
    ) -> Option<(Arc<dyn BrowserCallback>, Arc<dyn WorkExecutor>)> {
        let client = self.client(kind)?;
        let browsing = client.browsing()?;
        Some((browsing.callback(), browsing.executor()))
    }

    // -----------------------------------------------------------------
    // Session kinds: invoked directly on the calling transport thread.
    // -----------------------------------------------------------------

    /// Deliver `current-item-changed`.
    pub fn on_current_item_changed(&self, item: Option<WireRecord>) {
        const KIND: NotificationKind = NotificationKind::CurrentItemChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(item) = decode_optional::<MediaItem>(KIND, "item", item.as_ref()) else {
            return;
        };
        client.on_current_item_changed(item);
    }

    /// Deliver `player-state-changed`.
    pub fn on_player_state_changed(&self, event_time_ms: u64, position_ms: u64, state: i32) {
        const KIND: NotificationKind = NotificationKind::PlayerStateChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        client.on_player_state_changed(event_time_ms, position_ms, PlayerState::from_code(state));
    }

    /// Deliver `playback-speed-changed`.
    pub fn on_playback_speed_changed(&self, event_time_ms: u64, position_ms: u64, speed: f32) {
        const KIND: NotificationKind = NotificationKind::PlaybackSpeedChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        client.on_playback_speed_changed(event_time_ms, position_ms, speed);
    }

    /// Deliver `buffering-state-changed`.
    pub fn on_buffering_state_changed(
        &self,
        item: Option<WireRecord>,
        state: i32,
        buffered_position_ms: u64,
    ) {
        const KIND: NotificationKind = NotificationKind::BufferingStateChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(item) = decode_optional::<MediaItem>(KIND, "item", item.as_ref()) else {
            return;
        };
        client.on_buffering_state_changed(
            item,
            BufferingState::from_code(state),
            buffered_position_ms,
        );
    }

    /// Deliver `playlist-changed`.
    ///
    /// Undecodable playlist entries are dropped one by one; a wholly absent
    /// playlist drops the notification.
    pub fn on_playlist_changed(
        &self,
        playlist: Option<Vec<WireRecord>>,
        metadata: Option<WireRecord>,
    ) {
        const KIND: NotificationKind = NotificationKind::PlaylistChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(playlist) = playlist else {
            warn!(kind = %KIND, field = "playlist", "required payload missing, dropping notification");
            return;
        };
        let Some(metadata) = decode_optional::<MediaMetadata>(KIND, "metadata", metadata.as_ref())
        else {
            return;
        };
        let playlist = decode_filtered::<MediaItem>(KIND, "playlist", &playlist);
        client.on_playlist_changed(playlist, metadata);
    }

    /// Deliver `playlist-metadata-changed`. Absent metadata clears it.
    pub fn on_playlist_metadata_changed(&self, metadata: Option<WireRecord>) {
        const KIND: NotificationKind = NotificationKind::PlaylistMetadataChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(metadata) = decode_optional::<MediaMetadata>(KIND, "metadata", metadata.as_ref())
        else {
            return;
        };
        client.on_playlist_metadata_changed(metadata);
    }

    /// Deliver `repeat-mode-changed`.
    pub fn on_repeat_mode_changed(&self, mode: i32) {
        const KIND: NotificationKind = NotificationKind::RepeatModeChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        client.on_repeat_mode_changed(RepeatMode::from_code(mode));
    }

    /// Deliver `shuffle-mode-changed`.
    pub fn on_shuffle_mode_changed(&self, mode: i32) {
        const KIND: NotificationKind = NotificationKind::ShuffleModeChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        client.on_shuffle_mode_changed(ShuffleMode::from_code(mode));
    }

    /// Deliver `playback-info-changed`. The payload is required.
    pub fn on_playback_info_changed(&self, info: Option<WireRecord>) {
        const KIND: NotificationKind = NotificationKind::PlaybackInfoChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(info) = decode_required::<PlaybackInfo>(KIND, "playback_info", info.as_ref())
        else {
            return;
        };
        client.on_playback_info_changed(info);
    }

    /// Deliver `seek-completed`.
    pub fn on_seek_completed(&self, event_time_ms: u64, position_ms: u64, seek_position_ms: u64) {
        const KIND: NotificationKind = NotificationKind::SeekCompleted;
        let Some(client) = self.client(KIND) else {
            return;
        };
        client.on_seek_completed(event_time_ms, position_ms, seek_position_ms);
    }

    /// Deliver `error`.
    pub fn on_error(&self, code: i32, extras: Option<Extras>) {
        const KIND: NotificationKind = NotificationKind::Error;
        let Some(client) = self.client(KIND) else {
            return;
        };
        client.on_error(code, extras);
    }

    /// Deliver `routes-changed`. Route descriptors are opaque to the relay.
    pub fn on_routes_changed(&self, routes: Option<Vec<Extras>>) {
        const KIND: NotificationKind = NotificationKind::RoutesChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(routes) = routes else {
            warn!(kind = %KIND, field = "routes", "required payload missing, dropping notification");
            return;
        };
        client.on_routes_changed(routes);
    }

    /// Deliver `connected` with the session's full state snapshot.
    ///
    /// A gone client here is the expected teardown race, not a defect, so
    /// it only leaves a debug trace.
    pub fn on_connected(&self, record: ConnectedRecord) {
        const KIND: NotificationKind = NotificationKind::Connected;
        let Some(client) = self.handle.resolve_or_nil() else {
            debug!(kind = %KIND, "client already gone, channel torn down");
            return;
        };
        let Some(allowed_commands) = decode_optional::<SessionCommandGroup>(
            KIND,
            "allowed_commands",
            record.allowed_commands.as_ref(),
        ) else {
            return;
        };
        let Some(current_item) =
            decode_optional::<MediaItem>(KIND, "current_item", record.current_item.as_ref())
        else {
            return;
        };
        let Some(playback_info) =
            decode_optional::<PlaybackInfo>(KIND, "playback_info", record.playback_info.as_ref())
        else {
            return;
        };
        let playlist = record
            .playlist
            .map(|records| decode_filtered::<MediaItem>(KIND, "playlist", &records));
        client.on_connected(ConnectionSnapshot {
            allowed_commands,
            player_state: PlayerState::from_code(record.player_state),
            current_item,
            position_event_time_ms: record.position_event_time_ms,
            position_ms: record.position_ms,
            playback_speed: record.playback_speed,
            buffered_position_ms: record.buffered_position_ms,
            playback_info,
            shuffle_mode: ShuffleMode::from_code(record.shuffle_mode),
            repeat_mode: RepeatMode::from_code(record.repeat_mode),
            playlist,
        });
    }

    /// Deliver `disconnected`, invoking the client's shutdown hook.
    ///
    /// Like `connected`, a gone client is the expected terminal state.
    pub fn on_disconnected(&self) {
        const KIND: NotificationKind = NotificationKind::Disconnected;
        let Some(client) = self.handle.resolve_or_nil() else {
            debug!(kind = %KIND, "client already gone, channel torn down");
            return;
        };
        client.on_disconnected();
    }

    /// Deliver `custom-layout-changed`, filtering undecodable buttons.
    pub fn on_custom_layout_changed(&self, layout: Option<Vec<WireRecord>>) {
        const KIND: NotificationKind = NotificationKind::CustomLayoutChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(layout) = layout else {
            warn!(kind = %KIND, field = "layout", "required payload missing, dropping notification");
            return;
        };
        let layout = decode_filtered::<CommandButton>(KIND, "layout", &layout);
        client.on_custom_layout_changed(layout);
    }

    /// Deliver `allowed-commands-changed`. The payload is required.
    pub fn on_allowed_commands_changed(&self, commands: Option<WireRecord>) {
        const KIND: NotificationKind = NotificationKind::AllowedCommandsChanged;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(commands) =
            decode_required::<SessionCommandGroup>(KIND, "commands", commands.as_ref())
        else {
            return;
        };
        client.on_allowed_commands_changed(commands);
    }

    /// Deliver `custom-command`. The command record is required.
    pub fn on_custom_command(&self, command: Option<WireRecord>, args: Option<Extras>) {
        const KIND: NotificationKind = NotificationKind::CustomCommand;
        let Some(client) = self.client(KIND) else {
            return;
        };
        let Some(command) = decode_required::<SessionCommand>(KIND, "command", command.as_ref())
        else {
            return;
        };
        client.on_custom_command(command, args);
    }

    // -----------------------------------------------------------------
    // Browsing kinds: submitted to the client's registered executor.
    // -----------------------------------------------------------------

    /// Deliver `library-root-resolved` to a browsing client.
    pub fn on_library_root_resolved(
        &self,
        root_hints: Option<Extras>,
        root_id: Option<String>,
        root_extras: Option<Extras>,
    ) {
        const KIND: NotificationKind = NotificationKind::LibraryRootResolved;
        let Some((callback, executor)) = self.browser(KIND) else {
            return;
        };
        submit(KIND, &*executor, move || {
            callback.on_library_root_resolved(root_hints, root_id, root_extras);
        });
    }

    /// Deliver `item-resolved` to a browsing client.
    pub fn on_item_resolved(&self, item_id: &str, item: Option<WireRecord>) {
        const KIND: NotificationKind = NotificationKind::ItemResolved;
        let Some((callback, executor)) = self.browser(KIND) else {
            return;
        };
        let Some(item_id) = require_identifier(KIND, "item_id", item_id) else {
            return;
        };
        let Some(item) = decode_optional::<MediaItem>(KIND, "item", item.as_ref()) else {
            return;
        };
        submit(KIND, &*executor, move || {
            callback.on_item_resolved(item_id, item);
        });
    }

    /// Deliver `children-resolved` to a browsing client.
    pub fn on_children_resolved(
        &self,
        parent_id: &str,
        page: u32,
        page_size: u32,
        children: Option<Vec<WireRecord>>,
        extras: Option<Extras>,
    ) {
        const KIND: NotificationKind = NotificationKind::ChildrenResolved;
        let Some((callback, executor)) = self.browser(KIND) else {
            return;
        };
        let Some(parent_id) = require_identifier(KIND, "parent_id", parent_id) else {
            return;
        };
        let children =
            children.map(|records| decode_filtered::<MediaItem>(KIND, "children", &records));
        submit(KIND, &*executor, move || {
            callback.on_children_resolved(parent_id, page, page_size, children, extras);
        });
    }

    /// Deliver `search-result-changed` to a browsing client.
    pub fn on_search_result_changed(&self, query: &str, item_count: u32, extras: Option<Extras>) {
        const KIND: NotificationKind = NotificationKind::SearchResultChanged;
        let Some((callback, executor)) = self.browser(KIND) else {
            return;
        };
        let Some(query) = require_identifier(KIND, "query", query) else {
            return;
        };
        submit(KIND, &*executor, move || {
            callback.on_search_result_changed(query, item_count, extras);
        });
    }

    /// Deliver `search-result-resolved` to a browsing client.
    pub fn on_search_result_resolved(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
        items: Option<Vec<WireRecord>>,
        extras: Option<Extras>,
    ) {
        const KIND: NotificationKind = NotificationKind::SearchResultResolved;
        let Some((callback, executor)) = self.browser(KIND) else {
            return;
        };
        let Some(query) = require_identifier(KIND, "query", query) else {
            return;
        };
        let items = items.map(|records| decode_filtered::<MediaItem>(KIND, "items", &records));
        submit(KIND, &*executor, move || {
            callback.on_search_result_resolved(query, page, page_size, items, extras);
        });
    }

    /// Deliver `children-changed` to a browsing client.
    pub fn on_children_changed(&self, parent_id: &str, item_count: u32, extras: Option<Extras>) {
        const KIND: NotificationKind = NotificationKind::ChildrenChanged;
        let Some((callback, executor)) = self.browser(KIND) else {
            return;
        };
        let Some(parent_id) = require_identifier(KIND, "parent_id", parent_id) else {
            return;
        };
        submit(KIND, &*executor, move || {
            callback.on_children_changed(parent_id, item_count, extras);
        });
    }
}

/// Decode a field the peer must always send.
///
/// Absent or undecodable payloads drop the whole notification.
fn decode_required<T: DeserializeOwned>(
    kind: NotificationKind,
    field: &'static str,
    record: Option<&WireRecord>,
) -> Option<T> {
    let Some(record) = record else {
        warn!(kind = %kind, field, "required payload missing, dropping notification");
        return None;
    };
    match record.decode::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(kind = %kind, field, error = %e, "payload does not decode, dropping notification");
            None
        },
    }
}

/// Decode a field the peer may omit.
///
/// `None` (outer) means the notification must be dropped: the record was
/// transmitted but does not decode. `Some(None)` means the field was
/// legitimately not sent.
fn decode_optional<T: DeserializeOwned>(
    kind: NotificationKind,
    field: &'static str,
    record: Option<&WireRecord>,
) -> Option<Option<T>> {
    let Some(record) = record else {
        return Some(None);
    };
    match record.decode::<T>() {
        Ok(value) => Some(Some(value)),
        Err(e) => {
            warn!(kind = %kind, field, error = %e, "payload does not decode, dropping notification");
            None
        },
    }
}

/// Decode a list element-by-element, keeping the survivors in order.
fn decode_filtered<T: DeserializeOwned>(
    kind: NotificationKind,
    field: &'static str,
    records: &[WireRecord],
) -> Vec<T> {
    let mut decoded = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match record.decode::<T>() {
            Ok(value) => decoded.push(value),
            Err(e) => {
                warn!(kind = %kind, field, index, error = %e, "dropping undecodable list element");
            },
        }
    }
    decoded
}

/// Validate a required string identifier or query.
fn require_identifier(
    kind: NotificationKind,
    field: &'static str,
    value: &str,
) -> Option<String> {
    if value.is_empty() {
        warn!(kind = %kind, field, "empty identifier, dropping notification");
        return None;
    }
    Some(value.to_owned())
}

/// Hand a browsing callback to the client's executor, fire-and-forget.
fn submit<F: FnOnce() + Send + 'static>(
    kind: NotificationKind,
    executor: &dyn WorkExecutor,
    work: F,
) {
    trace!(kind = %kind, "submitting browsing callback");
    executor.submit(Box::new(work));
}
