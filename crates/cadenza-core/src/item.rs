//! Media items and their metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire::Extras;

/// A single playable or browsable entry known to the remote session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Stable identifier assigned by the session.
    pub id: String,
    /// Item capability flags (browsable, playable) as sent by the peer.
    #[serde(default)]
    pub flags: u32,
    /// Display metadata, absent when the session has not resolved it yet.
    #[serde(default)]
    pub metadata: Option<MediaMetadata>,
}

impl MediaItem {
    /// The item can be browsed for children.
    pub const FLAG_BROWSABLE: u32 = 0x1;
    /// The item can be played.
    pub const FLAG_PLAYABLE: u32 = 0x2;

    /// Create a bare item with no metadata.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            flags: 0,
            metadata: None,
        }
    }

    /// Attach metadata to the item.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MediaMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Display metadata for a [`MediaItem`] or a whole playlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Human-readable title.
    #[serde(default)]
    pub title: Option<String>,
    /// Performing artist.
    #[serde(default)]
    pub artist: Option<String>,
    /// Total duration in milliseconds, if known.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// Additional peer-defined fields.
    #[serde(default)]
    pub extras: Option<Extras>,
}

impl MediaMetadata {
    /// Create metadata carrying only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_flags() {
        let item = MediaItem {
            flags: MediaItem::FLAG_PLAYABLE,
            ..MediaItem::new("a")
        };
        assert_eq!(item.flags & MediaItem::FLAG_PLAYABLE, MediaItem::FLAG_PLAYABLE);
        assert_eq!(item.flags & MediaItem::FLAG_BROWSABLE, 0);
    }

    #[test]
    fn test_item_with_metadata() {
        let item = MediaItem::new("a").with_metadata(MediaMetadata::titled("Song"));
        assert_eq!(item.metadata.unwrap().title.as_deref(), Some("Song"));
    }

    #[test]
    fn test_id_is_required_on_the_wire() {
        let result: Result<MediaItem, _> = serde_json::from_value(serde_json::json!({
            "flags": 1
        }));
        assert!(result.is_err());
    }
}
