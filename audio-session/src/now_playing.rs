//! Now-playing item metadata

use serde::{Deserialize, Serialize};

/// Metadata describing the currently active media item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NowPlayingItem {
    /// Artist name
    pub artist: Option<String>,
    /// Album name
    pub album: Option<String>,
    /// Track title
    pub title: Option<String>,
}

impl NowPlayingItem {
    /// Create a new empty NowPlayingItem
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item with artist, album, and title
    pub fn with_metadata(
        artist: impl Into<String>,
        album: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            artist: Some(artist.into()),
            album: Some(album.into()),
            title: Some(title.into()),
        }
    }

    /// Check if the item has any meaningful content
    pub fn is_empty(&self) -> bool {
        self.artist.is_none() && self.album.is_none() && self.title.is_none()
    }

    /// Render the artist, album, and title joined by single spaces
    ///
    /// Absent fields render as empty strings, so a title-only item
    /// yields `"  Title"`.
    pub fn summary(&self) -> String {
        [
            self.artist.as_deref().unwrap_or(""),
            self.album.as_deref().unwrap_or(""),
            self.title.as_deref().unwrap_or(""),
        ]
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let item = NowPlayingItem::new();
        assert!(item.is_empty());
    }

    #[test]
    fn test_with_metadata() {
        let item = NowPlayingItem::with_metadata("A", "B", "C");
        assert_eq!(item.artist, Some("A".to_string()));
        assert_eq!(item.album, Some("B".to_string()));
        assert_eq!(item.title, Some("C".to_string()));
        assert!(!item.is_empty());
    }

    #[test]
    fn test_summary_full() {
        let item = NowPlayingItem::with_metadata("A", "B", "C");
        assert_eq!(item.summary(), "A B C");
    }

    #[test]
    fn test_summary_with_absent_fields() {
        let item = NowPlayingItem {
            title: Some("Title".to_string()),
            ..Default::default()
        };
        assert_eq!(item.summary(), "  Title");
    }

    #[test]
    fn test_summary_empty_item() {
        assert_eq!(NowPlayingItem::new().summary(), "  ");
    }
}
