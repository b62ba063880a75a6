use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::{SharedStore, MEDIA_INDEX_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub name: String,
    pub size: String,
    pub date: String,
}

impl MediaItem {
    fn sample(id: u32, kind: MediaKind, name: &str, size: &str, date: &str) -> Self {
        Self {
            id,
            kind,
            name: name.to_string(),
            size: size.to_string(),
            date: date.to_string(),
        }
    }
}

/// Gallery tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFilter {
    #[default]
    All,
    Photos,
    Videos,
    Documents,
}

impl MediaFilter {
    pub const ALL: [MediaFilter; 4] = [
        MediaFilter::All,
        MediaFilter::Photos,
        MediaFilter::Videos,
        MediaFilter::Documents,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MediaFilter::All => "All",
            MediaFilter::Photos => "Photos",
            MediaFilter::Videos => "Videos",
            MediaFilter::Documents => "Documents",
        }
    }

    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            MediaFilter::All => true,
            MediaFilter::Photos => kind == MediaKind::Photo,
            MediaFilter::Videos => kind == MediaKind::Video,
            MediaFilter::Documents => kind == MediaKind::Document,
        }
    }

    /// Get the next filter (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            MediaFilter::All => MediaFilter::Photos,
            MediaFilter::Photos => MediaFilter::Videos,
            MediaFilter::Videos => MediaFilter::Documents,
            MediaFilter::Documents => MediaFilter::All,
        }
    }

    /// Get the previous filter (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            MediaFilter::All => MediaFilter::Documents,
            MediaFilter::Photos => MediaFilter::All,
            MediaFilter::Videos => MediaFilter::Photos,
            MediaFilter::Documents => MediaFilter::Videos,
        }
    }
}

pub struct MediaGallery {
    items: Vec<MediaItem>,
    pub filter: MediaFilter,
    pub selection: usize,
}

impl MediaGallery {
    /// Load the index from storage, seeding it with sample items if absent
    /// or unreadable.
    pub fn open(store: &SharedStore) -> Self {
        let items = match store.load::<Vec<MediaItem>>(MEDIA_INDEX_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Self::seed(store),
            Err(e) => {
                debug!(error = %e, "Reseeding unreadable media index");
                Self::seed(store)
            }
        };

        Self {
            items,
            filter: MediaFilter::All,
            selection: 0,
        }
    }

    fn seed(store: &SharedStore) -> Vec<MediaItem> {
        let items = Self::sample_items();
        if let Err(e) = store.save(MEDIA_INDEX_KEY, &items) {
            warn!(error = %e, "Failed to save media index");
        }
        items
    }

    pub fn sample_items() -> Vec<MediaItem> {
        vec![
            MediaItem::sample(1, MediaKind::Photo, "IMG_001.jpg", "2.4 MB", "2 hours ago"),
            MediaItem::sample(2, MediaKind::Video, "VID_002.mp4", "15.2 MB", "1 day ago"),
            MediaItem::sample(3, MediaKind::Document, "project_plan.pdf", "1.8 MB", "2 days ago"),
            MediaItem::sample(4, MediaKind::Photo, "IMG_003.jpg", "3.1 MB", "3 days ago"),
            MediaItem::sample(5, MediaKind::Document, "meeting_notes.docx", "245 KB", "1 week ago"),
            MediaItem::sample(6, MediaKind::Video, "demo_video.mp4", "45.6 MB", "1 week ago"),
        ]
    }

    pub fn filtered(&self) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item.kind))
            .collect()
    }

    pub fn count(&self, filter: MediaFilter) -> usize {
        self.items.iter().filter(|item| filter.matches(item.kind)).count()
    }

    pub fn set_filter(&mut self, filter: MediaFilter) {
        self.filter = filter;
        self.selection = 0;
    }

    pub fn select_next(&mut self) {
        let max_index = self.filtered().len().saturating_sub(1);
        self.selection = (self.selection + 1).min(max_index);
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_open_seeds_and_persists_index() {
        let store = MemoryStore::shared();
        let gallery = MediaGallery::open(&store);
        assert_eq!(gallery.filtered().len(), 6);

        let saved: Vec<MediaItem> = store.load(MEDIA_INDEX_KEY).unwrap().unwrap();
        assert_eq!(saved, MediaGallery::sample_items());
    }

    #[test]
    fn test_open_uses_stored_index() {
        let store = MemoryStore::shared();
        let only = vec![MediaItem::sample(9, MediaKind::Document, "a.pdf", "1 KB", "now")];
        store.save(MEDIA_INDEX_KEY, &only).unwrap();

        let gallery = MediaGallery::open(&store);
        assert_eq!(gallery.filtered().len(), 1);
        assert_eq!(gallery.filtered()[0].name, "a.pdf");
    }

    #[test]
    fn test_corrupt_index_is_reseeded() {
        let store = MemoryStore::shared();
        store.set(MEDIA_INDEX_KEY, "[{").unwrap();
        let gallery = MediaGallery::open(&store);
        assert_eq!(gallery.count(MediaFilter::All), 6);
    }

    #[test]
    fn test_filters() {
        let mut gallery = MediaGallery::open(&MemoryStore::shared());
        assert_eq!(gallery.count(MediaFilter::Photos), 2);
        assert_eq!(gallery.count(MediaFilter::Videos), 2);
        assert_eq!(gallery.count(MediaFilter::Documents), 2);

        gallery.selection = 3;
        gallery.set_filter(MediaFilter::Videos);
        assert_eq!(gallery.selection, 0);
        assert!(gallery.filtered().iter().all(|i| i.kind == MediaKind::Video));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut gallery = MediaGallery::open(&MemoryStore::shared());
        gallery.set_filter(MediaFilter::Photos);
        for _ in 0..5 {
            gallery.select_next();
        }
        assert_eq!(gallery.selection, 1);
        for _ in 0..5 {
            gallery.select_prev();
        }
        assert_eq!(gallery.selection, 0);
    }

    #[test]
    fn test_filter_cycle() {
        let mut filter = MediaFilter::All;
        for _ in 0..MediaFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, MediaFilter::All);
        assert_eq!(MediaFilter::All.prev(), MediaFilter::Documents);
    }
}
