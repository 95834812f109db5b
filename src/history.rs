// File: src/history.rs
//! In-memory list of recently produced palettes, newest first.
//!
//! Saving a palette whose set of hex values is already present refreshes the
//! existing entry instead of adding a duplicate. Storage is left to callers:
//! entries are plain serde values.
use crate::model::Palette;
use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_HISTORY_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteSource {
    Image,
    Ai,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub palette: Palette,
    #[serde(with = "ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub source: PaletteSource,
    pub name: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteHistory {
    entries: Vec<HistoryEntry>,
}

fn default_name(palette: &Palette, source: PaletteSource, at: DateTime<Utc>) -> String {
    let date = at.format("%Y-%m-%d");
    let count = palette.len();
    match source {
        PaletteSource::Image => format!("Image Palette ({} colors) - {}", count, date),
        PaletteSource::Ai => format!("AI Generated ({} colors) - {}", count, date),
        PaletteSource::Manual => format!("Custom Palette ({} colors) - {}", count, date),
    }
}

// Stored timestamps keep millisecond precision only.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Order-insensitive identity of a palette.
fn fingerprint(palette: &Palette) -> Vec<String> {
    let mut hexes: Vec<String> = palette.iter().map(|c| c.hex.clone()).collect();
    hexes.sort();
    hexes
}

impl PaletteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from stored entries: newest first, capped.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(MAX_HISTORY_SIZE);
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }

    /// Records a palette and returns the id of the entry holding it. Empty
    /// palettes are ignored.
    pub fn save(&mut self, palette: &Palette, source: PaletteSource, name: Option<&str>) -> Option<String> {
        if palette.is_empty() {
            return None;
        }
        let now = now_millis();
        let key = fingerprint(palette);

        if let Some(pos) = self.entries.iter().position(|e| fingerprint(&e.palette) == key) {
            let mut existing = self.entries.remove(pos);
            existing.timestamp = now;
            existing.source = source;
            let id = existing.id.clone();
            self.entries.insert(0, existing);
            return Some(id);
        }

        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            palette: palette.clone(),
            timestamp: now,
            source,
            name: name
                .map(str::to_string)
                .unwrap_or_else(|| default_name(palette, source, now)),
            is_favorite: false,
        };
        let id = entry.id.clone();
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_SIZE);
        Some(id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.is_favorite = !entry.is_favorite;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<HistoryEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Blank names leave the current name in place.
    pub fn rename(&mut self, id: &str, new_name: &str) -> bool {
        let trimmed = new_name.trim();
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                if !trimmed.is_empty() {
                    entry.name = trimmed.to_string();
                }
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(|e| e.is_favorite)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    fn palette(hexes: &[&str]) -> Palette {
        hexes.iter().copied().map(Color::new).collect()
    }

    #[test]
    fn saves_newest_first_with_default_names() {
        let mut history = PaletteHistory::new();
        history.save(&palette(&["#111111", "#222222"]), PaletteSource::Image, None);
        history.save(&palette(&["#333333"]), PaletteSource::Ai, Some("Mine"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].name, "Mine");
        assert!(history.entries()[1].name.starts_with("Image Palette (2 colors) - "));
        assert!(!history.entries()[1].is_favorite);
    }

    #[test]
    fn empty_palettes_are_ignored() {
        let mut history = PaletteHistory::new();
        assert!(history.save(&Vec::new(), PaletteSource::Manual, None).is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn duplicate_palette_moves_to_top() {
        let mut history = PaletteHistory::new();
        let first = history.save(&palette(&["#aa0000", "#00aa00"]), PaletteSource::Image, None).unwrap();
        history.save(&palette(&["#0000aa"]), PaletteSource::Ai, None);
        // Same colors, different order.
        let again = history.save(&palette(&["#00aa00", "#aa0000"]), PaletteSource::Manual, None).unwrap();

        assert_eq!(first, again);
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].id, first);
        assert_eq!(history.entries()[0].source, PaletteSource::Manual);
    }

    #[test]
    fn history_is_capped() {
        let mut history = PaletteHistory::new();
        for i in 0..(MAX_HISTORY_SIZE + 5) {
            history.save(&palette(&[format!("#{:06x}", i).as_str()]), PaletteSource::Ai, None);
        }
        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        assert_eq!(history.entries()[0].palette[0].hex, format!("#{:06x}", MAX_HISTORY_SIZE + 4));
    }

    #[test]
    fn favorites_rename_and_remove() {
        let mut history = PaletteHistory::new();
        let id = history.save(&palette(&["#123456"]), PaletteSource::Manual, None).unwrap();

        assert!(history.toggle_favorite(&id));
        assert_eq!(history.favorites().count(), 1);
        assert!(history.toggle_favorite(&id));
        assert_eq!(history.favorites().count(), 0);

        assert!(history.rename(&id, "  Brand  "));
        assert_eq!(history.get(&id).unwrap().name, "Brand");
        assert!(history.rename(&id, "   "));
        assert_eq!(history.get(&id).unwrap().name, "Brand");
        assert!(!history.rename("missing", "x"));

        assert!(history.remove(&id).is_some());
        assert!(history.get(&id).is_none());

        history.save(&palette(&["#654321"]), PaletteSource::Manual, None);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn entries_survive_serialization() {
        let mut history = PaletteHistory::new();
        history.save(&palette(&["#abcdef"]), PaletteSource::Image, None);
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"source\":\"image\""));
        let restored: PaletteHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.entries(), history.entries());

        let rebuilt = PaletteHistory::from_entries(restored.into_entries());
        assert_eq!(rebuilt.len(), 1);
    }
}
