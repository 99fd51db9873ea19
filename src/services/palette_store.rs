//! Palette persistence over the key-value store.
//!
//! Two entries are maintained: `colorGroups` holds the full group state
//! (all groups plus the active group id), and `customColors` mirrors the
//! active group's colors as a plain hex list. The mirror is what older
//! pattern tooling reads, so both entries are written on every save.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{BeadColor, ColorGroup, Palette};
use crate::store::KvStore;

const CUSTOM_COLORS_KEY: &str = "customColors";
const COLOR_GROUPS_KEY: &str = "colorGroups";

/// Stored form of the full group state.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupsRecord {
    groups: Vec<ColorGroup>,
    active_group_id: String,
}

/// Service for loading and saving palette state.
pub struct PaletteService;

impl PaletteService {
    /// Loads the palette from the store.
    ///
    /// Falls back gracefully: a missing `colorGroups` entry is seeded from
    /// the legacy `customColors` list if present, and an unreadable entry
    /// yields the default palette rather than failing the session.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself cannot be read.
    pub fn load(store: &dyn KvStore) -> Result<Palette> {
        if let Some(raw) = store.get(COLOR_GROUPS_KEY)? {
            match serde_json::from_str::<GroupsRecord>(&raw) {
                Ok(record) => {
                    return Ok(Palette::from_parts(record.groups, &record.active_group_id));
                }
                Err(err) => {
                    warn!("Ignoring unreadable {COLOR_GROUPS_KEY} entry: {err}");
                }
            }
        }

        if let Some(raw) = store.get(CUSTOM_COLORS_KEY)? {
            match serde_json::from_str::<Vec<BeadColor>>(&raw) {
                Ok(colors) => {
                    let mut palette = Palette::new();
                    for color in colors {
                        // Duplicates or base colors in the stored list are dropped
                        let _ = palette.add_custom(color);
                    }
                    return Ok(palette);
                }
                Err(err) => {
                    warn!("Ignoring unreadable {CUSTOM_COLORS_KEY} entry: {err}");
                }
            }
        }

        Ok(Palette::new())
    }

    /// Saves the palette to the store, writing both entries.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails.
    pub fn save(store: &mut dyn KvStore, palette: &Palette) -> Result<()> {
        let record = GroupsRecord {
            groups: palette.groups().to_vec(),
            active_group_id: palette.active_group().id.clone(),
        };
        let groups_json =
            serde_json::to_string(&record).context("Failed to serialize color groups")?;
        store.set(COLOR_GROUPS_KEY, &groups_json)?;

        let custom_json = serde_json::to_string(palette.custom_colors())
            .context("Failed to serialize custom colors")?;
        store.set(CUSTOM_COLORS_KEY, &custom_json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn hex(s: &str) -> BeadColor {
        BeadColor::from_hex(s).unwrap()
    }

    #[test]
    fn test_empty_store_yields_default_palette() {
        let store = MemoryStore::new();
        let palette = PaletteService::load(&store).unwrap();

        assert_eq!(palette.groups().len(), 1);
        assert!(palette.custom_colors().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut store = MemoryStore::new();

        let mut palette = Palette::new();
        palette.add_custom(hex("#123456")).unwrap();
        let group_id = palette.create_group("Ocean").unwrap();
        palette.select_group(&group_id).unwrap();
        palette.add_custom(hex("#0000FE")).unwrap();

        PaletteService::save(&mut store, &palette).unwrap();
        let loaded = PaletteService::load(&store).unwrap();

        assert_eq!(loaded.groups().len(), 2);
        assert_eq!(loaded.active_group().id, group_id);
        assert_eq!(loaded.custom_colors(), &[hex("#0000FE")]);
    }

    #[test]
    fn test_save_mirrors_active_custom_colors() {
        let mut store = MemoryStore::new();

        let mut palette = Palette::new();
        palette.add_custom(hex("#123456")).unwrap();
        PaletteService::save(&mut store, &palette).unwrap();

        let raw = store.get("customColors").unwrap().unwrap();
        assert_eq!(raw, "[\"#123456\"]");
    }

    #[test]
    fn test_legacy_custom_colors_entry_seeds_palette() {
        let mut store = MemoryStore::new();
        store
            .set("customColors", "[\"#123456\",\"#ABCDEF\"]")
            .unwrap();

        let palette = PaletteService::load(&store).unwrap();
        assert_eq!(palette.custom_colors(), &[hex("#123456"), hex("#ABCDEF")]);
        assert_eq!(palette.groups().len(), 1);
    }

    #[test]
    fn test_unreadable_groups_entry_falls_back() {
        let mut store = MemoryStore::new();
        store.set("colorGroups", "{broken").unwrap();
        store.set("customColors", "[\"#123456\"]").unwrap();

        let palette = PaletteService::load(&store).unwrap();
        assert_eq!(palette.custom_colors(), &[hex("#123456")]);
    }

    #[test]
    fn test_stored_entries_use_camel_case() {
        let mut store = MemoryStore::new();
        PaletteService::save(&mut store, &Palette::new()).unwrap();

        let raw = store.get("colorGroups").unwrap().unwrap();
        assert!(raw.contains("\"activeGroupId\""));
        assert!(raw.contains("\"groups\""));
    }
}
