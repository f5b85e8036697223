//! The fixed reference table of Hong Kong automatic weather stations.

use crate::LatLon;
use std::collections::HashMap;

/// Station coordinates as published for the Observatory's automatic reading
/// network. Names are the traditional-Chinese forms used by the `lang=tc`
/// feeds; the two Tsuen Wan stations share a grid point.
const HONG_KONG_STATIONS: [(&str, LatLon); 26] = [
    ("京士柏", LatLon(22.309, 114.172)),
    ("香港天文台", LatLon(22.302, 114.174)),
    ("黃竹坑", LatLon(22.249, 114.177)),
    ("打鼓嶺", LatLon(22.502, 114.145)),
    ("流浮山", LatLon(22.469, 113.985)),
    ("大埔", LatLon(22.449, 114.177)),
    ("沙田", LatLon(22.392, 114.191)),
    ("屯門", LatLon(22.404, 113.974)),
    ("將軍澳", LatLon(22.315, 114.258)),
    ("西貢", LatLon(22.383, 114.270)),
    ("長洲", LatLon(22.209, 114.028)),
    ("赤鱲角", LatLon(22.308, 113.916)),
    ("青衣", LatLon(22.348, 114.108)),
    ("石崗", LatLon(22.433, 114.086)),
    ("荃灣可觀", LatLon(22.382, 114.111)),
    ("荃灣城門谷", LatLon(22.382, 114.111)),
    ("香港公園", LatLon(22.278, 114.161)),
    ("筲箕灣", LatLon(22.280, 114.227)),
    ("跑馬地", LatLon(22.270, 114.183)),
    ("黃大仙", LatLon(22.341, 114.191)),
    ("赤柱", LatLon(22.215, 114.214)),
    ("觀塘", LatLon(22.311, 114.223)),
    ("深水埗", LatLon(22.332, 114.160)),
    ("啓德跑道公園", LatLon(22.306, 114.211)),
    ("元朗公園", LatLon(22.441, 114.019)),
    ("坪洲", LatLon(22.286, 114.039)),
];

/// An immutable mapping from station name to coordinates.
///
/// Loaded once and never mutated. The nearest-station search takes the
/// catalog as a parameter, so tests can swap in a synthetic table via
/// [`StationCatalog::from_entries`] without touching the algorithm;
/// [`StationCatalog::hong_kong`] is the production table.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    entries: HashMap<String, LatLon>,
}

impl StationCatalog {
    /// The built-in Hong Kong station table.
    pub fn hong_kong() -> Self {
        Self::from_entries(
            HONG_KONG_STATIONS
                .iter()
                .map(|(name, coords)| (name.to_string(), *coords)),
        )
    }

    /// Builds a catalog from arbitrary name/coordinate pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, LatLon)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Coordinates for `name`, or `None` when the station is not in the table.
    pub fn coordinates(&self, name: &str) -> Option<LatLon> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the catalog's station names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::hong_kong()
    }
}
