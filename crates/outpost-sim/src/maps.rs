//! Map directory — allocation and teardown of maps and their grids.

use std::collections::HashMap;

use outpost_core::types::{GridId, MapId};

/// Grids belonging to one live map.
#[derive(Debug, Clone, Default)]
pub struct MapRecord {
    pub grids: Vec<GridId>,
}

/// Registry of live maps. `MapId::NULLSPACE` is reserved and never
/// allocated; entities there are exempt from dead-map cleanup.
#[derive(Debug)]
pub struct MapDirectory {
    maps: HashMap<MapId, MapRecord>,
    next_map: u32,
    next_grid: u32,
}

impl Default for MapDirectory {
    fn default() -> Self {
        Self {
            maps: HashMap::new(),
            // MapId 0 is nullspace.
            next_map: 1,
            next_grid: 0,
        }
    }
}

impl MapDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh, empty map.
    pub fn create_map(&mut self) -> MapId {
        let id = MapId(self.next_map);
        self.next_map += 1;
        self.maps.insert(id, MapRecord::default());
        id
    }

    /// Allocate a grid on an existing map. `None` if the map is not live.
    pub fn add_grid(&mut self, map: MapId) -> Option<GridId> {
        let record = self.maps.get_mut(&map)?;
        let grid = GridId(self.next_grid);
        self.next_grid += 1;
        record.grids.push(grid);
        Some(grid)
    }

    pub fn contains(&self, map: MapId) -> bool {
        self.maps.contains_key(&map)
    }

    /// Drop a map from the directory. Entities left on it are reaped by the
    /// cleanup system on the same tick. Returns whether the map was live.
    pub fn delete_map(&mut self, map: MapId) -> bool {
        self.maps.remove(&map).is_some()
    }

    /// Iterate live maps in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (MapId, &MapRecord)> {
        self.maps.iter().map(|(id, record)| (*id, record))
    }

    /// Drop every map. Counters keep advancing so ids stay unique within
    /// the process.
    pub fn clear(&mut self) {
        self.maps.clear();
    }
}
