//! Chunk data model and world/chunk coordinate mapping

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::entities::{
    BlackHoleConfig, PlanetConfig, StarConfig, StationConfig, WarpGateConfig, WorldObject,
};

/// Side length of a square chunk in world units.
pub const CHUNK_SIZE: f32 = 2000.0;

/// Minimum clearance between the placement circles of any two objects.
pub const MIN_SPACING: f32 = 150.0;

/// Protected radius around the world origin; randomized placement never
/// intrudes here. Only relevant for chunk (0,0).
pub const SAFE_ZONE_RADIUS: f32 = 400.0;

/// Map a world position to the chunk containing it.
///
/// Boundary-inclusive-low, exclusive-high: any world x in
/// `[cx * CHUNK_SIZE, (cx + 1) * CHUNK_SIZE)` maps to chunk x = cx.
pub fn world_to_chunk(world: Vec2) -> IVec2 {
    IVec2::new(
        (world.x / CHUNK_SIZE).floor() as i32,
        (world.y / CHUNK_SIZE).floor() as i32,
    )
}

/// The persisted unit of generation: everything occupying one chunk.
///
/// Created once, cached by the world generator, immutable thereafter. The
/// five collections keep their generation order so repeated queries observe
/// identical content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkData {
    pub chunk_x: i32,
    pub chunk_y: i32,
    pub generated: bool,
    pub planets: Vec<PlanetConfig>,
    pub stars: Vec<StarConfig>,
    pub black_holes: Vec<BlackHoleConfig>,
    pub stations: Vec<StationConfig>,
    pub warp_gates: Vec<WarpGateConfig>,
}

impl ChunkData {
    /// An empty, not-yet-generated chunk shell.
    pub fn new(chunk_x: i32, chunk_y: i32) -> Self {
        Self {
            chunk_x,
            chunk_y,
            generated: false,
            planets: Vec::new(),
            stars: Vec::new(),
            black_holes: Vec::new(),
            stations: Vec::new(),
            warp_gates: Vec::new(),
        }
    }

    /// Total object count across all five collections.
    pub fn object_count(&self) -> usize {
        self.planets.len()
            + self.stars.len()
            + self.black_holes.len()
            + self.stations.len()
            + self.warp_gates.len()
    }

    /// Cloned snapshots of every object in this chunk, in collection order.
    pub fn objects(&self) -> Vec<WorldObject> {
        let mut objects = Vec::with_capacity(self.object_count());
        objects.extend(self.planets.iter().cloned().map(WorldObject::Planet));
        objects.extend(self.stars.iter().cloned().map(WorldObject::Star));
        objects.extend(self.black_holes.iter().cloned().map(WorldObject::BlackHole));
        objects.extend(self.stations.iter().cloned().map(WorldObject::Station));
        objects.extend(self.warp_gates.iter().cloned().map(WorldObject::WarpGate));
        objects
    }
}
