//! World generation - seeded randomness, naming, chunk content, caching

mod chunk;
mod chunk_generator;
pub mod entities;
pub mod naming;
pub mod rng;
pub mod zone;
mod world_generator;

pub use chunk::{world_to_chunk, ChunkData, CHUNK_SIZE, MIN_SPACING, SAFE_ZONE_RADIUS};
pub use chunk_generator::ChunkGenerator;
pub use entities::{
    BlackHoleConfig, MoonConfig, PlanetConfig, StarConfig, StationConfig, StationKind,
    WarpGateConfig, WorldObject,
};
pub use naming::NameGenerator;
pub use rng::{chunk_seed, SeededRng};
pub use world_generator::WorldGenerator;
pub use zone::{DensityPolicy, RadialZoneRegistry, ZoneClassifier, ZoneDescriptor};
