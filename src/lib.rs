//! # Driftspace Core - Deterministic Procedural World Generation
//!
//! Infinite chunk-based generation of celestial bodies, stations and warp
//! gates for a 2D space exploration game. Given a world seed and integer
//! chunk coordinates the generator reproducibly emits the same content on
//! every call, with no file persistence involved.

pub mod world;

pub use world::WorldGenerator;

/// Common imports for internal use
pub mod prelude {
    pub use crate::world::{ChunkData, WorldGenerator, CHUNK_SIZE};
    pub use glam::{IVec2, Vec2};
}
