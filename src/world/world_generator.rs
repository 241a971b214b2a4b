//! World orchestration: chunk cache, range queries, chunk streaming
//!
//! Owns the world seed and the insert-only chunk cache. Chunks are generated
//! lazily on first request and never regenerated afterwards; only a full
//! `reset` forgets them. Nothing is ever evicted - bounding memory is the
//! caller's policy, not this crate's.

use ahash::{AHashMap, AHashSet};
use glam::{IVec2, Vec2};

use super::chunk::{world_to_chunk, ChunkData, CHUNK_SIZE};
use super::chunk_generator::ChunkGenerator;
use super::entities::{
    entity_id, MoonConfig, PlanetConfig, StationConfig, StationKind, WorldObject,
};
use super::zone::{RadialZoneRegistry, ZoneClassifier};

/// Lazily generating, caching world generator.
///
/// Explicitly constructed and passed around; there is no global instance.
/// Query methods hand out read-only views or cloned snapshots - cached
/// content is never mutated after insertion.
pub struct WorldGenerator {
    seed: u32,
    classifier: Box<dyn ZoneClassifier>,
    chunks: AHashMap<IVec2, ChunkData>,
    /// Chunk keys considered resident by the last `update_loaded_chunks`
    /// call. Streaming bookkeeping only; unrelated to cache eviction.
    loaded: AHashSet<IVec2>,
    starter_generated: bool,
}

impl WorldGenerator {
    /// Create a generator with the default radial zone classifier.
    pub fn new(seed: u32) -> Self {
        Self::with_classifier(seed, RadialZoneRegistry::new())
    }

    /// Create a generator with an externally supplied zone classifier.
    pub fn with_classifier(seed: u32, classifier: impl ZoneClassifier + 'static) -> Self {
        Self {
            seed,
            classifier: Box::new(classifier),
            chunks: AHashMap::new(),
            loaded: AHashSet::new(),
            starter_generated: false,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of chunks currently cached.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Get (or lazily generate) the chunk at chunk coordinates.
    ///
    /// Chunk (0,0) is populated exactly once with hand-authored starter
    /// content guaranteeing a safe spawn area; the randomized path never
    /// runs for it.
    pub fn get_chunk(&mut self, chunk_x: i32, chunk_y: i32) -> &ChunkData {
        let pos = IVec2::new(chunk_x, chunk_y);
        self.ensure_chunk(pos);
        &self.chunks[&pos]
    }

    fn ensure_chunk(&mut self, pos: IVec2) {
        if self.chunks.contains_key(&pos) {
            return;
        }
        let chunk = if pos == IVec2::ZERO && !self.starter_generated {
            self.starter_generated = true;
            log::debug!("Populating chunk (0, 0) with starter content");
            Self::starter_chunk()
        } else {
            log::debug!("Cache miss, generating chunk ({}, {})", pos.x, pos.y);
            ChunkGenerator::new(pos.x, pos.y, self.seed).generate(self.classifier.as_ref())
        };
        self.chunks.insert(pos, chunk);
    }

    /// All chunks whose square neighborhood covers `range` world units
    /// around the query point, generating any that are missing.
    pub fn get_chunks_in_range(
        &mut self,
        world_x: f32,
        world_y: f32,
        range: f32,
    ) -> Vec<&ChunkData> {
        let keys = self.materialize_neighborhood(world_x, world_y, range);
        keys.iter().map(|key| &self.chunks[key]).collect()
    }

    /// Flattened snapshots of every object in the chunks covering `range`
    /// around the query point. Each object belongs to exactly one chunk, so
    /// no deduplication is needed.
    pub fn get_objects_in_range(
        &mut self,
        world_x: f32,
        world_y: f32,
        range: f32,
    ) -> Vec<WorldObject> {
        self.get_chunks_in_range(world_x, world_y, range)
            .iter()
            .flat_map(|chunk| chunk.objects())
            .collect()
    }

    /// Ensure the neighborhood around the player is generated and report
    /// which chunk keys are newly resident since the previous call.
    ///
    /// Replaces the loaded set; nothing is unloaded from the cache itself.
    pub fn update_loaded_chunks(
        &mut self,
        world_x: f32,
        world_y: f32,
        load_range: f32,
    ) -> Vec<IVec2> {
        let keys = self.materialize_neighborhood(world_x, world_y, load_range);
        let newly_loaded: Vec<IVec2> = keys
            .iter()
            .filter(|key| !self.loaded.contains(*key))
            .copied()
            .collect();
        self.loaded = keys.into_iter().collect();
        newly_loaded
    }

    /// Forget all generated content. With the same seed, regeneration
    /// reproduces identical chunks; passing a new seed rebinds the world.
    pub fn reset(&mut self, seed: Option<u32>) {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self.chunks.clear();
        self.loaded.clear();
        self.starter_generated = false;
        log::debug!("World generator reset (seed {})", self.seed);
    }

    /// Generate and collect the square chunk neighborhood, in scan order.
    fn materialize_neighborhood(&mut self, world_x: f32, world_y: f32, range: f32) -> Vec<IVec2> {
        let center = world_to_chunk(Vec2::new(world_x, world_y));
        let chunk_radius = (range / CHUNK_SIZE).ceil() as i32;
        let mut keys =
            Vec::with_capacity(((2 * chunk_radius + 1) * (2 * chunk_radius + 1)) as usize);
        for dy in -chunk_radius..=chunk_radius {
            for dx in -chunk_radius..=chunk_radius {
                let key = center + IVec2::new(dx, dy);
                self.ensure_chunk(key);
                keys.push(key);
            }
        }
        keys
    }

    /// Hand-authored starter content for chunk (0,0): a guaranteed safe
    /// spawn area with two stations and one habitable planet.
    fn starter_chunk() -> ChunkData {
        let mut chunk = ChunkData::new(0, 0);

        chunk.stations.push(StationConfig {
            id: entity_id("station", 0, 0, "Alpha Station"),
            name: "Alpha Station".to_string(),
            position: Vec2::new(600.0, -400.0),
            radius: 90.0,
            kind: StationKind::Trading,
        });
        chunk.stations.push(StationConfig {
            id: entity_id("station", 0, 0, "Beta Outpost"),
            name: "Beta Outpost".to_string(),
            position: Vec2::new(-900.0, -600.0),
            radius: 75.0,
            kind: StationKind::Repair,
        });
        chunk.planets.push(PlanetConfig {
            id: entity_id("planet", 0, 0, "Haven Prime"),
            name: "Haven Prime".to_string(),
            position: Vec2::new(-800.0, 600.0),
            radius: 110.0,
            theme: "terran".to_string(),
            moons: vec![MoonConfig {
                radius: 16.0,
                orbit_radius: 180.0,
                orbit_speed: 0.25,
                start_angle: 0.0,
            }],
        });

        chunk.generated = true;
        chunk
    }
}
