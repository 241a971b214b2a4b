//! Per-chunk content generation: rejection-sampled placement + naming
//!
//! A `ChunkGenerator` is constructed fresh for every chunk, derives its own
//! seed from the chunk coordinates, and owns independent random and naming
//! streams. Nothing here can fail: a placement that finds no room within the
//! attempt budget is skipped, leaving the chunk slightly emptier.

use std::f32::consts::TAU;

use glam::Vec2;

use super::chunk::{ChunkData, CHUNK_SIZE, MIN_SPACING, SAFE_ZONE_RADIUS};
use super::entities::{
    entity_id, BlackHoleConfig, MoonConfig, PlanetConfig, StarConfig, StationConfig, StationKind,
    WarpGateConfig, PLANET_THEMES, STAR_COLOR_CLASSES,
};
use super::naming::NameGenerator;
use super::rng::{chunk_seed, SeededRng};
use super::zone::{DensityPolicy, ZoneClassifier};

/// Attempts to find a free spot before an object is skipped.
const MAX_PLACEMENT_ATTEMPTS: u32 = 50;

// Visual size ranges per category.
const PLANET_RADIUS: (f32, f32) = (60.0, 130.0);
const STAR_RADIUS: (f32, f32) = (180.0, 280.0);
const BLACK_HOLE_RADIUS: (f32, f32) = (70.0, 120.0);
const STATION_RADIUS: (f32, f32) = (70.0, 110.0);
const WARP_GATE_RADIUS: (f32, f32) = (50.0, 80.0);

// Hazard zone multipliers; the hazard radius is the placement radius, so the
// danger zones of two hazards can never overlap.
const STAR_DAMAGE_FACTOR: (f32, f32) = (1.8, 2.4);
const BLACK_HOLE_PULL_FACTOR: (f32, f32) = (2.5, 3.5);

/// Spot already claimed during generation of this chunk. Transient: used only
/// for spacing checks, dropped when the chunk is finalized.
#[derive(Debug, Clone, Copy)]
struct PlacedObject {
    position: Vec2,
    radius: f32,
}

/// Generates the full content of a single chunk.
pub struct ChunkGenerator {
    chunk_x: i32,
    chunk_y: i32,
    rng: SeededRng,
    names: NameGenerator,
    placed: Vec<PlacedObject>,
}

impl ChunkGenerator {
    /// Derives the chunk seed from `(chunk_x, chunk_y, world_seed)` and seeds
    /// both owned streams from it.
    pub fn new(chunk_x: i32, chunk_y: i32, world_seed: u32) -> Self {
        let seed = chunk_seed(chunk_x, chunk_y, world_seed);
        Self {
            chunk_x,
            chunk_y,
            rng: SeededRng::new(seed),
            names: NameGenerator::new(seed),
            placed: Vec::new(),
        }
    }

    /// Generate the chunk's content using the zone's density policy.
    ///
    /// The chunk center is classified once; unknown categories fall back to
    /// the frontier table. Builders run in a fixed category order so the
    /// random stream is consumed identically on every run.
    pub fn generate(mut self, classifier: &dyn ZoneClassifier) -> ChunkData {
        let center_x = (self.chunk_x as f32 + 0.5) * CHUNK_SIZE;
        let center_y = (self.chunk_y as f32 + 0.5) * CHUNK_SIZE;
        let zone = classifier.classify_point(center_x, center_y);
        let policy = DensityPolicy::for_category(&zone.category);

        let mut chunk = ChunkData::new(self.chunk_x, self.chunk_y);

        let planet_count = self.rng.next_int(policy.planets.0, policy.planets.1);
        let star_count = self.rng.next_int(policy.stars.0, policy.stars.1);
        let black_hole_count = self.rng.next_int(policy.black_holes.0, policy.black_holes.1);
        let station_count = self.rng.next_int(policy.stations.0, policy.stations.1);
        let warp_gate_count = self.rng.next_int(policy.warp_gates.0, policy.warp_gates.1);

        for _ in 0..planet_count {
            if let Some(planet) = self.generate_planet() {
                chunk.planets.push(planet);
            }
        }
        for _ in 0..star_count {
            if let Some(star) = self.generate_star() {
                chunk.stars.push(star);
            }
        }
        for _ in 0..black_hole_count {
            if let Some(hole) = self.generate_black_hole() {
                chunk.black_holes.push(hole);
            }
        }
        for _ in 0..station_count {
            if let Some(station) = self.generate_station() {
                chunk.stations.push(station);
            }
        }
        for _ in 0..warp_gate_count {
            if let Some(gate) = self.generate_warp_gate() {
                chunk.warp_gates.push(gate);
            }
        }

        chunk.generated = true;
        log::debug!(
            "Generated chunk ({}, {}): zone '{}', {} objects",
            self.chunk_x,
            self.chunk_y,
            zone.category,
            chunk.object_count()
        );
        chunk
    }

    /// Rejection-sample a position whose placement circle fits in the chunk,
    /// respects the origin safe zone, and keeps clear of everything placed so
    /// far. `None` after the attempt budget - the caller skips the object.
    fn find_valid_position(&mut self, radius: f32) -> Option<Vec2> {
        let inset = radius + MIN_SPACING / 2.0;
        let min_x = self.chunk_x as f32 * CHUNK_SIZE + inset;
        let max_x = (self.chunk_x + 1) as f32 * CHUNK_SIZE - inset;
        let min_y = self.chunk_y as f32 * CHUNK_SIZE + inset;
        let max_y = (self.chunk_y + 1) as f32 * CHUNK_SIZE - inset;
        if min_x >= max_x || min_y >= max_y {
            return None;
        }

        let origin_chunk = self.chunk_x == 0 && self.chunk_y == 0;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Vec2::new(
                self.rng.next_range(min_x, max_x),
                self.rng.next_range(min_y, max_y),
            );

            if origin_chunk && candidate.length() < SAFE_ZONE_RADIUS {
                continue;
            }

            let blocked = self.placed.iter().any(|other| {
                candidate.distance(other.position) < MIN_SPACING + radius + other.radius
            });
            if !blocked {
                return Some(candidate);
            }
        }

        log::trace!(
            "No valid position for radius {} in chunk ({}, {}), skipping object",
            radius,
            self.chunk_x,
            self.chunk_y
        );
        None
    }

    fn register(&mut self, position: Vec2, radius: f32) {
        self.placed.push(PlacedObject { position, radius });
    }

    fn generate_planet(&mut self) -> Option<PlanetConfig> {
        let radius = self.rng.next_range(PLANET_RADIUS.0, PLANET_RADIUS.1);
        let position = self.find_valid_position(radius)?;
        let name = self.names.planet_name();
        let theme = PLANET_THEMES[self.rng.next_index(PLANET_THEMES.len())].to_string();

        let moon_count = self.rng.next_int(0, 2);
        let mut moons = Vec::with_capacity(moon_count as usize);
        for _ in 0..moon_count {
            moons.push(MoonConfig {
                radius: self.rng.next_range(8.0, 20.0),
                orbit_radius: radius + self.rng.next_range(40.0, 120.0),
                orbit_speed: self.rng.next_range(0.1, 0.5),
                start_angle: self.rng.next_range(0.0, TAU),
            });
        }

        self.register(position, radius);
        Some(PlanetConfig {
            id: entity_id("planet", self.chunk_x, self.chunk_y, &name),
            name,
            position,
            radius,
            theme,
            moons,
        })
    }

    fn generate_star(&mut self) -> Option<StarConfig> {
        let radius = self.rng.next_range(STAR_RADIUS.0, STAR_RADIUS.1);
        let damage_radius =
            radius * self.rng.next_range(STAR_DAMAGE_FACTOR.0, STAR_DAMAGE_FACTOR.1);
        // The damage zone, not the photosphere, claims the space.
        let position = self.find_valid_position(damage_radius)?;
        let name = self.names.star_name();
        let color_class =
            STAR_COLOR_CLASSES[self.rng.next_index(STAR_COLOR_CLASSES.len())].to_string();
        let damage_per_second = self.rng.next_range(5.0, 15.0);

        self.register(position, damage_radius);
        Some(StarConfig {
            id: entity_id("star", self.chunk_x, self.chunk_y, &name),
            name,
            position,
            radius,
            color_class,
            damage_radius,
            damage_per_second,
        })
    }

    fn generate_black_hole(&mut self) -> Option<BlackHoleConfig> {
        let radius = self.rng.next_range(BLACK_HOLE_RADIUS.0, BLACK_HOLE_RADIUS.1);
        let pull_radius =
            radius * self.rng.next_range(BLACK_HOLE_PULL_FACTOR.0, BLACK_HOLE_PULL_FACTOR.1);
        let position = self.find_valid_position(pull_radius)?;
        let name = self.names.black_hole_name();
        let pull_strength = self.rng.next_range(40.0, 90.0);

        // Falling in throws the ship far away along a random bearing.
        let exit_bearing = self.rng.next_range(0.0, TAU);
        let exit_distance = self.rng.next_range(5_000.0, 15_000.0);
        let exit_point = position + Vec2::from_angle(exit_bearing) * exit_distance;
        let exit_angle = self.rng.next_range(0.0, TAU);

        self.register(position, pull_radius);
        Some(BlackHoleConfig {
            id: entity_id("black_hole", self.chunk_x, self.chunk_y, &name),
            name,
            position,
            radius,
            pull_radius,
            pull_strength,
            exit_point,
            exit_angle,
        })
    }

    fn generate_station(&mut self) -> Option<StationConfig> {
        let radius = self.rng.next_range(STATION_RADIUS.0, STATION_RADIUS.1);
        let position = self.find_valid_position(radius)?;
        let name = self.names.station_name();
        let kind = StationKind::ALL[self.rng.next_index(StationKind::ALL.len())];

        self.register(position, radius);
        Some(StationConfig {
            id: entity_id("station", self.chunk_x, self.chunk_y, &name),
            name,
            position,
            radius,
            kind,
        })
    }

    fn generate_warp_gate(&mut self) -> Option<WarpGateConfig> {
        let radius = self.rng.next_range(WARP_GATE_RADIUS.0, WARP_GATE_RADIUS.1);
        let position = self.find_valid_position(radius)?;
        let name = self.names.warp_gate_name();

        let bearing = self.rng.next_range(0.0, TAU);
        let distance = self.rng.next_range(8_000.0, 20_000.0);
        let destination = position + Vec2::from_angle(bearing) * distance;

        self.register(position, radius);
        Some(WarpGateConfig {
            id: entity_id("warp_gate", self.chunk_x, self.chunk_y, &name),
            name,
            position,
            radius,
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::zone::RadialZoneRegistry;

    fn generate(chunk_x: i32, chunk_y: i32, seed: u32) -> ChunkData {
        let registry = RadialZoneRegistry::new();
        ChunkGenerator::new(chunk_x, chunk_y, seed).generate(&registry)
    }

    fn placements(chunk: &ChunkData) -> Vec<(Vec2, f32)> {
        let mut out = Vec::new();
        out.extend(chunk.planets.iter().map(|p| (p.position, p.radius)));
        out.extend(chunk.stars.iter().map(|s| (s.position, s.damage_radius)));
        out.extend(chunk.black_holes.iter().map(|b| (b.position, b.pull_radius)));
        out.extend(chunk.stations.iter().map(|s| (s.position, s.radius)));
        out.extend(chunk.warp_gates.iter().map(|g| (g.position, g.radius)));
        out
    }

    #[test]
    fn test_deterministic_generation() {
        for &(x, y) in &[(1, 0), (-3, 7), (12, -12)] {
            let a = generate(x, y, 42);
            let b = generate(x, y, 42);
            assert_eq!(a, b, "chunk ({}, {}) not deterministic", x, y);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(2, 3, 1);
        let b = generate(2, 3, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_spacing_invariant() {
        for seed in [1, 42, 777] {
            for &(x, y) in &[(1, 1), (-5, 2), (30, -30)] {
                let chunk = generate(x, y, seed);
                let placed = placements(&chunk);
                for i in 0..placed.len() {
                    for j in (i + 1)..placed.len() {
                        let (pos_a, r_a) = placed[i];
                        let (pos_b, r_b) = placed[j];
                        let distance = pos_a.distance(pos_b);
                        assert!(
                            distance >= MIN_SPACING + r_a + r_b - 0.001,
                            "objects too close in chunk ({}, {}): {} < {}",
                            x,
                            y,
                            distance,
                            MIN_SPACING + r_a + r_b
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_objects_stay_inside_chunk() {
        let chunk = generate(4, -2, 42);
        let min_x = 4.0 * CHUNK_SIZE;
        let min_y = -2.0 * CHUNK_SIZE;
        for (position, radius) in placements(&chunk) {
            assert!(position.x - radius >= min_x);
            assert!(position.x + radius <= min_x + CHUNK_SIZE);
            assert!(position.y - radius >= min_y);
            assert!(position.y + radius <= min_y + CHUNK_SIZE);
        }
    }

    #[test]
    fn test_origin_chunk_respects_safe_zone() {
        // The world generator never runs the randomized path for (0,0), but
        // the safe-zone check must still hold if a generator is built for it.
        for seed in [1, 42, 99, 1234] {
            let chunk = generate(0, 0, seed);
            for (position, _) in placements(&chunk) {
                assert!(
                    position.length() >= SAFE_ZONE_RADIUS,
                    "object at {:?} inside safe zone",
                    position
                );
            }
        }
    }

    #[test]
    fn test_counts_within_policy() {
        // Chunk (30, -30) center is ~84k units out: void zone.
        let chunk = generate(30, -30, 42);
        assert!(chunk.planets.len() <= 2);
        assert!(chunk.stars.len() <= 3);
        assert!(chunk.black_holes.len() <= 2);
        assert!(chunk.stations.is_empty());
        assert!(chunk.warp_gates.len() <= 1);
    }

    #[test]
    fn test_star_damage_radius_exceeds_radius() {
        let chunk = generate(25, 25, 42);
        for star in &chunk.stars {
            assert!(star.damage_radius > star.radius);
            assert!((5.0..15.0).contains(&star.damage_per_second));
        }
    }

    #[test]
    fn test_black_hole_exit_far_away() {
        for seed in 0..20 {
            let chunk = generate(30, 30, seed);
            for hole in &chunk.black_holes {
                let jump = hole.position.distance(hole.exit_point);
                assert!(
                    (4_999.0..=15_001.0).contains(&jump),
                    "exit distance {} out of range",
                    jump
                );
                assert!(hole.pull_radius > hole.radius);
            }
        }
    }

    #[test]
    fn test_ids_are_unique_within_chunk() {
        let chunk = generate(6, 6, 42);
        let objects = chunk.objects();
        let ids: std::collections::HashSet<String> =
            objects.iter().map(|o| o.id().to_string()).collect();
        assert_eq!(ids.len(), objects.len());
    }

    #[test]
    fn test_marks_generated() {
        let chunk = generate(1, 2, 42);
        assert!(chunk.generated);
        assert_eq!(chunk.chunk_x, 1);
        assert_eq!(chunk.chunk_y, 2);
    }
}
