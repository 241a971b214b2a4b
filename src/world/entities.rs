//! Entity configuration records emitted by chunk generation
//!
//! Every record is created once by a `ChunkGenerator`, cached with its chunk
//! and never mutated afterwards. Range queries hand out cloned snapshots, so
//! consumers can treat everything here as read-only data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Build the globally-unique identifier for an entity.
///
/// Purely a function of category, chunk coordinates and generated name, so
/// regeneration after a reset reproduces the same ids.
pub(crate) fn entity_id(category: &str, chunk_x: i32, chunk_y: i32, name: &str) -> String {
    let slug = name.to_lowercase().replace(' ', "-");
    format!("{}_{}_{}_{}", category, chunk_x, chunk_y, slug)
}

/// Surface themes a planet can render with.
pub const PLANET_THEMES: &[&str] = &[
    "terran", "desert", "ice", "lava", "gas", "toxic", "ocean", "barren",
];

/// Spectral color classes for stars.
pub const STAR_COLOR_CLASSES: &[&str] = &["yellow", "orange", "red", "blue", "white"];

/// A moon orbiting a planet. Purely decorative orbital parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonConfig {
    pub radius: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub start_angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub id: String,
    pub name: String,
    pub position: Vec2,
    pub radius: f32,
    /// One of [`PLANET_THEMES`].
    pub theme: String,
    pub moons: Vec<MoonConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarConfig {
    pub id: String,
    pub name: String,
    pub position: Vec2,
    pub radius: f32,
    /// One of [`STAR_COLOR_CLASSES`].
    pub color_class: String,
    /// Hazard zone; also the effective placement radius so the danger zones
    /// of two stars can never overlap.
    pub damage_radius: f32,
    pub damage_per_second: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackHoleConfig {
    pub id: String,
    pub name: String,
    pub position: Vec2,
    pub radius: f32,
    /// Gravity well extent; the effective placement radius.
    pub pull_radius: f32,
    pub pull_strength: f32,
    /// Where a ship falling past the event horizon comes out.
    pub exit_point: Vec2,
    pub exit_angle: f32,
}

/// What a station offers to docked ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationKind {
    Trading,
    Repair,
    Refuel,
    Military,
}

impl StationKind {
    pub(crate) const ALL: [StationKind; 4] = [
        StationKind::Trading,
        StationKind::Repair,
        StationKind::Refuel,
        StationKind::Military,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub id: String,
    pub name: String,
    pub position: Vec2,
    pub radius: f32,
    pub kind: StationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarpGateConfig {
    pub id: String,
    pub name: String,
    pub position: Vec2,
    pub radius: f32,
    /// Far end of the warp jump.
    pub destination: Vec2,
}

/// Aggregate item returned by object range queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldObject {
    Planet(PlanetConfig),
    Star(StarConfig),
    BlackHole(BlackHoleConfig),
    Station(StationConfig),
    WarpGate(WarpGateConfig),
}

impl WorldObject {
    pub fn id(&self) -> &str {
        match self {
            WorldObject::Planet(p) => &p.id,
            WorldObject::Star(s) => &s.id,
            WorldObject::BlackHole(b) => &b.id,
            WorldObject::Station(s) => &s.id,
            WorldObject::WarpGate(g) => &g.id,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            WorldObject::Planet(p) => p.position,
            WorldObject::Star(s) => s.position,
            WorldObject::BlackHole(b) => b.position,
            WorldObject::Station(s) => s.position,
            WorldObject::WarpGate(g) => g.position,
        }
    }
}
