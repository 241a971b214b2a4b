//! Zone classification seam and density policies
//!
//! The surrounding game decides what kind of space a point lies in; this
//! crate only consumes the classification to pick one of a small fixed set
//! of density tables. A default radial classifier is provided so the crate
//! is usable (and testable) on its own: concentric bands around the world
//! origin, from busy core space out to the empty void.

use serde::{Deserialize, Serialize};

/// What the classifier says about a point in space.
///
/// Only `category` influences generation (it selects a density table);
/// `density` and `danger` ride along for gameplay collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDescriptor {
    pub category: String,
    pub density: f32,
    pub danger: f32,
}

/// External collaborator interface: classify a world point into a zone.
pub trait ZoneClassifier {
    fn classify_point(&self, x: f32, y: f32) -> ZoneDescriptor;
}

impl<F> ZoneClassifier for F
where
    F: Fn(f32, f32) -> ZoneDescriptor,
{
    fn classify_point(&self, x: f32, y: f32) -> ZoneDescriptor {
        self(x, y)
    }
}

/// Per-category (min, max) object counts for one zone kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityPolicy {
    pub planets: (u32, u32),
    pub stars: (u32, u32),
    pub black_holes: (u32, u32),
    pub stations: (u32, u32),
    pub warp_gates: (u32, u32),
}

/// Settled space: plenty of planets and stations, no hazards.
static CORE: DensityPolicy = DensityPolicy {
    planets: (1, 3),
    stars: (0, 1),
    black_holes: (0, 0),
    stations: (1, 2),
    warp_gates: (0, 1),
};

static INNER: DensityPolicy = DensityPolicy {
    planets: (1, 3),
    stars: (0, 1),
    black_holes: (0, 1),
    stations: (0, 1),
    warp_gates: (0, 1),
};

/// Default table; also the fallback for unrecognized categories.
static FRONTIER: DensityPolicy = DensityPolicy {
    planets: (1, 4),
    stars: (0, 2),
    black_holes: (0, 1),
    stations: (0, 1),
    warp_gates: (0, 1),
};

static OUTER: DensityPolicy = DensityPolicy {
    planets: (0, 3),
    stars: (1, 2),
    black_holes: (0, 2),
    stations: (0, 1),
    warp_gates: (0, 1),
};

/// Deep void: hostile, nearly uninhabited.
static VOID: DensityPolicy = DensityPolicy {
    planets: (0, 2),
    stars: (1, 3),
    black_holes: (1, 2),
    stations: (0, 0),
    warp_gates: (0, 1),
};

impl DensityPolicy {
    /// Select the density table for a zone category.
    ///
    /// Unknown categories fall back to the frontier table; the classifier is
    /// external and may grow categories this crate has never heard of.
    pub fn for_category(category: &str) -> &'static DensityPolicy {
        match category {
            "core" => &CORE,
            "inner" => &INNER,
            "frontier" => &FRONTIER,
            "outer" => &OUTER,
            "void" => &VOID,
            _ => &FRONTIER,
        }
    }
}

/// One concentric band of the default classifier.
#[derive(Debug, Clone)]
struct ZoneBand {
    category: &'static str,
    /// Band covers distances in `[min_radius, max_radius)` from the origin.
    min_radius: f32,
    max_radius: f32,
    density: f32,
    danger: f32,
}

/// Default zone classifier: distance bands around the world origin.
#[derive(Debug, Clone)]
pub struct RadialZoneRegistry {
    bands: Vec<ZoneBand>,
}

impl Default for RadialZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RadialZoneRegistry {
    pub fn new() -> Self {
        Self {
            bands: vec![
                ZoneBand {
                    category: "core",
                    min_radius: 0.0,
                    max_radius: 3_000.0,
                    density: 1.0,
                    danger: 0.1,
                },
                ZoneBand {
                    category: "inner",
                    min_radius: 3_000.0,
                    max_radius: 8_000.0,
                    density: 0.9,
                    danger: 0.3,
                },
                ZoneBand {
                    category: "frontier",
                    min_radius: 8_000.0,
                    max_radius: 20_000.0,
                    density: 0.8,
                    danger: 0.5,
                },
                ZoneBand {
                    category: "outer",
                    min_radius: 20_000.0,
                    max_radius: 50_000.0,
                    density: 0.6,
                    danger: 0.7,
                },
            ],
        }
    }
}

impl ZoneClassifier for RadialZoneRegistry {
    fn classify_point(&self, x: f32, y: f32) -> ZoneDescriptor {
        let distance = (x * x + y * y).sqrt();
        for band in &self.bands {
            if distance >= band.min_radius && distance < band.max_radius {
                return ZoneDescriptor {
                    category: band.category.to_string(),
                    density: band.density,
                    danger: band.danger,
                };
            }
        }
        // Past the last band lies the void.
        ZoneDescriptor {
            category: "void".to_string(),
            density: 0.4,
            danger: 0.9,
        }
    }
}
