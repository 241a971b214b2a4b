//! Human-readable name generation for celestial bodies, stations and gates
//!
//! Names are assembled from per-category syllable tables using a private
//! seeded stream, so a chunk generator seeded identically always produces the
//! same names in the same order. Uniqueness is best-effort: a collision is
//! retried a bounded number of times and then simply accepted - a duplicate
//! name is cosmetic, never an error.

use ahash::AHashSet;

use super::rng::SeededRng;

/// Retry budget for a colliding name before the duplicate is accepted.
const MAX_NAME_ATTEMPTS: u32 = 50;

/// Probability of a planet carrying a numeric designation (e.g. "Veldra 4").
const PLANET_NUMBER_CHANCE: f32 = 0.15;

struct SyllableSet {
    prefixes: &'static [&'static str],
    middles: &'static [&'static str],
    suffixes: &'static [&'static str],
}

static PLANET_SYLLABLES: SyllableSet = SyllableSet {
    prefixes: &[
        "Al", "Be", "Cal", "Dra", "Eos", "Fen", "Gany", "Hel", "Ith", "Kor", "Lyr", "Mar", "Nyx",
        "Or", "Pra", "Quin", "Rho", "Ser", "Tal", "Vex",
    ],
    middles: &[
        "a", "da", "li", "lo", "ma", "ne", "no", "ra", "sa", "the", "ti", "ve",
    ],
    suffixes: &[
        "dan", "dia", "lia", "mir", "nia", "ris", "ron", "thos", "tis", "tune", "vos", "xa",
    ],
};

static STAR_SYLLABLES: SyllableSet = SyllableSet {
    prefixes: &[
        "Al", "Bel", "Cyg", "Den", "El", "Gam", "Had", "Kep", "Mira", "Pol", "Rig", "Sir", "Veg",
        "Zet",
    ],
    middles: &["a", "al", "ar", "e", "en", "i", "o", "u"],
    suffixes: &["a", "ae", "ar", "ek", "is", "on", "us"],
};

static BLACK_HOLE_SYLLABLES: SyllableSet = SyllableSet {
    prefixes: &[
        "Ab", "Char", "Dusk", "Ereb", "Goth", "Mor", "Nox", "Nul", "Obs", "Sty", "Umb", "Vanta",
    ],
    middles: &["a", "o", "on", "ra", "ur", "ys"],
    suffixes: &["ath", "ir", "on", "os", "um", "yx"],
};

static STATION_SYLLABLES: SyllableSet = SyllableSet {
    prefixes: &[
        "Cer", "Dae", "Fort", "Hal", "Jun", "Kes", "Lum", "Mer", "Nov", "Ost", "Por", "Ter",
        "Val", "Wes",
    ],
    middles: &["a", "ar", "e", "en", "i", "il", "o"],
    suffixes: &[
        "brook", "dine", "gard", "holm", "mark", "stead", "ton", "view", "wick",
    ],
};

static WARP_GATE_SYLLABLES: SyllableSet = SyllableSet {
    prefixes: &[
        "Ae", "Axi", "Cry", "Ethe", "Flu", "Hyp", "Io", "Nex", "Qua", "Tachy", "Vor", "Zen",
    ],
    middles: &["li", "na", "ri", "the", "vi", "xa"],
    suffixes: &["ar", "ex", "is", "ium", "on", "os"],
};

/// Decorations appended to star names; the empty entry means "no tag".
static STAR_TAGS: &[&str] = &["", " Major", " Minor", " Prime", " Secundus"];

static BLACK_HOLE_PREFIX_WORDS: &[&str] = &["Dark", "Hollow", "Silent", "Void"];
static BLACK_HOLE_SUFFIX_WORDS: &[&str] = &["Abyss", "Deep", "Maw", "Well"];

static STATION_SUFFIX_WORDS: &[&str] = &["Station", "Outpost", "Depot", "Haven"];

/// Generates unique names per entity category from a private seeded stream.
///
/// De-duplication is scoped to one instance: two generators never share the
/// set, and `reset` clears it along with the random stream.
pub struct NameGenerator {
    rng: SeededRng,
    used: AHashSet<String>,
}

impl NameGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SeededRng::new(seed),
            used: AHashSet::new(),
        }
    }

    /// Clear the de-duplication set and restart the random stream.
    pub fn reset(&mut self, seed: u32) {
        self.rng.reseed(seed);
        self.used.clear();
    }

    pub fn planet_name(&mut self) -> String {
        self.unique_name(|rng| {
            let middle_count = rng.next_int(1, 2);
            let base = compose_base(rng, &PLANET_SYLLABLES, middle_count);
            if rng.chance(PLANET_NUMBER_CHANCE) {
                format!("{} {}", base, rng.next_int(2, 9))
            } else {
                base
            }
        })
    }

    pub fn star_name(&mut self) -> String {
        self.unique_name(|rng| {
            let base = compose_base(rng, &STAR_SYLLABLES, 1);
            let tag = STAR_TAGS[rng.next_index(STAR_TAGS.len())];
            format!("{}{}", base, tag)
        })
    }

    pub fn black_hole_name(&mut self) -> String {
        self.unique_name(|rng| {
            let base = compose_base(rng, &BLACK_HOLE_SYLLABLES, 1);
            let prefix = if rng.chance(0.5) {
                BLACK_HOLE_PREFIX_WORDS[rng.next_index(BLACK_HOLE_PREFIX_WORDS.len())]
            } else {
                ""
            };
            let suffix = if rng.chance(0.5) {
                BLACK_HOLE_SUFFIX_WORDS[rng.next_index(BLACK_HOLE_SUFFIX_WORDS.len())]
            } else {
                ""
            };
            format!("{} {} {}", prefix, base, suffix).trim().to_string()
        })
    }

    pub fn station_name(&mut self) -> String {
        self.unique_name(|rng| {
            let base = compose_base(rng, &STATION_SYLLABLES, 1);
            let suffix = STATION_SUFFIX_WORDS[rng.next_index(STATION_SUFFIX_WORDS.len())];
            format!("{} {}", base, suffix)
        })
    }

    pub fn warp_gate_name(&mut self) -> String {
        self.unique_name(|rng| {
            let base = compose_base(rng, &WARP_GATE_SYLLABLES, 1);
            format!("Gate {}", base)
        })
    }

    /// Retry `compose` until the candidate is unseen, up to the attempt
    /// budget. Exhaustion accepts the duplicate; every returned name is
    /// recorded either way.
    fn unique_name<F>(&mut self, mut compose: F) -> String
    where
        F: FnMut(&mut SeededRng) -> String,
    {
        let mut candidate = compose(&mut self.rng);
        for _ in 1..MAX_NAME_ATTEMPTS {
            if !self.used.contains(&candidate) {
                break;
            }
            candidate = compose(&mut self.rng);
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

fn compose_base(rng: &mut SeededRng, set: &SyllableSet, middle_count: u32) -> String {
    let mut name = String::from(set.prefixes[rng.next_index(set.prefixes.len())]);
    for _ in 0..middle_count {
        name.push_str(set.middles[rng.next_index(set.middles.len())]);
    }
    name.push_str(set.suffixes[rng.next_index(set.suffixes.len())]);
    name
}
