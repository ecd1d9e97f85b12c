use crate::config::OrbitConfig;
use fnv::FnvHashMap;
use std::f64::consts::TAU;

/// Where an item sits among the items sharing its ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Derived from document order within the ring.
    Auto,
    Explicit { index: usize, count: usize },
}

impl Slot {
    pub const FALLBACK: Slot = Slot::Explicit { index: 0, count: 1 };
}

/// Per-item setup as declared by the markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub ring: Option<String>,
    pub slot: Slot,
}

impl ItemSpec {
    pub fn on_ring(ring: &str) -> Self {
        Self {
            ring: Some(ring.to_string()),
            slot: Slot::Auto,
        }
    }

    pub fn at(ring: &str, index: usize, count: usize) -> Self {
        Self {
            ring: Some(ring.to_string()),
            slot: Slot::Explicit { index, count },
        }
    }

    /// Build a spec from raw attribute strings.
    ///
    /// Missing index and count mean "space by document order". Anything that
    /// does not parse to `index < count` collapses to index 0 of 1.
    pub fn from_attrs(ring: Option<&str>, index: Option<&str>, count: Option<&str>) -> Self {
        let ring = ring
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        let slot = match (index, count) {
            (None, None) => Slot::Auto,
            (index, count) => parse_slot(index, count).unwrap_or(Slot::FALLBACK),
        };
        Self { ring, slot }
    }
}

fn parse_slot(index: Option<&str>, count: Option<&str>) -> Option<Slot> {
    let index = index?.trim().parse::<usize>().ok()?;
    let count = count?.trim().parse::<usize>().ok()?;
    (count >= 1 && index < count).then_some(Slot::Explicit { index, count })
}

/// Evenly spaced starting angle: `index / count × 2π`.
#[inline]
pub fn base_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 / count as f64 * TAU
}

/// One animated element. `angle` is never wrapped.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitItem {
    pub ring: String,
    pub base_angle: f64,
    pub angle: f64,
}

/// Resolve ring names and slots for every spec, in order.
pub fn build_items(config: &OrbitConfig, specs: &[ItemSpec]) -> Vec<OrbitItem> {
    let rings: Vec<&str> = specs
        .iter()
        .map(|s| {
            let resolved = config.resolve_ring_name(s.ring.as_deref());
            if let Some(name) = s.ring.as_deref() {
                if name != resolved {
                    log::warn!("[orbit] unknown ring `{}`, using `{}`", name, resolved);
                }
            }
            resolved
        })
        .collect();

    let mut totals: FnvHashMap<&str, usize> = FnvHashMap::default();
    for (spec, ring) in specs.iter().zip(&rings) {
        if spec.slot == Slot::Auto {
            *totals.entry(*ring).or_default() += 1;
        }
    }

    let mut seen: FnvHashMap<&str, usize> = FnvHashMap::default();
    specs
        .iter()
        .zip(&rings)
        .map(|(spec, ring)| {
            let (index, count) = match spec.slot {
                Slot::Explicit { index, count } => (index, count),
                Slot::Auto => {
                    let next = seen.entry(*ring).or_default();
                    let index = *next;
                    *next += 1;
                    (index, totals.get(ring).copied().unwrap_or(1))
                }
            };
            let base = base_angle(index, count);
            OrbitItem {
                ring: ring.to_string(),
                base_angle: base,
                angle: base,
            }
        })
        .collect()
}
