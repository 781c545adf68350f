use crate::directory::regions::{Country, RegionDirectory, RegionMap};
use rand::seq::SliceRandom;
use serde::Serialize;

/// A resolved region/capital pair. Names come straight from the directory,
/// never from the query, so display casing is always canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegionMatch {
    pub region: &'static str,
    pub capital: &'static str,
}

/// Comparison form: trimmed and lowercased. ASCII folding covers the current
/// tables; never used for display.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Resolve a free-text query against one country's table.
///
/// Tiers: exact, then prefix, then substring, all on normalized forms. Within
/// a tier the first match in declaration order wins; later tiers are only
/// consulted when the whole earlier tier found nothing. An empty query never
/// matches.
pub fn resolve(directory: &RegionDirectory, query: &str, country: Country) -> Option<RegionMatch> {
    resolve_in(directory.regions(country), query)
}

pub fn resolve_in(regions: &RegionMap, query: &str) -> Option<RegionMatch> {
    let q = normalize(query);
    if q.is_empty() {
        return None;
    }

    for (region, capital) in regions.entries() {
        if normalize(region) == q {
            return Some(RegionMatch { region, capital });
        }
    }
    for (region, capital) in regions.entries() {
        if normalize(region).starts_with(&q) {
            return Some(RegionMatch { region, capital });
        }
    }
    for (region, capital) in regions.entries() {
        if normalize(region).contains(&q) {
            return Some(RegionMatch { region, capital });
        }
    }

    None
}

/// Uniform draw over a country's regions. The directory invariant guarantees
/// a non-empty table, so a draw always succeeds.
pub fn pick_random(directory: &RegionDirectory, country: Country) -> RegionMatch {
    let entries = directory.regions(country).entries();
    let (region, capital) = entries
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(entries[0]);

    RegionMatch { region, capital }
}
