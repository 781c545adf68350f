use capital_quest::directory::regions::{Country, REGION_DIRECTORY};
use capital_quest::resolve::resolver::{pick_random, resolve};
use std::collections::HashSet;

#[test]
fn every_directory_entry_resolves_exactly() {
    for country in Country::ALL {
        for (region, capital) in REGION_DIRECTORY.regions(country).entries() {
            let hit = resolve(&REGION_DIRECTORY, region, country)
                .unwrap_or_else(|| panic!("{} did not resolve", region));
            assert_eq!(hit.region, *region);
            assert_eq!(hit.capital, *capital);

            // Case and padding never affect the exact tier.
            let padded = format!("  {} ", region.to_uppercase());
            let hit = resolve(&REGION_DIRECTORY, &padded, country).unwrap();
            assert_eq!(hit.region, *region);
        }
    }
}

#[test]
fn exact_match_with_padding() {
    let hit = resolve(&REGION_DIRECTORY, "  CALIFORNIA ", Country::UnitedStates).unwrap();
    assert_eq!(hit.region, "California");
    assert_eq!(hit.capital, "Sacramento");
}

#[test]
fn empty_query_finds_nothing() {
    for country in Country::ALL {
        assert_eq!(resolve(&REGION_DIRECTORY, "", country), None);
        assert_eq!(resolve(&REGION_DIRECTORY, "   \t ", country), None);
    }
}

#[test]
fn garbage_query_finds_nothing() {
    assert_eq!(
        resolve(&REGION_DIRECTORY, "zzzznotaregion", Country::UnitedStates),
        None
    );
}

#[test]
fn prefix_tie_breaks_by_directory_order() {
    // No exact "New"; New Hampshire is declared before the other New states.
    let hit = resolve(&REGION_DIRECTORY, "New", Country::UnitedStates).unwrap();
    assert_eq!(hit.region, "New Hampshire");
    assert_eq!(hit.capital, "Concord");
}

#[test]
fn substring_fallback_takes_first_in_order() {
    // Nothing starts with "arol"; both Carolinas contain it.
    let hit = resolve(&REGION_DIRECTORY, "arol", Country::UnitedStates).unwrap();
    assert_eq!(hit.region, "North Carolina");
    assert_eq!(hit.capital, "Raleigh");
}

#[test]
fn mid_word_fragment_matches() {
    let hit = resolve(&REGION_DIRECTORY, "ottish", Country::UnitedKingdom);
    assert_eq!(hit, None);
    let hit = resolve(&REGION_DIRECTORY, "cotl", Country::UnitedKingdom).unwrap();
    assert_eq!(hit.region, "Scotland");
    assert_eq!(hit.capital, "Edinburgh");
}

#[test]
fn random_pick_covers_a_small_country() {
    let uk = REGION_DIRECTORY.regions(Country::UnitedKingdom);
    let mut seen = HashSet::new();
    for _ in 0..400 {
        let hit = pick_random(&REGION_DIRECTORY, Country::UnitedKingdom);
        assert!(uk.entries().iter().any(|(r, c)| *r == hit.region && *c == hit.capital));
        seen.insert(hit.region);
    }

    // Statistical smoke check: 400 uniform draws over 4 regions miss one
    // with probability (3/4)^400.
    assert_eq!(seen.len(), uk.len());
}
