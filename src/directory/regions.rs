use crate::resolve::resolver::normalize;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Countries with a region table. Closed set: every variant has a non-empty
/// map in [`REGION_DIRECTORY`], so core operations can never see an unknown key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Country {
    UnitedStates,
    India,
    UnitedKingdom,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::UnitedStates, Country::India, Country::UnitedKingdom];

    pub fn from_key(key: &str) -> Option<Country> {
        match key.trim().to_lowercase().as_str() {
            "us" => Some(Country::UnitedStates),
            "india" => Some(Country::India),
            "uk" => Some(Country::UnitedKingdom),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Country::UnitedStates => "us",
            Country::India => "india",
            Country::UnitedKingdom => "uk",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::India => "India",
            Country::UnitedKingdom => "United Kingdom",
        }
    }
}

/// An ordered region -> capital table for one country. Declaration order is
/// the canonical iteration order, which the resolver's first-match policy
/// depends on. Capitals are not unique (Chandigarh serves two entries).
pub struct RegionMap {
    entries: Vec<(&'static str, &'static str)>,
}

impl RegionMap {
    /// Panics when the table is empty or two region names collapse to the
    /// same normalized form, since that breaks exact-match determinism.
    /// Tables are compiled in, so either is a defect caught at startup.
    pub fn new(entries: Vec<(&'static str, &'static str)>) -> RegionMap {
        if entries.is_empty() {
            panic!("Empty region table");
        }

        let mut seen = HashSet::new();
        for (region, _) in &entries {
            if !seen.insert(normalize(region)) {
                panic!("Region name collides after normalization: {}", region);
            }
        }

        RegionMap { entries }
    }

    pub fn entries(&self) -> &[(&'static str, &'static str)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct RegionDirectory {
    us: RegionMap,
    india: RegionMap,
    uk: RegionMap,
}

impl RegionDirectory {
    pub fn regions(&self, country: Country) -> &RegionMap {
        match country {
            Country::UnitedStates => &self.us,
            Country::India => &self.india,
            Country::UnitedKingdom => &self.uk,
        }
    }
}

pub static REGION_DIRECTORY: Lazy<RegionDirectory> = Lazy::new(|| RegionDirectory {
    us: us_regions(),
    india: india_regions(),
    uk: uk_regions(),
});

fn us_regions() -> RegionMap {
    RegionMap::new(vec![
        ("Alabama", "Montgomery"),
        ("Alaska", "Juneau"),
        ("Arizona", "Phoenix"),
        ("Arkansas", "Little Rock"),
        ("California", "Sacramento"),
        ("Colorado", "Denver"),
        ("Connecticut", "Hartford"),
        ("Delaware", "Dover"),
        ("Florida", "Tallahassee"),
        ("Georgia", "Atlanta"),
        ("Hawaii", "Honolulu"),
        ("Idaho", "Boise"),
        ("Illinois", "Springfield"),
        ("Indiana", "Indianapolis"),
        ("Iowa", "Des Moines"),
        ("Kansas", "Topeka"),
        ("Kentucky", "Frankfort"),
        ("Louisiana", "Baton Rouge"),
        ("Maine", "Augusta"),
        ("Maryland", "Annapolis"),
        ("Massachusetts", "Boston"),
        ("Michigan", "Lansing"),
        ("Minnesota", "St. Paul"),
        ("Mississippi", "Jackson"),
        ("Missouri", "Jefferson City"),
        ("Montana", "Helena"),
        ("Nebraska", "Lincoln"),
        ("Nevada", "Carson City"),
        ("New Hampshire", "Concord"),
        ("New Jersey", "Trenton"),
        ("New Mexico", "Santa Fe"),
        ("New York", "Albany"),
        ("North Carolina", "Raleigh"),
        ("North Dakota", "Bismarck"),
        ("Ohio", "Columbus"),
        ("Oklahoma", "Oklahoma City"),
        ("Oregon", "Salem"),
        ("Pennsylvania", "Harrisburg"),
        ("Rhode Island", "Providence"),
        ("South Carolina", "Columbia"),
        ("South Dakota", "Pierre"),
        ("Tennessee", "Nashville"),
        ("Texas", "Austin"),
        ("Utah", "Salt Lake City"),
        ("Vermont", "Montpelier"),
        ("Virginia", "Richmond"),
        ("Washington", "Olympia"),
        ("West Virginia", "Charleston"),
        ("Wisconsin", "Madison"),
        ("Wyoming", "Cheyenne"),
        ("District of Columbia", "Washington, D.C."),
    ])
}

fn india_regions() -> RegionMap {
    RegionMap::new(vec![
        ("Andhra Pradesh", "Amaravati"),
        ("Arunachal Pradesh", "Itanagar"),
        ("Assam", "Dispur"),
        ("Bihar", "Patna"),
        ("Chhattisgarh", "Raipur"),
        ("Goa", "Panaji"),
        ("Gujarat", "Gandhinagar"),
        ("Haryana", "Chandigarh"),
        ("Himachal Pradesh", "Shimla"),
        ("Jharkhand", "Ranchi"),
        ("Karnataka", "Bengaluru"),
        ("Kerala", "Thiruvananthapuram"),
        ("Madhya Pradesh", "Bhopal"),
        ("Maharashtra", "Mumbai"),
        ("Manipur", "Imphal"),
        ("Meghalaya", "Shillong"),
        ("Mizoram", "Aizawl"),
        ("Nagaland", "Kohima"),
        ("Odisha", "Bhubaneswar"),
        ("Punjab", "Chandigarh"),
        ("Rajasthan", "Jaipur"),
        ("Sikkim", "Gangtok"),
        ("Tamil Nadu", "Chennai"),
        ("Telangana", "Hyderabad"),
        ("Tripura", "Agartala"),
        ("Uttar Pradesh", "Lucknow"),
        ("Uttarakhand", "Dehradun"),
        ("West Bengal", "Kolkata"),
        ("Andaman and Nicobar Islands", "Port Blair"),
        ("Chandigarh (UT)", "Chandigarh"),
        ("Dadra and Nagar Haveli and Daman and Diu", "Daman"),
        ("Delhi", "New Delhi"),
        ("Jammu and Kashmir", "Srinagar"),
        ("Ladakh", "Leh"),
        ("Puducherry", "Puducherry"),
        ("Lakshadweep", "Kavaratti"),
    ])
}

fn uk_regions() -> RegionMap {
    RegionMap::new(vec![
        ("England", "London"),
        ("Scotland", "Edinburgh"),
        ("Wales", "Cardiff"),
        ("Northern Ireland", "Belfast"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_every_country() {
        for country in Country::ALL {
            assert!(!REGION_DIRECTORY.regions(country).is_empty());
        }
        assert_eq!(REGION_DIRECTORY.regions(Country::UnitedStates).len(), 51);
        assert_eq!(REGION_DIRECTORY.regions(Country::India).len(), 36);
        assert_eq!(REGION_DIRECTORY.regions(Country::UnitedKingdom).len(), 4);
    }

    #[test]
    fn country_keys_round_trip() {
        for country in Country::ALL {
            assert_eq!(Country::from_key(country.key()), Some(country));
        }
        assert_eq!(Country::from_key(" UK "), Some(Country::UnitedKingdom));
        assert_eq!(Country::from_key("france"), None);
        assert_eq!(Country::from_key(""), None);
    }

    #[test]
    #[should_panic]
    fn normalized_collision_is_rejected() {
        RegionMap::new(vec![("Goa", "Panaji"), ("  GOA ", "Panaji")]);
    }

    #[test]
    #[should_panic]
    fn empty_table_is_rejected() {
        RegionMap::new(Vec::new());
    }
}
