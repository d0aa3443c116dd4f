//! Country directory for the test-address form.
//!
//! The form encodes the country selection as a numeric identifier (the
//! reserved identifier 0 meaning "no country chosen"), while the rate
//! provider wants an ISO 3166-1 alpha-2 code. The directory translates
//! between the two and supplies the selectable list.

/// Reserved selection identifier meaning "no country chosen".
pub const NO_COUNTRY: u32 = 0;

/// One selectable country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Selection identifier used by the form (never 0)
    pub id: u32,
    /// ISO 3166-1 alpha-2 code
    pub iso_code: String,
    /// Human-readable name
    pub display_name: String,
}

/// Lookup of selectable countries by form identifier.
pub trait CountryDirectory: Send + Sync {
    /// Resolve a selection identifier. Unknown identifiers (including
    /// [`NO_COUNTRY`]) yield `None`.
    fn resolve(&self, id: u32) -> Option<Country>;

    /// All selectable countries, in display order.
    fn all(&self) -> Vec<Country>;
}

/// Directory over a compiled-in country table.
///
/// The table is alphabetical by display name and identifiers are stable:
/// they are what admins type at the CLI and what a form would post back.
pub struct EmbeddedDirectory;

/// (identifier, ISO code, display name)
static COUNTRIES: &[(u32, &str, &str)] = &[
    (1, "AU", "Australia"),
    (2, "AT", "Austria"),
    (3, "BE", "Belgium"),
    (4, "BR", "Brazil"),
    (5, "BG", "Bulgaria"),
    (6, "CA", "Canada"),
    (7, "CL", "Chile"),
    (8, "CN", "China"),
    (9, "HR", "Croatia"),
    (10, "CY", "Cyprus"),
    (11, "CZ", "Czechia"),
    (12, "DK", "Denmark"),
    (13, "EE", "Estonia"),
    (14, "FI", "Finland"),
    (15, "FR", "France"),
    (16, "DE", "Germany"),
    (17, "GR", "Greece"),
    (18, "HU", "Hungary"),
    (19, "IS", "Iceland"),
    (20, "IN", "India"),
    (21, "IE", "Ireland"),
    (22, "IL", "Israel"),
    (23, "IT", "Italy"),
    (24, "JP", "Japan"),
    (25, "LV", "Latvia"),
    (26, "LT", "Lithuania"),
    (27, "LU", "Luxembourg"),
    (28, "MT", "Malta"),
    (29, "MX", "Mexico"),
    (30, "NL", "Netherlands"),
    (31, "NZ", "New Zealand"),
    (32, "NO", "Norway"),
    (33, "PL", "Poland"),
    (34, "PT", "Portugal"),
    (35, "RO", "Romania"),
    (36, "SG", "Singapore"),
    (37, "SK", "Slovakia"),
    (38, "SI", "Slovenia"),
    (39, "ZA", "South Africa"),
    (40, "KR", "South Korea"),
    (41, "ES", "Spain"),
    (42, "SE", "Sweden"),
    (43, "CH", "Switzerland"),
    (44, "GB", "United Kingdom"),
    (45, "US", "United States"),
];

impl CountryDirectory for EmbeddedDirectory {
    fn resolve(&self, id: u32) -> Option<Country> {
        COUNTRIES
            .iter()
            .find(|(entry_id, _, _)| *entry_id == id)
            .map(|&(id, iso, name)| Country {
                id,
                iso_code: iso.to_string(),
                display_name: name.to_string(),
            })
    }

    fn all(&self) -> Vec<Country> {
        COUNTRIES
            .iter()
            .map(|&(id, iso, name)| Country {
                id,
                iso_code: iso.to_string(),
                display_name: name.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_country() {
        let country = EmbeddedDirectory.resolve(45).unwrap();
        assert_eq!(country.iso_code, "US");
        assert_eq!(country.display_name, "United States");
    }

    #[test]
    fn test_resolve_unknown_id() {
        assert!(EmbeddedDirectory.resolve(9999).is_none());
    }

    #[test]
    fn test_no_country_sentinel_is_not_selectable() {
        assert!(EmbeddedDirectory.resolve(NO_COUNTRY).is_none());
        assert!(EmbeddedDirectory.all().iter().all(|c| c.id != NO_COUNTRY));
    }

    #[test]
    fn test_identifiers_are_unique() {
        let all = EmbeddedDirectory.all();
        let mut ids: Vec<u32> = all.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_iso_codes_are_two_letters() {
        for country in EmbeddedDirectory.all() {
            assert_eq!(country.iso_code.len(), 2, "bad code: {}", country.iso_code);
            assert!(country.iso_code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
