//! Type-safe enumerations for the embodied-suffering data model.
//!
//! Countries, materials and sourcing bases appear as strings in dataset
//! files; these enums give them compile-time identity. Every enum carries an
//! `Undefined` variant, which is a valid (if degenerate) input to the
//! scorers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exporting or importing country referenced by a dataset record.
///
/// The set is closed: records naming a country outside this list fail to
/// parse at load time rather than leaking free-form strings into scoring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[non_exhaustive]
pub enum Country {
    #[default]
    Undefined,
    Argentina,
    Australia,
    Austria,
    Bangladesh,
    Belarus,
    Belgium,
    Bolivia,
    Brazil,
    Bulgaria,
    Cambodia,
    Cameroon,
    Canada,
    Chile,
    China,
    Colombia,
    CzechRepublic,
    DemocraticRepublicOfTheCongo,
    Denmark,
    Ecuador,
    Egypt,
    Eritrea,
    Ethiopia,
    Finland,
    France,
    Germany,
    Ghana,
    Greece,
    Guatemala,
    Honduras,
    HongKong,
    India,
    Indonesia,
    Iran,
    Iraq,
    Ireland,
    Israel,
    Italy,
    Japan,
    Kazakhstan,
    Kenya,
    Libya,
    Malaysia,
    Mexico,
    Morocco,
    Mozambique,
    Myanmar,
    Netherlands,
    NewZealand,
    Nigeria,
    NorthKorea,
    Norway,
    Pakistan,
    Peru,
    Philippines,
    Poland,
    Portugal,
    Qatar,
    Romania,
    Russia,
    SaudiArabia,
    Singapore,
    SouthAfrica,
    SouthKorea,
    Spain,
    SriLanka,
    Sweden,
    Switzerland,
    Taiwan,
    Thailand,
    Turkey,
    Ukraine,
    UnitedArabEmirates,
    UnitedKingdom,
    UnitedStatesOfAmerica,
    Uzbekistan,
    Venezuela,
    Vietnam,
    Zambia,
    Zimbabwe,
}

impl Country {
    /// All known countries, `Undefined` included.
    pub const ALL: &'static [Country] = &[
        Country::Undefined,
        Country::Argentina,
        Country::Australia,
        Country::Austria,
        Country::Bangladesh,
        Country::Belarus,
        Country::Belgium,
        Country::Bolivia,
        Country::Brazil,
        Country::Bulgaria,
        Country::Cambodia,
        Country::Cameroon,
        Country::Canada,
        Country::Chile,
        Country::China,
        Country::Colombia,
        Country::CzechRepublic,
        Country::DemocraticRepublicOfTheCongo,
        Country::Denmark,
        Country::Ecuador,
        Country::Egypt,
        Country::Eritrea,
        Country::Ethiopia,
        Country::Finland,
        Country::France,
        Country::Germany,
        Country::Ghana,
        Country::Greece,
        Country::Guatemala,
        Country::Honduras,
        Country::HongKong,
        Country::India,
        Country::Indonesia,
        Country::Iran,
        Country::Iraq,
        Country::Ireland,
        Country::Israel,
        Country::Italy,
        Country::Japan,
        Country::Kazakhstan,
        Country::Kenya,
        Country::Libya,
        Country::Malaysia,
        Country::Mexico,
        Country::Morocco,
        Country::Mozambique,
        Country::Myanmar,
        Country::Netherlands,
        Country::NewZealand,
        Country::Nigeria,
        Country::NorthKorea,
        Country::Norway,
        Country::Pakistan,
        Country::Peru,
        Country::Philippines,
        Country::Poland,
        Country::Portugal,
        Country::Qatar,
        Country::Romania,
        Country::Russia,
        Country::SaudiArabia,
        Country::Singapore,
        Country::SouthAfrica,
        Country::SouthKorea,
        Country::Spain,
        Country::SriLanka,
        Country::Sweden,
        Country::Switzerland,
        Country::Taiwan,
        Country::Thailand,
        Country::Turkey,
        Country::Ukraine,
        Country::UnitedArabEmirates,
        Country::UnitedKingdom,
        Country::UnitedStatesOfAmerica,
        Country::Uzbekistan,
        Country::Venezuela,
        Country::Vietnam,
        Country::Zambia,
        Country::Zimbabwe,
    ];

    /// Returns the display name as it appears in dataset files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Undefined => "Undefined",
            Country::Argentina => "Argentina",
            Country::Australia => "Australia",
            Country::Austria => "Austria",
            Country::Bangladesh => "Bangladesh",
            Country::Belarus => "Belarus",
            Country::Belgium => "Belgium",
            Country::Bolivia => "Bolivia",
            Country::Brazil => "Brazil",
            Country::Bulgaria => "Bulgaria",
            Country::Cambodia => "Cambodia",
            Country::Cameroon => "Cameroon",
            Country::Canada => "Canada",
            Country::Chile => "Chile",
            Country::China => "China",
            Country::Colombia => "Colombia",
            Country::CzechRepublic => "Czech Republic",
            Country::DemocraticRepublicOfTheCongo => "Democratic Republic of the Congo",
            Country::Denmark => "Denmark",
            Country::Ecuador => "Ecuador",
            Country::Egypt => "Egypt",
            Country::Eritrea => "Eritrea",
            Country::Ethiopia => "Ethiopia",
            Country::Finland => "Finland",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Ghana => "Ghana",
            Country::Greece => "Greece",
            Country::Guatemala => "Guatemala",
            Country::Honduras => "Honduras",
            Country::HongKong => "Hong Kong",
            Country::India => "India",
            Country::Indonesia => "Indonesia",
            Country::Iran => "Iran",
            Country::Iraq => "Iraq",
            Country::Ireland => "Ireland",
            Country::Israel => "Israel",
            Country::Italy => "Italy",
            Country::Japan => "Japan",
            Country::Kazakhstan => "Kazakhstan",
            Country::Kenya => "Kenya",
            Country::Libya => "Libya",
            Country::Malaysia => "Malaysia",
            Country::Mexico => "Mexico",
            Country::Morocco => "Morocco",
            Country::Mozambique => "Mozambique",
            Country::Myanmar => "Myanmar",
            Country::Netherlands => "Netherlands",
            Country::NewZealand => "New Zealand",
            Country::Nigeria => "Nigeria",
            Country::NorthKorea => "North Korea",
            Country::Norway => "Norway",
            Country::Pakistan => "Pakistan",
            Country::Peru => "Peru",
            Country::Philippines => "Philippines",
            Country::Poland => "Poland",
            Country::Portugal => "Portugal",
            Country::Qatar => "Qatar",
            Country::Romania => "Romania",
            Country::Russia => "Russia",
            Country::SaudiArabia => "Saudi Arabia",
            Country::Singapore => "Singapore",
            Country::SouthAfrica => "South Africa",
            Country::SouthKorea => "South Korea",
            Country::Spain => "Spain",
            Country::SriLanka => "Sri Lanka",
            Country::Sweden => "Sweden",
            Country::Switzerland => "Switzerland",
            Country::Taiwan => "Taiwan",
            Country::Thailand => "Thailand",
            Country::Turkey => "Turkey",
            Country::Ukraine => "Ukraine",
            Country::UnitedArabEmirates => "United Arab Emirates",
            Country::UnitedKingdom => "United Kingdom",
            Country::UnitedStatesOfAmerica => "United States of America",
            Country::Uzbekistan => "Uzbekistan",
            Country::Venezuela => "Venezuela",
            Country::Vietnam => "Vietnam",
            Country::Zambia => "Zambia",
            Country::Zimbabwe => "Zimbabwe",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Country {
    type Err = String;

    /// Parse a country name, ignoring case, whitespace and punctuation
    /// differences ("United  states of america" resolves fine).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        if wanted.is_empty() {
            return Err(format!("Unknown country: {s}"));
        }
        Country::ALL
            .iter()
            .find(|country| normalize_token(country.as_str()) == wanted)
            .copied()
            .ok_or_else(|| format!("Unknown country: {s}"))
    }
}

/// Construction material tracked by the import-source datasets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[non_exhaustive]
pub enum Material {
    #[default]
    Undefined,
    Aluminium,
    Brass,
    Bronze,
    Cement,
    Concrete,
    Copper,
    Glass,
    Iron,
    Lead,
    Steel,
    Stone,
    Timber,
    Zinc,
}

impl Material {
    /// All known materials, `Undefined` included.
    pub const ALL: &'static [Material] = &[
        Material::Undefined,
        Material::Aluminium,
        Material::Brass,
        Material::Bronze,
        Material::Cement,
        Material::Concrete,
        Material::Copper,
        Material::Glass,
        Material::Iron,
        Material::Lead,
        Material::Steel,
        Material::Stone,
        Material::Timber,
        Material::Zinc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Undefined => "Undefined",
            Material::Aluminium => "Aluminium",
            Material::Brass => "Brass",
            Material::Bronze => "Bronze",
            Material::Cement => "Cement",
            Material::Concrete => "Concrete",
            Material::Copper => "Copper",
            Material::Glass => "Glass",
            Material::Iron => "Iron",
            Material::Lead => "Lead",
            Material::Steel => "Steel",
            Material::Stone => "Stone",
            Material::Timber => "Timber",
            Material::Zinc => "Zinc",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Material {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        if wanted.is_empty() {
            return Err(format!("Unknown material: {s}"));
        }
        Material::ALL
            .iter()
            .find(|material| normalize_token(material.as_str()) == wanted)
            .copied()
            .ok_or_else(|| format!("Unknown material: {s}"))
    }
}

/// Whether import ratios in a breakdown are measured by traded mass or by
/// traded cost.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum SourcingBasis {
    #[default]
    Undefined,
    ByCost,
    ByMass,
}

impl SourcingBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourcingBasis::Undefined => "Undefined",
            SourcingBasis::ByCost => "ByCost",
            SourcingBasis::ByMass => "ByMass",
        }
    }

    /// Uppercase tag used to recognize the basis in dataset path names.
    pub fn path_tag(&self) -> Option<&'static str> {
        match self {
            SourcingBasis::Undefined => None,
            SourcingBasis::ByCost => Some("BYCOST"),
            SourcingBasis::ByMass => Some("BYMASS"),
        }
    }
}

impl fmt::Display for SourcingBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourcingBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "UNDEFINED" | "" => Ok(SourcingBasis::Undefined),
            "BYCOST" => Ok(SourcingBasis::ByCost),
            "BYMASS" => Ok(SourcingBasis::ByMass),
            _ => Err(format!("Unknown sourcing basis: {s}")),
        }
    }
}

/// Uppercase and strip everything that is not a letter or digit.
fn normalize_token(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_from_str_ignores_case_and_spacing() {
        assert_eq!(
            "united states of america".parse::<Country>().unwrap(),
            Country::UnitedStatesOfAmerica
        );
        assert_eq!("BRAZIL".parse::<Country>().unwrap(), Country::Brazil);
        assert_eq!(
            "CzechRepublic".parse::<Country>().unwrap(),
            Country::CzechRepublic
        );
        assert!("Atlantis".parse::<Country>().is_err());
    }

    #[test]
    fn material_round_trips_through_display() {
        for material in Material::ALL {
            assert_eq!(
                material.as_str().parse::<Material>().unwrap(),
                *material,
                "{material} should parse back to itself"
            );
        }
    }

    #[test]
    fn sourcing_basis_tags() {
        assert_eq!(SourcingBasis::ByCost.path_tag(), Some("BYCOST"));
        assert_eq!(SourcingBasis::ByMass.path_tag(), Some("BYMASS"));
        assert_eq!(SourcingBasis::Undefined.path_tag(), None);
        assert_eq!(
            "by mass".parse::<SourcingBasis>().unwrap(),
            SourcingBasis::ByMass
        );
    }
}
