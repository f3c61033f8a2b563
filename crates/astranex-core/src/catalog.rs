//! Fixed catalog of known near-Earth objects offered to the operator.

use crate::enums::Material;
use crate::types::AsteroidProfile;

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    /// Diameter (m).
    pub diameter_m: f64,
    /// Velocity (km/s).
    pub velocity_km_s: f64,
    pub material: Material,
}

impl CatalogEntry {
    pub fn to_profile(&self) -> AsteroidProfile {
        AsteroidProfile {
            identifier: self.id.to_string(),
            name: self.name.to_string(),
            diameter_m: self.diameter_m,
            velocity_km_s: self.velocity_km_s,
            material: self.material,
        }
    }
}

const fn entry(
    id: &'static str,
    name: &'static str,
    diameter_m: f64,
    velocity_km_s: f64,
    material: Material,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        diameter_m,
        velocity_km_s,
        material,
    }
}

pub static KNOWN_ASTEROIDS: [CatalogEntry; 9] = [
    entry("bennu", "Bennu", 490.0, 12.4, Material::Carbonaceous),
    entry("apophis", "Apophis", 370.0, 17.2, Material::Stony),
    entry("ryugu", "Ryugu", 900.0, 14.3, Material::Carbonaceous),
    entry("ceres", "Ceres", 940.0, 8.5, Material::Stony),
    entry("vesta", "Vesta", 525.0, 9.2, Material::Stony),
    entry("pallas", "Pallas", 512.0, 10.8, Material::Stony),
    entry("hygiea", "Hygiea", 430.0, 7.5, Material::Carbonaceous),
    entry("eros", "Eros", 33.0, 15.3, Material::Stony),
    // Starting point for free-form edits.
    entry("custom", "Custom", 500.0, 17.0, Material::IronNickel),
];

/// Look up a catalog entry by identifier.
pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    KNOWN_ASTEROIDS.iter().find(|a| a.id == id)
}
