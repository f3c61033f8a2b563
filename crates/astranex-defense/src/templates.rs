//! Region-specific evacuation zone templates.
//!
//! Consolidates per-region zone parameters for the evacuation planner.
//! Fractions are not normalised and need not sum to one.

use astranex_core::enums::{Location, SeverityColor};

/// One priority zone in a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneSpec {
    pub name: &'static str,
    /// Share of the at-risk population in this zone.
    pub population_fraction: f64,
    /// Hours from plan start by which the zone must be clear.
    pub deadline_hours: u32,
    pub severity: SeverityColor,
}

/// Three zones, most urgent first.
#[derive(Debug, Clone, PartialEq)]
pub struct EvacuationTemplate {
    pub location_label: String,
    pub zones: [ZoneSpec; 3],
}

const fn zone(
    name: &'static str,
    population_fraction: f64,
    deadline_hours: u32,
    severity: SeverityColor,
) -> ZoneSpec {
    ZoneSpec {
        name,
        population_fraction,
        deadline_hours,
        severity,
    }
}

const BAY_OF_BENGAL: [ZoneSpec; 3] = [
    zone("Dhaka & Near Coast (Highest Density)", 0.25, 24, SeverityColor::Red),
    zone("Coastal Districts (Chittagong/Khulna)", 0.45, 48, SeverityColor::Orange),
    zone("Inland Buffer Zones (Secondary Risk)", 0.30, 72, SeverityColor::Yellow),
];

const NORTH_AMERICA: [ZoneSpec; 3] = [
    zone("Ground Zero & Primary Blast Ring (50km)", 0.15, 12, SeverityColor::Red),
    zone("Thermal and Fire Risk Zone (200km)", 0.45, 36, SeverityColor::Orange),
    zone("Seismic/Air Shockwave Zone (500km)", 0.40, 60, SeverityColor::Yellow),
];

const EUROPE: [ZoneSpec; 3] = [
    zone("Immediate Impact Crater Zone", 0.20, 18, SeverityColor::Red),
    zone("Major Urban Centers Proximity", 0.50, 48, SeverityColor::Orange),
    zone("Contiguous Land Mass Risk Zones", 0.30, 72, SeverityColor::Yellow),
];

const GENERIC_LAND: [ZoneSpec; 3] = [
    zone("Ground Zero Ring", 0.1, 24, SeverityColor::Red),
    zone("Primary Risk Buffer (Shockwave)", 0.4, 48, SeverityColor::Orange),
    zone("Secondary Risk Buffer (Seismic/Fallout)", 0.5, 72, SeverityColor::Yellow),
];

/// Get the zone template for a target. Regions without a bespoke template
/// (oceans included) use the generic land template.
pub fn get_template(location: Location) -> EvacuationTemplate {
    let (location_label, zones) = match location {
        Location::BayOfBengal => (
            "Bay of Bengal (Bangladesh/India Coastal)".to_string(),
            BAY_OF_BENGAL,
        ),
        Location::NorthAmerica => (
            "North American Interior (US/Canada)".to_string(),
            NORTH_AMERICA,
        ),
        Location::Europe => ("Western Europe (High Density)".to_string(), EUROPE),
        other => (format!("{} (General Land Impact)", other.name()), GENERIC_LAND),
    };
    EvacuationTemplate {
        location_label,
        zones,
    }
}
