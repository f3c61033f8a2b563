//! Descriptive per-region metrics shown next to the computed effects.
//!
//! These are static placeholders keyed by location category. They are not
//! derived from the physics, so the generic land crater figure will not
//! match the computed crater diameter.

use astranex_core::enums::LocationCategory;
use astranex_core::types::LocationMetric;

const OCEAN: &[(&str, &str)] = &[
    ("Tsunami Height", "50m"),
    ("Coastal Cities at Risk", "15"),
    ("Coastal Population Affected", "25 Million"),
    ("Port Infrastructure Damage", "$500B"),
];

const BAY_OF_BENGAL: &[(&str, &str)] = &[
    ("Tsunami Height", "80m"),
    ("Affected Countries", "Bangladesh, India, Sri Lanka"),
    ("Population at High Risk", "50 Million"),
    ("Evac. Complexity", "EXTREME"),
];

const POLAR: &[(&str, &str)] = &[
    ("Ice Melt Volume", "5000 km³"),
    ("Sea Level Rise", "0.5cm"),
    ("Global Temperature Change", "+0.3°C"),
    ("Ecosystem Impact", "SEVERE"),
];

const LAND: &[(&str, &str)] = &[
    ("Crater Diameter", "8km"),
    ("Immediate Blast Radius", "50km"),
    ("Population at Risk", "10.2 Million"),
    ("Affected Major Cities", "Dhaka, Delhi, Kolkata"),
    ("Agricultural Land Destroyed", "20,000 km²"),
];

pub fn metric_table(category: LocationCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        LocationCategory::Ocean => OCEAN,
        LocationCategory::BayOfBengal => BAY_OF_BENGAL,
        LocationCategory::Polar => POLAR,
        LocationCategory::Land => LAND,
    }
}

pub fn location_metrics(category: LocationCategory) -> Vec<LocationMetric> {
    metric_table(category)
        .iter()
        .map(|(label, value)| LocationMetric {
            label: (*label).to_string(),
            value: (*value).to_string(),
        })
        .collect()
}
