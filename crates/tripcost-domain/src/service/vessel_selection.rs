//! Vessel lookup and trip-calculation eligibility

use crate::model::VesselRecord;

/// Vessels that carry every field the trip calculator needs
pub fn eligible_vessels(vessels: &[VesselRecord]) -> Vec<&VesselRecord> {
    vessels.iter().filter(|v| v.is_trip_eligible()).collect()
}

/// Find a vessel by exact id, then by name ignoring case and spacing
pub fn find_vessel<'a, I>(query: &str, vessels: I) -> Option<&'a VesselRecord>
where
    I: IntoIterator<Item = &'a VesselRecord>,
    I::IntoIter: Clone,
{
    let mut vessels = vessels.into_iter();
    if let Some(v) = vessels.clone().find(|v| v.id == query) {
        return Some(v);
    }
    let wanted = normalize_name(query);
    vessels.find(|v| normalize_name(&v.name) == wanted)
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
