use indexmap::IndexMap;

use super::NetworkError;
use crate::feed::StopRecord;

/// resolves stop ids into the namespace of station nodes: a stop with a parent
/// station is replaced by that parent, any other stop stands for itself.
#[derive(Clone, Copy, Debug)]
pub struct StopCanonicalizer<'a> {
    stops: &'a IndexMap<String, StopRecord>,
}

impl<'a> StopCanonicalizer<'a> {
    pub fn new(stops: &'a IndexMap<String, StopRecord>) -> StopCanonicalizer<'a> {
        StopCanonicalizer { stops }
    }

    /// the canonical (parent station) id for a stop id.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownStop`] when `stop_id` is not in the stops table.
    pub fn canonicalize(&self, stop_id: &str) -> Result<&'a str, NetworkError> {
        let (id, stop) = self
            .stops
            .get_key_value(stop_id)
            .ok_or_else(|| NetworkError::UnknownStop(stop_id.to_string()))?;
        let parent = stop.parent_station.trim();
        if parent.is_empty() {
            Ok(id.as_str())
        } else {
            Ok(parent)
        }
    }

    /// the stops table record of the canonical station for `stop_id`. parents are
    /// resolved one level only, so a parent that itself names a parent is returned as is.
    pub fn canonical_stop(&self, stop_id: &str) -> Result<&'a StopRecord, NetworkError> {
        let canonical_id = self.canonicalize(stop_id)?;
        self.stops
            .get(canonical_id)
            .ok_or_else(|| NetworkError::UnknownStop(canonical_id.to_string()))
    }

    /// all stops in file order.
    pub fn stops(&self) -> impl Iterator<Item = &'a StopRecord> {
        self.stops.values()
    }
}
