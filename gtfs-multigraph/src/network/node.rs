use geo::Point;

use crate::feed::StopRecord;

/// a station of the network, identified by its canonical stop id.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub stop_id: String,
    pub stop_name: String,
    /// longitude as written in the feed, possibly empty
    pub stop_lon: String,
    /// latitude as written in the feed, possibly empty
    pub stop_lat: String,
}

impl Node {
    /// the plottable position of this node, if both coordinates are finite numbers.
    pub fn position(&self) -> Option<Point<f64>> {
        let lon = self.stop_lon.trim().parse::<f64>().ok()?;
        let lat = self.stop_lat.trim().parse::<f64>().ok()?;
        if lon.is_finite() && lat.is_finite() {
            Some(Point::new(lon, lat))
        } else {
            None
        }
    }
}

impl From<&StopRecord> for Node {
    fn from(stop: &StopRecord) -> Self {
        Node {
            stop_id: stop.stop_id.clone(),
            stop_name: stop.stop_name.clone(),
            stop_lon: stop.stop_lon.clone(),
            stop_lat: stop.stop_lat.clone(),
        }
    }
}
