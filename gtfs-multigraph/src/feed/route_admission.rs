use std::collections::HashSet;

use super::RouteRecord;

/// decides which routes of the feed take part in the network: a route is admitted
/// when its agency is on the allow-list and its id is not on the deny-list.
#[derive(Clone, Debug, Default)]
pub struct RouteAdmission {
    include_agencies: HashSet<String>,
    ignore_routes: HashSet<String>,
}

impl RouteAdmission {
    pub fn new<A, R>(include_agencies: A, ignore_routes: R) -> RouteAdmission
    where
        A: IntoIterator<Item = String>,
        R: IntoIterator<Item = String>,
    {
        RouteAdmission {
            include_agencies: include_agencies.into_iter().collect(),
            ignore_routes: ignore_routes.into_iter().collect(),
        }
    }

    pub fn admits(&self, route: &RouteRecord) -> bool {
        self.include_agencies.contains(&route.agency_id)
            && !self.ignore_routes.contains(&route.route_id)
    }
}
