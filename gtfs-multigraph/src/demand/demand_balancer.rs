use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{apportionment::largest_remainder, NodeRidershipRow};
use crate::export::TableRow;

/// a node with its net ridership, rescaled and integerized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BalancedDemandRow {
    pub node_idx: usize,
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lon: String,
    pub stop_lat: String,
    pub station_complex_id: Option<String>,
    pub ridership_morning: Option<f64>,
    pub ridership_evening: Option<f64>,
    pub net_ridership: f64,
    pub balanced_real: f64,
    pub balanced_net_ridership_int: i64,
}

impl TableRow for BalancedDemandRow {
    const HEADER: &'static [&'static str] = &[
        "node_idx",
        "stop_id",
        "stop_name",
        "stop_lon",
        "stop_lat",
        "station_complex_id",
        "ridership_morning",
        "ridership_evening",
        "net_ridership",
        "balanced_real",
        "balanced_net_ridership_int",
    ];
}

/// the global quantities used to rescale net ridership.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemandTotals {
    /// total morning ridership `M`
    pub total: f64,
    /// sum of positive net ridership `P`
    pub positive: f64,
    /// sum of negative net ridership magnitudes `N`
    pub negative: f64,
}

impl DemandTotals {
    pub fn alpha_pos(&self) -> f64 {
        if self.positive > 0.0 {
            self.total / self.positive
        } else {
            0.0
        }
    }

    pub fn alpha_neg(&self) -> f64 {
        if self.negative > 0.0 {
            self.total / self.negative
        } else {
            0.0
        }
    }

    /// `M` rounded to the integer both signed subtotals must reach.
    pub fn target(&self) -> i64 {
        self.total.round() as i64
    }
}

/// morning minus evening ridership; a missing side counts as zero.
pub fn net_ridership(row: &NodeRidershipRow) -> f64 {
    row.ridership_morning.unwrap_or(0.0) - row.ridership_evening.unwrap_or(0.0)
}

/// rescales net ridership so that positive demand and the magnitude of negative
/// demand each total the morning ridership, then integerizes each side with the
/// largest remainder method. when there is any positive (negative) net ridership,
/// the positive (negative) integers sum to exactly `round(M)`.
pub fn balance_demand(rows: &[NodeRidershipRow]) -> (Vec<BalancedDemandRow>, DemandTotals) {
    let nets = rows.iter().map(net_ridership).collect_vec();
    let totals = DemandTotals {
        total: rows.iter().filter_map(|r| r.ridership_morning).sum(),
        positive: nets.iter().filter(|n| **n > 0.0).sum(),
        negative: nets.iter().filter(|n| **n < 0.0).map(|n| -n).sum(),
    };
    let (alpha_pos, alpha_neg) = (totals.alpha_pos(), totals.alpha_neg());
    log::info!(
        "M={} P={} N={} alpha_pos={alpha_pos} alpha_neg={alpha_neg}",
        totals.total,
        totals.positive,
        totals.negative
    );

    let balanced_real = nets
        .iter()
        .map(|net| {
            if *net > 0.0 {
                alpha_pos * net
            } else if *net < 0.0 {
                alpha_neg * net
            } else {
                0.0
            }
        })
        .collect_vec();

    // each side is apportioned on magnitudes, keyed by stop id for tie-breaks
    let mut integers = vec![0_i64; rows.len()];
    for sign in [1.0, -1.0] {
        let (positions, values): (Vec<usize>, Vec<(&str, f64)>) = balanced_real
            .iter()
            .enumerate()
            .filter(|(_, b)| **b * sign > 0.0)
            .map(|(idx, b)| (idx, (rows[idx].stop_id.as_str(), b * sign)))
            .unzip();
        let apportioned = largest_remainder(&values, totals.target());
        for (idx, value) in positions.into_iter().zip(apportioned) {
            integers[idx] = sign as i64 * value;
        }
    }

    let result = rows
        .iter()
        .zip(nets)
        .zip(balanced_real)
        .zip(integers)
        .map(|(((row, net), real), int)| BalancedDemandRow {
            node_idx: row.node_idx,
            stop_id: row.stop_id.clone(),
            stop_name: row.stop_name.clone(),
            stop_lon: row.stop_lon.clone(),
            stop_lat: row.stop_lat.clone(),
            station_complex_id: row.station_complex_id.clone(),
            ridership_morning: row.ridership_morning,
            ridership_evening: row.ridership_evening,
            net_ridership: net,
            balanced_real: real,
            balanced_net_ridership_int: int,
        })
        .collect_vec();
    (result, totals)
}
