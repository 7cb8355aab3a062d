/// traversal cost assigned to every transfer edge, the same as any station-to-station
/// move. `min_transfer_time` is never used to derive it.
pub const TRANSFER_COST: u32 = 1;

/// a walking connection between two distinct stations of the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferEdge {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub from_idx: usize,
    pub to_idx: usize,
    pub transfer_type: String,
    pub min_transfer_time: String,
    pub cost: u32,
}
