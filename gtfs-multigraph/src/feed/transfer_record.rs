use serde::{Deserialize, Serialize};

/// a row of transfers.txt. `transfer_type` and `min_transfer_time` are carried
/// through to the transfer edge output as-is.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TransferRecord {
    pub from_stop_id: String,
    pub to_stop_id: String,
    #[serde(default)]
    pub transfer_type: String,
    #[serde(default)]
    pub min_transfer_time: String,
}
