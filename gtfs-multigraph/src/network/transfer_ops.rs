use super::{NetworkError, NetworkIndex, StopCanonicalizer, TransferEdge, TRANSFER_COST};
use crate::feed::TransferRecord;

/// maps raw transfer rows onto the station network.
///
/// a row becomes a [`TransferEdge`] only when both endpoints canonicalize to different
/// stations that are nodes of the network; all other rows are dropped.
///
/// # Errors
///
/// [`NetworkError::UnknownStop`] if a transfer references a stop missing from the
/// stops table.
pub fn map_transfers(
    transfers: &[TransferRecord],
    canonicalizer: &StopCanonicalizer,
    index: &NetworkIndex,
) -> Result<Vec<TransferEdge>, NetworkError> {
    let mut result = vec![];
    let mut n_self: usize = 0;
    let mut n_outside: usize = 0;
    for row in transfers {
        let u = canonicalizer.canonicalize(&row.from_stop_id)?;
        let v = canonicalizer.canonicalize(&row.to_stop_id)?;

        if u == v {
            n_self += 1;
            continue;
        }
        let (Some(from_idx), Some(to_idx)) = (index.node_idx(u), index.node_idx(v)) else {
            n_outside += 1;
            continue;
        };

        result.push(TransferEdge {
            from_stop_id: u.to_string(),
            to_stop_id: v.to_string(),
            from_idx,
            to_idx,
            transfer_type: row.transfer_type.clone(),
            min_transfer_time: row.min_transfer_time.clone(),
            cost: TRANSFER_COST,
        });
    }
    log::debug!(
        "dropped {n_self} transfers within one station and {n_outside} transfers outside the network"
    );
    log::info!(
        "Transfer edges (after mapping to graph nodes): {}",
        result.len()
    );
    Ok(result)
}
