use std::path::Path;

use super::{
    balance_demand, join_node_ridership, ridership_ops, ComplexRidership, DemandError,
    MappedRidership, RawRidershipRecord, StationMapRecord,
};
use crate::export::{writer_ops, NodeRow};
use crate::util::table_ops;

pub const NODES_WITH_RIDERSHIP_TABLE: &str = "nodes_with_ridership";
pub const BALANCED_DEMAND_TABLE: &str = "balanced_demand";

/// sums a raw ridership export per station complex and writes the totals.
pub fn aggregate_ridership_file(input_file: &Path, output_file: &Path) -> Result<(), DemandError> {
    let records: Vec<RawRidershipRecord> = table_ops::read_table(input_file)?;
    let aggregated = ridership_ops::aggregate_ridership(&records)?;
    writer_ops::write_table_file(output_file, &aggregated)?;
    Ok(())
}

/// attaches GTFS stop ids from a station map to aggregated complex ridership.
pub fn map_ridership_file(
    input_file: &Path,
    station_map_file: &Path,
    output_file: &Path,
) -> Result<(), DemandError> {
    let ridership: Vec<ComplexRidership> = table_ops::read_table(input_file)?;
    let station_map: Vec<StationMapRecord> = table_ops::read_table(station_map_file)?;
    let mapped = ridership_ops::map_to_stops(&ridership, &station_map);
    writer_ops::write_table_file(output_file, &mapped)?;
    Ok(())
}

/// joins exported nodes with mapped morning and evening ridership, balances the
/// net demand and writes both the joined and the balanced tables.
pub fn run_demand(
    nodes_file: &Path,
    morning_file: &Path,
    evening_file: &Path,
    output_directory: &Path,
    compress: bool,
    overwrite: bool,
) -> Result<(), DemandError> {
    let nodes: Vec<NodeRow> = table_ops::read_table(nodes_file)?;
    let morning: Vec<MappedRidership> = table_ops::read_table(morning_file)?;
    let evening: Vec<MappedRidership> = table_ops::read_table(evening_file)?;
    log::info!(
        "nodes {}, morning rows {}, evening rows {}",
        nodes.len(),
        morning.len(),
        evening.len()
    );

    let joined = join_node_ridership(&nodes, &morning, &evening)?;
    let (balanced, totals) = balance_demand(&joined);
    log::info!("balanced demand against a total of {}", totals.target());

    let filenames = [NODES_WITH_RIDERSHIP_TABLE, BALANCED_DEMAND_TABLE]
        .map(|name| writer_ops::table_filename(name, compress));
    let paths = writer_ops::check_targets(output_directory, &filenames, overwrite)?;
    if let [joined_path, balanced_path] = &paths[..] {
        writer_ops::write_table_file(joined_path, &joined)?;
        writer_ops::write_table_file(balanced_path, &balanced)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{aggregate_ridership_file, map_ridership_file, run_demand};

    #[test]
    fn test_ridership_pipeline() {
        let directory = std::env::temp_dir().join("gtfs_multigraph_demand_ops_test");
        fs::create_dir_all(&directory).unwrap();
        fs::write(
            directory.join("raw_morning.csv"),
            "transit_timestamp,station_complex_id,ridership\n\
             10/21/2024 06:00,611,\"1,000\"\n\
             10/21/2024 07:00,611,500\n\
             10/21/2024 06:00,10,40\n",
        )
        .unwrap();
        fs::write(
            directory.join("raw_evening.csv"),
            "station_complex_id,ridership\n611,300\n10,\"1,240\"\n",
        )
        .unwrap();
        fs::write(
            directory.join("stations.csv"),
            "GTFS Stop ID,Complex ID,Stop Name\n127,611,Times Sq-42 St\n127,611,Times Sq-42 St\nA27,10,42 St-Port Authority\n",
        )
        .unwrap();
        fs::write(
            directory.join("nodes.csv"),
            "node_idx,stop_id,stop_name,stop_lon,stop_lat\n\
             0,127,Times Sq-42 St,-73.987495,40.75529\n\
             1,A27,42 St-Port Authority Bus Terminal,-73.989938,40.757308\n\
             2,101,Van Cortlandt Park-242 St,,\n",
        )
        .unwrap();

        for side in ["morning", "evening"] {
            aggregate_ridership_file(
                &directory.join(format!("raw_{side}.csv")),
                &directory.join(format!("aggregated_{side}.csv")),
            )
            .unwrap();
            map_ridership_file(
                &directory.join(format!("aggregated_{side}.csv")),
                &directory.join("stations.csv"),
                &directory.join(format!("mapped_{side}.csv")),
            )
            .unwrap();
        }
        let aggregated = fs::read_to_string(directory.join("aggregated_morning.csv")).unwrap();
        assert_eq!(
            aggregated,
            "station_complex_id,ridership\n611,1500.0\n10,40.0\n"
        );

        run_demand(
            &directory.join("nodes.csv"),
            &directory.join("mapped_morning.csv"),
            &directory.join("mapped_evening.csv"),
            &directory,
            false,
            true,
        )
        .unwrap();

        let balanced = fs::read_to_string(directory.join("balanced_demand.csv")).unwrap();
        let ints: Vec<&str> = balanced
            .lines()
            .skip(1)
            .map(|line| line.rsplit(',').next().unwrap_or_default())
            .collect();
        // net {+1200, -1200, 0} against M = 1540
        assert_eq!(ints, vec!["1540", "-1540", "0"]);
    }
}
