use std::path::Path;

use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};

use super::AppError;
use crate::feed::RouteAdmission;
use crate::network::{EdgeOrientation, NodeOrdering};

/// parameters of a network build. any field missing from a configuration file
/// takes its default.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// agencies whose routes are admitted
    pub include_agencies: Vec<String>,
    /// route ids excluded even when their agency is admitted
    pub ignore_routes: Vec<String>,
    pub node_ordering: NodeOrdering,
    pub edge_orientation: EdgeOrientation,
    /// write .csv.gz instead of .csv
    pub compress: bool,
    pub overwrite: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            include_agencies: vec![String::from("MTA NYCT")],
            ignore_routes: vec![String::from("SI")],
            node_ordering: NodeOrdering::default(),
            edge_orientation: EdgeOrientation::default(),
            compress: false,
            overwrite: true,
        }
    }
}

impl NetworkConfig {
    /// reads a .toml or .json configuration file.
    pub fn from_file(filepath: &Path) -> Result<NetworkConfig, AppError> {
        let f = filepath.display();
        let format = match filepath.extension().and_then(|e| e.to_str()) {
            Some("toml") => FileFormat::Toml,
            Some("json") => FileFormat::Json,
            _ => {
                return Err(AppError::ConfigurationError(format!(
                    "unsupported file type: {f}"
                )))
            }
        };
        let source = config::File::from(filepath).format(format);
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        config
            .try_deserialize::<NetworkConfig>()
            .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
    }

    /// decodes a configuration from a string in the given format.
    pub fn try_from_str(s: &str, format: FileFormat) -> Result<NetworkConfig, AppError> {
        Config::builder()
            .add_source(config::File::from_str(s, format))
            .build()
            .and_then(|c| c.try_deserialize::<NetworkConfig>())
            .map_err(|e| AppError::ConfigurationError(format!("failure decoding: {e}")))
    }

    pub fn route_admission(&self) -> RouteAdmission {
        RouteAdmission::new(
            self.include_agencies.iter().cloned(),
            self.ignore_routes.iter().cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::NetworkConfig;
    use crate::feed::RouteRecord;
    use crate::network::{EdgeOrientation, NodeOrdering};

    #[test]
    fn test_defaults() {
        let conf = NetworkConfig::default();
        assert_eq!(conf.include_agencies, vec!["MTA NYCT"]);
        assert_eq!(conf.ignore_routes, vec!["SI"]);
        assert_eq!(conf.node_ordering, NodeOrdering::Discovery);
        assert_eq!(conf.edge_orientation, EdgeOrientation::Directed);
        assert!(!conf.compress);
        assert!(conf.overwrite);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
            ignore_routes = ["SI", "GS"]
            node_ordering = "canonical_id"
            compress = true
        "#;
        let conf = NetworkConfig::try_from_str(toml, FileFormat::Toml).unwrap();
        assert_eq!(conf.include_agencies, vec!["MTA NYCT"]);
        assert_eq!(conf.ignore_routes, vec!["SI", "GS"]);
        assert_eq!(conf.node_ordering, NodeOrdering::CanonicalId);
        assert_eq!(conf.edge_orientation, EdgeOrientation::Directed);
        assert!(conf.compress);
    }

    #[test]
    fn test_json() {
        let json = r#"{ "include_agencies": ["MTABC"], "edge_orientation": "undirected" }"#;
        let conf = NetworkConfig::try_from_str(json, FileFormat::Json).unwrap();
        assert_eq!(conf.edge_orientation, EdgeOrientation::Undirected);

        let admission = conf.route_admission();
        let route = RouteRecord {
            route_id: String::from("Q10"),
            agency_id: String::from("MTABC"),
            ..Default::default()
        };
        assert!(admission.admits(&route));
    }

    #[test]
    fn test_invalid_enum() {
        let toml = r#"edge_orientation = "sideways""#;
        assert!(NetworkConfig::try_from_str(toml, FileFormat::Toml).is_err());
    }
}
