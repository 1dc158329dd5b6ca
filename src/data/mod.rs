pub mod activities;
pub mod districts;
pub mod factions;
pub mod vehicles;

use std::fmt;
use std::path::Path;

pub use activities::{load_activity_catalog, ActivityCatalog, ActivityDefinition};
pub use districts::{load_district_catalog, DistrictCatalog, DistrictDefinition, Layer};
pub use factions::{load_faction_catalog, FactionCatalog, FactionDefinition, FactionKind};
pub use vehicles::{load_vehicle_catalog, VehicleCatalog, VehicleDefinition};

#[derive(Debug)]
pub enum DataError {
    Io { path: String, source: std::io::Error },
    Json { path: String, source: serde_json::Error },
    Validation(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            DataError::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
            DataError::Validation(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for DataError {}

/// The static world content consumed once at `Game` construction.
#[derive(Debug, Clone)]
pub struct WorldCatalogs {
    pub districts: DistrictCatalog,
    pub factions: FactionCatalog,
    pub activities: ActivityCatalog,
}

impl WorldCatalogs {
    /// Built-in content so the binary runs without asset files on disk.
    pub fn builtin() -> Self {
        Self {
            districts: DistrictCatalog::builtin(),
            factions: FactionCatalog::builtin(),
            activities: ActivityCatalog::builtin(),
        }
    }

    /// Load all three catalogs from `<dir>/districts.json` etc.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        Ok(Self {
            districts: load_district_catalog(dir.join("districts.json"))?,
            factions: load_faction_catalog(dir.join("factions.json"))?,
            activities: load_activity_catalog(dir.join("activities.json"))?,
        })
    }

    /// Cross-catalog validation; the world refuses to start on an
    /// empty or inconsistent content set.
    pub fn validate(&self) -> Result<(), DataError> {
        self.districts.validate()?;
        self.factions.validate()?;
        self.activities.validate()?;
        Ok(())
    }
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<T, DataError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataError::Json {
        path: path.display().to_string(),
        source,
    })
}
