use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::RouteMap;

/// Default filename for the persisted route map.
const STORE_FILENAME: &str = "routes.json";

/// Resolve the default route map location using platform-specific project
/// directories.
pub fn default_store_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "flightroute", "flightroute")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(STORE_FILENAME))
}

/// Gatekeeper for the persisted route map.
///
/// All disk reads and writes go through a store so the on-disk document and
/// the in-memory [`RouteMap`] stay in step. The whole document is rewritten
/// on every save; graphs in this domain stay small enough that partial
/// persistence would buy nothing.
#[derive(Debug, Clone)]
pub struct GraphStore {
    path: PathBuf,
}

impl GraphStore {
    /// Create a store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform default location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(default_store_path()?))
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full route map from disk.
    ///
    /// A missing file yields an empty map. Anything else that prevents a
    /// well-formed map from loading is reported as [`Error::MalformedStore`].
    pub fn load(&self) -> Result<RouteMap> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted route map, starting empty");
                return Ok(RouteMap::default());
            }
            Err(err) => return Err(err.into()),
        };

        let map: RouteMap = serde_json::from_str(&raw).map_err(|err| Error::MalformedStore {
            path: self.path.clone(),
            message: err.to_string(),
        })?;

        map.validate().map_err(|violation| Error::MalformedStore {
            path: self.path.clone(),
            message: violation.to_string(),
        })?;

        debug!(
            path = %self.path.display(),
            airports = map.len(),
            routes = map.route_count(),
            "route map loaded"
        );
        Ok(map)
    }

    /// Overwrite the persisted document with the given map.
    ///
    /// The document is written to a temporary file in the target directory
    /// and renamed into place, so a crash mid-write cannot leave a truncated
    /// map behind.
    pub fn save(&self, map: &RouteMap) -> Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, map)?;
        file.write_all(b"\n")?;
        file.persist(&self.path).map_err(|err| Error::Io(err.error))?;

        info!(path = %self.path.display(), airports = map.len(), "route map saved");
        Ok(())
    }
}
