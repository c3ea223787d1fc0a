//! # CV Catalog
//!
//! Immutable employer/project data, parsed once at startup from a JSON file.
//!
//! Loading never fails from the caller's point of view: a missing or malformed
//! file yields an empty catalog. The reason is kept in [`CatalogStatus`] so the
//! degraded case is still observable in logs and tests.

use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Stable identifier. Not used for lookup yet.
    pub slug: String,
    pub name: String,
    /// Free-text date range, e.g. "2020–2021".
    pub period: String,
    pub description: String,
    /// Display order is preserved.
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employer {
    pub name: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CvCatalog {
    pub employers: Vec<Employer>,
}

impl CvCatalog {
    pub fn new(employers: Vec<Employer>) -> Self {
        Self { employers }
    }

    pub fn employer(&self, index: usize) -> Option<&Employer> {
        self.employers.get(index)
    }

    pub fn project(&self, employer: usize, project: usize) -> Option<&Project> {
        self.employer(employer)?.projects.get(project)
    }

    /// Number of projects under the given employer, 0 if it does not exist.
    pub fn project_count(&self, employer: usize) -> usize {
        self.employer(employer).map_or(0, |e| e.projects.len())
    }

    pub fn is_empty(&self) -> bool {
        self.employers.is_empty()
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// How the catalog came to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loaded,
    /// The file does not exist. Catalog is empty.
    Missing,
    /// The file exists but could not be read or parsed. Catalog is empty.
    Malformed(String),
}

impl CatalogStatus {
    pub fn is_degraded(&self) -> bool {
        !matches!(self, CatalogStatus::Loaded)
    }
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: CvCatalog,
    pub status: CatalogStatus,
}

/// Parse a catalog from JSON text.
pub fn parse_catalog(contents: &str) -> Result<CvCatalog, CatalogError> {
    serde_json::from_str(contents).map_err(CatalogError::Parse)
}

/// Read and parse the catalog file, propagating any failure.
pub fn read_catalog(path: &Path) -> Result<CvCatalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    parse_catalog(&contents)
}

/// Load the catalog, degrading to an empty one on any error.
pub fn load_catalog(path: &Path) -> LoadedCatalog {
    match read_catalog(path) {
        Ok(catalog) => {
            info!(
                "Loaded CV catalog from {} ({} employers)",
                path.display(),
                catalog.employers.len()
            );
            LoadedCatalog {
                catalog,
                status: CatalogStatus::Loaded,
            }
        }
        Err(CatalogError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            warn!("CV catalog {} not found, starting empty", path.display());
            LoadedCatalog {
                catalog: CvCatalog::default(),
                status: CatalogStatus::Missing,
            }
        }
        Err(e) => {
            warn!("CV catalog {} unusable, starting empty: {}", path.display(), e);
            LoadedCatalog {
                catalog: CvCatalog::default(),
                status: CatalogStatus::Malformed(e.to_string()),
            }
        }
    }
}
