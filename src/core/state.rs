//! # Application State
//!
//! Core navigation state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen                       // which view is active
//! ├── catalog: CvCatalog                   // immutable employer/project data
//! ├── catalog_status: CatalogStatus        // loaded, missing or malformed
//! ├── employer_cursor: BoundedCursor       // highlighted employer
//! ├── project_cursor: BoundedCursor        // highlighted project
//! ├── selected_project: Option<(usize, usize)>  // bound in project_detail only
//! ├── email: EmailField                    // contact form input
//! ├── width / height: u16                  // last reported terminal size
//! └── ready: bool                          // a size has been reported
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::catalog::{CatalogStatus, CvCatalog, LoadedCatalog, Project};
use crate::core::cursor::BoundedCursor;
use crate::core::email::EmailField;
use crate::core::screen::Screen;

pub struct App {
    pub screen: Screen,
    catalog: CvCatalog,
    catalog_status: CatalogStatus,
    pub employer_cursor: BoundedCursor,
    pub project_cursor: BoundedCursor,
    /// (employer, project) indices into the catalog. A reference, never a copy.
    pub selected_project: Option<(usize, usize)>,
    pub email: EmailField,
    pub width: u16,
    pub height: u16,
    pub ready: bool,
}

impl App {
    pub fn new(loaded: LoadedCatalog) -> Self {
        Self {
            screen: Screen::default(),
            catalog: loaded.catalog,
            catalog_status: loaded.status,
            employer_cursor: BoundedCursor::new(),
            project_cursor: BoundedCursor::new(),
            selected_project: None,
            email: EmailField::default(),
            width: 0,
            height: 0,
            ready: false,
        }
    }

    /// Read-only access; the catalog is never mutated after construction.
    pub fn catalog(&self) -> &CvCatalog {
        &self.catalog
    }

    pub fn catalog_status(&self) -> &CatalogStatus {
        &self.catalog_status
    }

    pub fn employer_count(&self) -> usize {
        self.catalog.employers.len()
    }

    /// Project count of the highlighted employer.
    pub fn project_count(&self) -> usize {
        self.catalog.project_count(self.employer_cursor.index())
    }

    /// The bound project, only while the detail screen is showing.
    pub fn selected_project(&self) -> Option<&Project> {
        if self.screen != Screen::ProjectDetail {
            return None;
        }
        let (employer, project) = self.selected_project?;
        self.catalog.project(employer, project)
    }
}
