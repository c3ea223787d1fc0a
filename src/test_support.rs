//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::core::action::{Action, Effect, Key, Timer, update};
use crate::core::catalog::{CatalogStatus, CvCatalog, Employer, LoadedCatalog, Project};
use crate::core::state::App;
use crate::notify::{Notifier, NotifyError};

/// One employer "Acme" with one project "Widget" (2020–2021, Go + SQL).
pub fn acme_catalog() -> CvCatalog {
    CvCatalog::new(vec![Employer {
        name: "Acme".to_string(),
        projects: vec![Project {
            slug: "widget".to_string(),
            name: "Widget".to_string(),
            period: "2020–2021".to_string(),
            description: "Designed and shipped the widget pipeline.".to_string(),
            technologies: vec!["Go".to_string(), "SQL".to_string()],
        }],
    }])
}

/// `employers` employers with `projects` projects each, every field unique per (i, j).
pub fn grid_catalog(employers: usize, projects: usize) -> CvCatalog {
    CvCatalog::new(
        (0..employers)
            .map(|i| Employer {
                name: format!("Employer {i}"),
                projects: (0..projects)
                    .map(|j| Project {
                        slug: format!("p-{i}-{j}"),
                        name: format!("Project {i}-{j}"),
                        period: format!("Period {i}-{j}"),
                        description: format!("Description for {i}-{j}"),
                        technologies: vec![format!("Lang{i}{j}"), format!("Db{i}{j}")],
                    })
                    .collect(),
            })
            .collect(),
    )
}

pub fn app_with(catalog: CvCatalog) -> App {
    App::new(LoadedCatalog {
        catalog,
        status: CatalogStatus::Loaded,
    })
}

pub fn empty_app() -> App {
    App::new(LoadedCatalog {
        catalog: CvCatalog::default(),
        status: CatalogStatus::Missing,
    })
}

pub fn acme_app() -> App {
    app_with(acme_catalog())
}

/// Fire the startup timer so the app sits on the menu.
pub fn at_menu(mut app: App) -> App {
    update(&mut app, Action::TimerElapsed(Timer::Startup));
    app
}

/// Apply keys in order, collecting every effect produced.
pub fn press(app: &mut App, keys: &[Key]) -> Vec<Effect> {
    keys.iter()
        .flat_map(|key| update(app, Action::Key(*key)))
        .collect()
}

pub fn type_text(app: &mut App, text: &str) -> Vec<Effect> {
    let keys: Vec<Key> = text.chars().map(Key::Char).collect();
    press(app, &keys)
}

/// A notifier whose delivery never completes.
pub struct NeverNotifier;

#[async_trait]
impl Notifier for NeverNotifier {
    fn name(&self) -> &str {
        "never"
    }

    async fn notify(&self, _email: &str) -> Result<(), NotifyError> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

/// A notifier that forwards every email it is given to a channel.
pub struct RecordingNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl RecordingNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    async fn notify(&self, email: &str) -> Result<(), NotifyError> {
        let _ = self.sender.send(email.to_string());
        Ok(())
    }
}
