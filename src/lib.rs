//! Client-side bundle update flow for hybrid applications.
//!
//! On launch the embedding host builds a [`Cordwood`] engine from a
//! [`Config`] and calls [`Cordwood::run`]. The engine asks the update server
//! for the latest bundle version, downloads it when it differs from the
//! installed one, and hands off to the bootstrap, which loads the resolved
//! version's assets into the host [`Shell`]. Failures degrade to running the
//! previously installed version; every launch ends in exactly one bootstrap.
//!
//! ```no_run
//! use cordwood::{Config, Cordwood, Shell};
//! use std::path::Path;
//!
//! struct WebViewShell;
//!
//! impl Shell for WebViewShell {
//!     fn inject(&mut self, _asset: &Path) -> Result<(), String> {
//!         // Hand the file to the host's DOM-injection primitive.
//!         Ok(())
//!     }
//! }
//!
//! # async fn launch() -> Result<(), String> {
//! let config = Config {
//!     base_url: "https://updates.example.com".into(),
//!     current_version: "1.0".into(),
//!     multiple_versions: false,
//!     asset_directories: vec!["css".into(), "js".into()],
//!     storage_dir: "/data/app".into(),
//! };
//! let engine = Cordwood::new(
//!     config,
//!     WebViewShell,
//!     Box::new(|| log::info!("app ready")),
//!     Box::new(|err| log::error!("app failed to start: {err}")),
//! );
//! let outcome = engine.run().await?;
//! log::info!("running version {}", outcome.version);
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod bootstrap;
pub mod download;
pub mod engine;
pub mod networking;
pub mod storage;
pub mod ui;
pub mod urls;
pub mod version;

pub use bootstrap::{Bootstrap, FailureCallback, ReadyCallback, Shell};
pub use engine::Cordwood;
pub use engine::models::{Action, Config, Outcome};
pub use networking::{FileTransfer, UpdateServer};
pub use ui::{LatestVersionPicker, VersionPicker};
