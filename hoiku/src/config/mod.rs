//! Configuration system for hoiku.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOIKU_*`)
//! 3. Project config (`hoiku.yaml`, nearest at or above the working directory)
//! 4. User config (`~/.hoiku/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use hoiku::config::ConfigBuilder;
//! use hoiku::query::ReservationView;
//! use hoiku::sample::sample_reservations;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let view = ReservationView::with_config(sample_reservations(), config.view_config());
//! println!("{} reservations", view.visible().len());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{
    Config, DatabaseSettings, OutputFormat, TemplateSettings, ViewSettings,
    DEFAULT_TEMPLATE_FILE_NAME,
};
pub use validator::ConfigValidator;
