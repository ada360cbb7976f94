//! Configuration loaded from `.passmaster.toml`.

pub mod settings;

pub use settings::Settings;
