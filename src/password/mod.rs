//! Stateless password utilities: generation and strength scoring.

pub mod generator;
pub mod strength;

pub use generator::{generate, parse_length, PasswordPolicy, SYMBOLS};
pub use strength::{evaluate, Strength, StrengthLabel};
