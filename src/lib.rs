pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod password;
pub mod vault;

pub use crypto::{load_or_create_key, VaultKey};
pub use errors::{Result, VaultError};
pub use password::{evaluate, generate, PasswordPolicy, Strength, StrengthLabel};
pub use vault::{Entry, EntryId, EntryStore, VaultStore};
