//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod clipboard;
pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::audit::AuditRecord;
use crate::config::Settings;
use crate::crypto::keyfile;
use crate::errors::{Result, VaultError};
use crate::password::PasswordPolicy;
use crate::vault::VaultStore;

/// PassMaster CLI: password generator and encrypted credential vault.
#[derive(Parser)]
#[command(
    name = "passmaster",
    about = "Password generator and encrypted credential vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Key file path (default: secret.key, or `key_file` in .passmaster.toml)
    #[arg(long, global = true, env = "PASSMASTER_KEY_FILE")]
    pub key_file: Option<String>,

    /// Vault file path (default: passwords.vault, or `vault_file` in .passmaster.toml)
    #[arg(long, global = true, env = "PASSMASTER_VAULT_FILE")]
    pub vault_file: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create the key file and an empty vault
    Init,

    /// Store a new entry
    Add {
        /// Label for the entry (e.g. "bank")
        identifier: String,

        /// Optional note stored alongside the entry
        #[arg(short, long, default_value = "")]
        memo: String,

        /// Password value (omit for stdin or interactive prompt)
        #[arg(short, long, conflicts_with = "generate")]
        secret: Option<String>,

        /// Generate the password instead of entering it
        #[arg(short, long)]
        generate: bool,

        #[command(flatten)]
        policy: PolicyArgs,

        /// Copy the stored password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List entries, optionally filtered by identifier or memo
    List {
        /// Case-insensitive text to match against identifier or memo
        filter: Option<String>,
    },

    /// Print an entry's password
    Show {
        /// Entry id or unique id prefix (as shown by `list`)
        id: String,

        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },

    /// Remove an entry
    Remove {
        /// Entry id or unique id prefix (as shown by `list`)
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password
    Generate {
        #[command(flatten)]
        policy: PolicyArgs,

        /// Copy the password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Rate a password as weak, medium or strong
    Strength {
        /// Password to rate (omit to read from stdin)
        password: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// View the audit log of vault operations
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },
}

/// Character-class and length options shared by `generate` and `add --generate`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Password length (default: 16, or `default_length` in .passmaster.toml)
    #[arg(short, long)]
    pub length: Option<String>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols (# ! @ _ -)
    #[arg(long)]
    pub no_symbols: bool,
}

impl PolicyArgs {
    /// Apply the `--no-*` switches on top of the configured classes.
    pub fn policy(&self, settings: &Settings) -> PasswordPolicy {
        let base = settings.policy();
        PasswordPolicy {
            use_upper: base.use_upper && !self.no_upper,
            use_lower: base.use_lower && !self.no_lower,
            use_digits: base.use_digits && !self.no_digits,
            use_symbols: base.use_symbols && !self.no_symbols,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolved paths and settings for one invocation.
pub struct Context {
    pub settings: Settings,
    pub key_path: PathBuf,
    pub vault_path: PathBuf,
}

impl Context {
    /// Load `.passmaster.toml` from the working directory and apply the
    /// `--key-file` / `--vault-file` overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load(&cwd)?;

        let key_path = match &cli.key_file {
            Some(p) => cwd.join(p),
            None => settings.key_path(&cwd),
        };
        let vault_path = match &cli.vault_file {
            Some(p) => cwd.join(p),
            None => settings.vault_path(&cwd),
        };

        Ok(Self {
            settings,
            key_path,
            vault_path,
        })
    }

    /// Directory holding the vault file (and the audit database).
    pub fn vault_dir(&self) -> PathBuf {
        self.vault_path
            .parent()
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
    }
}

/// Load the key and open the vault.
///
/// A key is only generated when there is no vault data it would have to
/// decrypt; a vault without its key is reported instead of being paired
/// with a fresh, useless key.
pub fn open_vault(ctx: &Context) -> Result<VaultStore> {
    let has_vault_data = std::fs::metadata(&ctx.vault_path).is_ok_and(|m| m.len() > 0);

    if has_vault_data && !ctx.key_path.exists() {
        return Err(VaultError::CommandFailed(format!(
            "vault {} exists but key file {} is missing; the vault cannot be decrypted without it",
            ctx.vault_path.display(),
            ctx.key_path.display()
        )));
    }

    let key = keyfile::load_or_create_key(&ctx.key_path)?;
    VaultStore::open(&ctx.vault_path, key)
}

/// Record an operation in the audit log, if compiled in.
///
/// Audit failures never fail the command; they are logged and skipped.
pub fn audit(ctx: &Context, record: AuditRecord) {
    #[cfg(feature = "audit-log")]
    {
        let vault = ctx
            .vault_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let written = crate::audit::AuditLog::open(&ctx.vault_dir())
            .and_then(|log| log.record(&vault, &record));
        if let Err(e) = written {
            tracing::debug!(error = %e, op = %record.op, "audit record skipped");
        }
    }

    #[cfg(not(feature = "audit-log"))]
    let _ = (ctx, record);
}
