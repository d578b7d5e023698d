mod config;

pub use config::Config;

use std::path::PathBuf;

use crate::error::Result;

/// Returns the directory holding `config.toml`.
///
/// Resolution order:
/// - `$WHATIF_HOME` if set
/// - `~/.config/whatif-dev/` when `WHATIF_ENV=dev`
/// - `~/.config/whatif/` otherwise
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("WHATIF_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("WHATIF_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("whatif-dev")
            } else {
                base_dir.join("whatif")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
