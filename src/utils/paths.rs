use std::path::PathBuf;
use anyhow::Result;

/// Returns the application data directory.
/// Uses `dirs::data_dir()` + "flight-agents" (e.g., %APPDATA%/flight-agents or ~/.local/share/flight-agents).
/// Creates the directory if it doesn't exist.
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    let path = base.join("flight-agents");

    if !path.exists() {
        std::fs::create_dir_all(&path)?;
    }

    Ok(path)
}
