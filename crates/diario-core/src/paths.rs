use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const DIARIO_DIR: &str = ".diario";
pub const CONFIG_FILE: &str = ".diario/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn diario_dir(root: &Path) -> PathBuf {
    root.join(DIARIO_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
