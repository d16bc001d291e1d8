use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r##"# Standchart Configuration

# Catalog to match against instead of the bundled one.
# Relative paths are resolved against this file's directory.
# catalog_path = "stands.json"

[chart]
width = 400
height = 400
background = "#ffffff"
line = "#000000"
fill = "#ff000088"
text = "#000000"
font_family = "Arial"

[labels]
levels = ["E", "D", "C", "B", "A", "Infinite"]

[parser]
host = "charts.idrlabs.com"

[matching]
# "clamp" saturates levels above the top bucket, "reject" fails instead
overflow = "clamp"
# "match" charts the matched stand, "query" charts your own levels
chart_subject = "match"
"##;

/// Write the default configuration into `dir`
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}
