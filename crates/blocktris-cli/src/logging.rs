use std::{
    env,
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use env_logger::{Env, Target};

const LOG_FILE: &str = "blocktris.log";

/// Installs the logger, writing to `path` or to the default log file.
///
/// The terminal is in the alternate screen while playing, so logs always go to a
/// file. `RUST_LOG` selects the filter and defaults to `info`.
pub fn init(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = path.map_or_else(default_path, Path::to_path_buf);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to install logger")?;
    Ok(path)
}

/// Returns `<local data dir>/blocktris/blocktris.log`, falling back to the temp dir.
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join("blocktris")
        .join(LOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let path = default_path();
        assert!(path.ends_with("blocktris/blocktris.log"));
    }
}
