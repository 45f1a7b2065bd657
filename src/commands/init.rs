//! Write a default vcv.toml

use vcv::config::PortalConfig;
use vcv::output::{OperationResult, OutputMode};
use vcv::paths;

/// Create `vcv.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::local_config();

    if path.exists() && !force {
        OperationResult::failed(format!(
            "Already initialized ({} exists). Use --force to overwrite.",
            paths::VCV_TOML
        ))
        .render(mode);
        return Ok(());
    }

    PortalConfig::default().save(&path)?;
    log::debug!("wrote {}", path.display());

    OperationResult::ok(format!(
        "Created {}\nReplace the placeholder platform URLs to enable navigation.",
        paths::VCV_TOML
    ))
    .render(mode);
    Ok(())
}
