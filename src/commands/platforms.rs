//! Portal platform listing and link resolution

use std::path::Path;

use vcv::config::PortalConfig;
use vcv::output::{OperationResult, OutputMode, PlatformList};

/// List configured platforms
pub fn platforms(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, _) = PortalConfig::load(config_path)?;
    let navigator = config.navigator()?;

    PlatformList::from_navigator(&config.portal.title, &config.portal.subtitle, &navigator)
        .render(mode);
    Ok(())
}

/// Print the destination URL of a platform
///
/// Never opens anything; unconfigured links fail with a hint instead.
pub fn open(id: u32, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, source) = PortalConfig::load(config_path)?;
    let navigator = config.navigator()?;

    match navigator.resolve(id) {
        Ok(url) => {
            OperationResult::ok(url).render(mode);
            Ok(())
        },
        Err(err) => {
            let file = source.map_or_else(
                || vcv::paths::VCV_TOML.to_string(),
                |p| p.display().to_string(),
            );
            let message = format!("{err}. Set its url in {file}");
            if mode == OutputMode::Json {
                OperationResult::failed(message.as_str()).render(mode);
            }
            anyhow::bail!(message)
        },
    }
}
