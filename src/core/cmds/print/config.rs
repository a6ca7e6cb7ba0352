use log::info;

use crate::core::cmds::ListFormat;
use crate::types::AppResult;
use crate::types::config::config;

pub fn execute(format: &str) -> AppResult<()> {
    let format = ListFormat::parse(format)?;
    let effective_config = config().to_effective();

    if format == ListFormat::Json {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    info!("Effective Configuration:");
    info!("");
    info!("Projects:");
    for project in effective_config.projects.as_deref().unwrap_or_default() {
        info!("  - {project}");
    }

    info!("");
    info!("Paths:");
    let paths = effective_config.paths.unwrap_or_default();
    info!("  original: {}", paths.original());
    info!("  amplified: {}", paths.amplified());
    info!("  selection: {}", paths.selection());

    info!("");
    info!("Log:");
    let log = effective_config.log.unwrap_or_default();
    info!("  level: {}", log.level());
    match log.color() {
        Some(true) => info!("  color: on"),
        Some(false) => info!("  color: off"),
        None => info!("  color: auto"),
    }

    Ok(())
}
