use std::str::FromStr;

use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

/// Routes `log` records to stderr; stdout is reserved for the report.
pub fn init_logging() {
    let level = LevelFilter::from_str(config().log().level()).unwrap_or(LevelFilter::Info);
    let colored = colors_enabled();

    let result = fern::Dispatch::new()
        .format(move |out, message, record| match record.level() {
            Level::Info => out.finish(format_args!("{message}")),
            Level::Debug | Level::Trace => out.finish(format_args!(
                "{} {} {message}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                tag(record.level(), colored)
            )),
            level => out.finish(format_args!("{} {message}", tag(level, colored))),
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();

    if result.is_err() {
        // A logger was already installed (e.g. by a test harness)
        log::set_max_level(level);
    }
}

fn tag(level: Level, colored: bool) -> String {
    let label = format!("[{}]", level.as_str().to_lowercase());
    if !colored {
        return label;
    }
    let styled = style(label).force_styling(true);
    match level {
        Level::Error => styled.red().bold().to_string(),
        Level::Warn => styled.yellow().to_string(),
        Level::Info => styled.green().to_string(),
        Level::Debug | Level::Trace => styled.dim().to_string(),
    }
}
