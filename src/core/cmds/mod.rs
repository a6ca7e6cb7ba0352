use std::str::FromStr;

use strum::{Display, EnumString};

use crate::types::{AppError, AppResult};

pub mod init;
pub mod print;
pub mod report;
pub mod scores;

pub use init::execute_init;
pub use print::execute_print;
pub use report::execute_report;
pub use scores::execute_scores;

/// `--format` of the listing commands (`scores`, `print config`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ListFormat {
    Table,
    Json,
}

impl ListFormat {
    pub fn parse(format: &str) -> AppResult<Self> {
        Self::from_str(format).map_err(|_| {
            AppError::Custom(format!(
                "Unknown output format '{format}'; expected table or json"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_formats() {
        assert_eq!(ListFormat::parse("table").unwrap(), ListFormat::Table);
        assert_eq!(ListFormat::parse("Json").unwrap(), ListFormat::Json);
        assert!(ListFormat::parse("jsno").is_err());
    }
}
