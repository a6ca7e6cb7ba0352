//! File-backed implementations of the report collaborators.

pub mod dspot;
pub mod pit;
pub mod selection;

use crate::types::config::Config;

/// Concrete collaborators wired from the effective configuration
pub struct Inputs {
    pub selector: selection::SelectedClassesFile,
    pub source: pit::PitCsvReader,
    pub formatter: dspot::LatexLineFormatter,
}

impl Inputs {
    pub fn from_config(cfg: &Config) -> Self {
        let paths = cfg.paths();
        Self {
            selector: selection::SelectedClassesFile::new(paths.selection()),
            source: pit::PitCsvReader::new(paths.original()),
            formatter: dspot::LatexLineFormatter::new(paths.amplified()),
        }
    }

    pub fn aggregator(&self) -> crate::ReportAggregator<'_> {
        crate::ReportAggregator::new(&self.selector, &self.source, &self.formatter)
    }
}
