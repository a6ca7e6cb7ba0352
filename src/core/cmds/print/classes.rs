use log::info;

use crate::inputs::Inputs;
use crate::types::AppResult;
use crate::{MutationSource, compute_pms};

pub fn execute(project: &str, inputs: &Inputs) -> AppResult<()> {
    let classes = inputs.source.available_classes(project)?;
    if classes.is_empty() {
        info!("No mutation reports found for {project}");
        return Ok(());
    }

    info!("Classes with mutation reports in {project}:");
    for class_name in &classes {
        let record = inputs.source.count_for_test_class(project, class_name)?;
        info!(
            "  {} ({} / {} killed, PMS {:.2}%)",
            class_name,
            record.killed_mutants,
            record.total_mutants,
            compute_pms(record)
        );
    }
    Ok(())
}
