use crate::inputs::Inputs;
use crate::types::AppResult;

pub mod classes;
pub mod config;

pub enum PrintCommand {
    Config(String),
    Classes(String),
}

pub fn execute_print(command: PrintCommand, inputs: &Inputs) -> AppResult<()> {
    match command {
        PrintCommand::Config(format) => config::execute(&format),
        PrintCommand::Classes(project) => classes::execute(&project, inputs),
    }
}
