mod cli;
mod demo;
mod infra;
mod render;

use talent_board::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
