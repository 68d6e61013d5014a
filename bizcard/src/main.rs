// ABOUTME: Main entry point for the bizcard application
// ABOUTME: Prints the card and always exits successfully

use bizcard::cli_output::CliOutput;

fn main() {
    env_logger::init();

    if let Err(e) = bizcard::run() {
        CliOutput::new().error(&format!("{:#}", e));
    }
}
