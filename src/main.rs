use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = presscut::logging::init_logging() {
        eprintln!("warning: {e:#}");
    }
    if presscut::cli::run() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
