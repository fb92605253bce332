use std::process::ExitCode;

fn main() -> ExitCode {
    match goatherd::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
