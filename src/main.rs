use std::process::ExitCode;

fn main() -> ExitCode {
    match string_converter::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
