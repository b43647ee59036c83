use std::process::ExitCode;

fn main() -> ExitCode {
    signalforge_cli::run()
}
