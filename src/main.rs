use std::process::ExitCode;

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    use colored::Colorize;

    match dane_tlsa::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() -> ExitCode {
    eprintln!("dane-tlsa was built without the 'cli' feature.");
    eprintln!("Rebuild with: cargo build --features cli");
    ExitCode::FAILURE
}
