use imagemap::cli::{parse_args, run_cli_command, USAGE};
use imagemap::error::ImageMapError;
use imagemap::logging;

use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = logging::init(args.verbose, args.log_file.as_deref());
    tracing::debug!("Running {:?}", args.command);

    let mut stdout = std::io::stdout().lock();
    if let Err(report) = run_cli_command(args.command, &mut stdout) {
        match report.downcast_ref::<ImageMapError>() {
            Some(err) => {
                tracing::error!("{} failed: {}", err.error_code(), err);
                eprintln!("{} [{}]", err.user_message(), err.error_code());
                eprintln!("Hint: {}", err.recovery_hint());
                std::process::exit(1);
            }
            None => return Err(report),
        }
    }

    Ok(())
}
