mod args;

use args::Args;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Configure logging
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            if let Err(io_err) = err.print() {
                log::error!("cannot print usage: {io_err}");
            }
            return ExitCode::from(code);
        }
    };

    let config = args.render_config();
    log::debug!(
        "converting {} -> {} with {:?}",
        args.input.display(),
        args.output.display(),
        config
    );

    match img2ascii::convert_file(&args.input, &args.output, &config) {
        Ok(()) => {
            println!("Done.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}
