use bld_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and dispatch. Per-URL download failures are reported inside
    // the pipeline and do not reach this error path.
    if let Err(err) = Cli::run_from_args().await {
        eprintln!("bld error: {:#}", err);
        std::process::exit(1);
    }
}
