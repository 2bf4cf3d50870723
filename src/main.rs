//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! cale          // Current month, today highlighted
//! cale 2024 2   // February 2024
//! ```

use cale::args::SystemClock;
use flexi_logger::Logger;

fn main() {
    // Log records go to stderr; RUST_LOG overrides the level.
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .map_err(|e| eprintln!("cale: failed to start logger: {}", e))
        .ok();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cale::run(std::env::args_os(), &SystemClock, &mut stdout) {
        log::debug!("exiting with {:?} error", e.kind());
        eprintln!("cale: {}", e);
        std::process::exit(1);
    }
}
