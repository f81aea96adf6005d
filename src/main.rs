//! # build-cleanup CLI
//!
//! ```bash
//! build-cleanup                      # make clean
//! build-cleanup --distclean          # make distclean
//! build-cleanup --build-dir out -v   # another build tree, debug logging
//! ```
//!
//! ## Environment Variables
//!
//! - `BUILD_CLEANUP_BUILD_DIR`: Override the build directory (default: build)
//! - `BUILD_CLEANUP_VERBOSE`: Enable debug logging
//!
//! Exit status is 0 when the tree was cleaned or there was nothing to clean,
//! 1 when the build configuration is unreadable or invalid, and 2 on a usage
//! error.

use std::io::IsTerminal;

use build_cleanup::cleaner::{self, Outcome};
use build_cleanup::cli::Cli;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse_args();

    match cleaner::execute(&cli)? {
        Outcome::ConfigUnavailable => std::process::exit(Outcome::ConfigUnavailable.exit_code()),
        Outcome::NothingToClean | Outcome::Cleaned(_) => Ok(()),
    }
}
