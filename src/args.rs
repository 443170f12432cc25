pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;

/// Parses the command line and checks cross-argument rules.
///
/// # Errors
///
/// Will return `Err` if the arguments are inconsistent.
pub fn args_checks() -> Result<Args, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(args)
}
