//! Command-line front end for [pwphrase](https://crates.io/crates/pwphrase).
//!
//! Prints one password per invocation, in the style of the iCloud Keychain
//! suggestions:
//!
//! ```sh
//! $ pwphrase
//! vnq4ke-pxtWam-o7cbRg
//! $ pwphrase -l 8 -n 1 -u 0 -d 1
//! 40937162
//! ```
//!
//! Standard output carries only the password. Errors and logs go to standard
//! error, and any failure exits with status 1.

pub mod args;
pub mod error;

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

pub use args::Args;
pub use error::Error;

/// Generates a password for `args` and writes it to `out` as a single line.
///
/// Nothing is written unless generation succeeds.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Error> {
    let config = args.to_config()?;

    let password = match args.seed {
        Some(seed) => {
            debug!(seed, "using seeded generator");
            pwphrase::generate(&config, &mut StdRng::seed_from_u64(seed))?
        }
        None => pwphrase::generate_from_entropy(&config)?,
    };

    writeln!(out, "{password}")?;
    out.flush()?;
    Ok(())
}
