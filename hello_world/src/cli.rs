//! hello_world: say hello to someone by name
//!
//! Command-line front end for the greeting function.
#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "cli")]
#[path = "cli/args.rs"]
mod args;
#[cfg(feature = "cli")]
#[path = "cli/logs.rs"]
mod logs;

/// Command-line interface printing a greeting.
#[cfg(feature = "cli")]
pub mod inner {
    use super::args::{print_usage, Args};
    use super::logs::vlog;
    use hello_world::say_hello;
    use hello_world_core::hello_debug;
    use std::io;

    /// Entry point for the `hello_world` command-line interface.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if command-line argument parsing fails.
    pub fn main() -> io::Result<()> {
        let args: Args = facet_args::from_std_args()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{e}")))?;

        if args.help {
            print_usage();
            std::process::exit(0);
        }

        vlog!(args, {"Name: {:?}", args.name});

        let greeting = say_hello(&args.name);
        hello_debug!("say_hello({:?}) -> {:?}", args.name, greeting);
        println!("{greeting}");

        Ok(())
    }
}

/// Hint replacement CLI for when the cli module is used without building the cli feature.
#[cfg(not(feature = "cli"))]
pub mod inner {
    /// Provide a hint to the user that they did not build this crate with the cli feature.
    pub fn main() {
        eprintln!("Please build with the cli feature to run the CLI");
        eprintln!("Example: cargo run -p hello_world --features cli -- Sue");
        std::process::exit(1);
    }
}

pub use inner::main;
