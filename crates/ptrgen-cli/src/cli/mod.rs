//! Command line definition.

use clap::Command;


/// Build the CLI. The generator takes no arguments.
pub fn build_cli() -> Command {
    Command::new("ptrgen")
        .about("Generate Go pointer helper functions for built-in scalar types")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(
            r#"OUTPUT:
  to_ptr.go     value -> pointer helpers (String, StringSlice, StringMap, ...)
  from_ptr.go   pointer -> value helpers (ToString, ToStringSlice, ...)

Both files are written to the current directory. Set RUST_LOG to change
log verbosity (default: info)."#,
        )
}
