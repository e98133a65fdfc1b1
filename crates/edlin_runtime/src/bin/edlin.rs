//! edlin CLI entry point.

use std::env;
use std::process::ExitCode;

use edlin_foundation::Result;
use edlin_runtime::{EdlinConfig, Repl, logging};

fn main() -> ExitCode {
    if env::args_os().len() > 1 {
        print_usage();
        return ExitCode::from(2);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = EdlinConfig::from_env()?;
    logging::init(&config)?;

    let mut repl = Repl::new(&config)?;
    repl.run()
}

fn print_usage() {
    eprintln!(
        "\x1b[1medlin\x1b[0m - line-numbered text editor

\x1b[1mUSAGE:\x1b[0m
    edlin

edlin takes no arguments. Commands are entered at the `edlin> ` prompt:
    l                  List the buffer
    r <path>           Replace the buffer with a file
    s <path>           Save the buffer to a file
    e <n> <text>       Set line n (n = size + 1 appends)
    ! <n> <command>    Replace line n with the first output line of command
    q                  Quit

\x1b[1mENVIRONMENT:\x1b[0m
    EDLIN_SHELL            Shell for filter commands (default /bin/sh)
    EDLIN_FILTER_TIMEOUT   Filter timeout in seconds, 0 disables (default 30)
    EDLIN_FILTER_ENV       `path` or `inherit` (default path)
    EDLIN_FILTER_STRICT    Fail filters that exit non-zero (default false)
    EDLIN_HISTORY_SIZE     Prompt history entries (default 1000)
    EDLIN_LOG              Log filter directive (default warn)"
    );
}
