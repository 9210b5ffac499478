//! Animal Gene Lab - desktop toy for composing an animal from shape traits

use std::process::ExitCode;

use genelab::cli;

fn main() -> ExitCode {
    cli::run()
}
