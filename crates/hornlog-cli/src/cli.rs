//! Command-line surface.
//!
//! Help is handled by hand so that `-h`, `--help`, and `-?` all print the
//! usage text and exit with status 1, the same way an argument error does.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

pub struct CliArgs {
    pub program: Option<PathBuf>,
    pub trace: bool,
    pub steps: Option<u64>,
}

const USAGE: &str = "\
Usage: hornlog [OPTIONS] [FILE]

Interactive interpreter for Horn-clause programs. Loads FILE (or a
built-in demo program when FILE is omitted), then reads queries from a
`> ` prompt; a query ends with `.`. After each answer, press enter to
accept it or type anything else for the next one.

Options:
  --trace      Print each resolution step to stderr
  --steps N    Step limit per query (default 1000000)
  -h, --help   Print this usage text and exit
";

pub fn parse() -> CliArgs {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(_) => {
            eprint!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if matches.get_flag("help") || matches.get_flag("help_alt") {
        eprint!("{}", USAGE);
        std::process::exit(1);
    }

    CliArgs {
        program: matches.get_one::<PathBuf>("program").cloned(),
        trace: matches.get_flag("trace"),
        steps: matches.get_one::<u64>("steps").copied(),
    }
}

fn build_cli() -> Command {
    Command::new("hornlog")
        .disable_help_flag(true)
        .arg(
            Arg::new("program")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Program file to load (built-in demo if omitted)"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .action(ArgAction::SetTrue)
                .help("Print each resolution step"),
        )
        .arg(
            Arg::new("steps")
                .long("steps")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Step limit per query"),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Print usage and exit"),
        )
        .arg(
            Arg::new("help_alt")
                .short('?')
                .action(ArgAction::SetTrue)
                .hide(true),
        )
}
