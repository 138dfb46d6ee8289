mod cli;
mod demo;
mod repl;

use hornlog_core::{Interner, Store};
use hornlog_engine::{Database, Session, StepLimits};
use hornlog_syntax::{lower_program, parse_program, render_errors};

fn main() {
    let args = cli::parse();

    let (source, origin) = match &args.program {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(source) => (source, path.display().to_string()),
            Err(err) => {
                eprintln!("error: cannot read {}: {}", path.display(), err);
                std::process::exit(1);
            }
        },
        None => (demo::PROGRAM.to_owned(), "<demo>".to_owned()),
    };

    let parse = parse_program(&source);
    if !parse.is_clean() {
        eprint!("{}", render_errors(&source, &parse.errors, Some(&origin)));
        std::process::exit(1);
    }

    let mut interner = Interner::new();
    let mut store = Store::new();
    let rules = lower_program(&parse.program, &mut interner, &mut store);
    let session = Session::new(interner, store, Database::new(rules));

    let mut limits = StepLimits::default();
    if let Some(steps) = args.steps {
        limits.step_fuel = steps;
    }

    if let Err(err) = repl::run(session, limits, args.trace) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
