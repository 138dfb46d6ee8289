//! Interactive query loop.
//!
//! Reads a query (possibly spread over several lines) until its
//! terminating `.`, runs it, and shows answers one at a time: blank input
//! accepts the answer shown, anything else asks for the next one.

use hornlog_engine::{NoopTracer, PrintTracer, Session, Solve, StepLimits, Tracer};
use hornlog_syntax::{lower_query, parse_query, render_errors};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Run queries until end of input.
pub fn run(mut session: Session, limits: StepLimits, trace: bool) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut pending = String::new();

    loop {
        let prompt = if pending.is_empty() { "> " } else { "| " };
        match editor.readline(prompt) {
            Ok(line) => {
                let code = strip_comment(&line);
                if pending.is_empty() && code.trim().is_empty() {
                    continue;
                }
                pending.push_str(code);
                pending.push('\n');
                if !query_complete(&pending) {
                    continue;
                }
                let text = std::mem::take(&mut pending);
                let _ = editor.add_history_entry(text.trim());
                execute(&mut session, &mut editor, &text, limits, trace);
            }
            Err(ReadlineError::Interrupted) => {
                pending.clear();
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

/// Everything before a `%` comment. The surface syntax has no string
/// literals, so a bare scan is enough.
fn strip_comment(line: &str) -> &str {
    line.split_once('%').map_or(line, |(code, _)| code)
}

/// A query is complete once its text ends with the terminating `.`.
fn query_complete(pending: &str) -> bool {
    pending.trim_end().ends_with('.')
}

fn execute(
    session: &mut Session,
    editor: &mut DefaultEditor,
    text: &str,
    limits: StepLimits,
    trace: bool,
) {
    let goals = match parse_query(text) {
        Ok(goals) => goals,
        Err(errors) => {
            eprint!("{}", render_errors(text, &errors, None));
            return;
        }
    };

    let (interner, store) = session.lowering();
    let (rule, vars) = lower_query(&goals, interner, store);

    if trace {
        present(session.solve(rule, vars, limits, PrintTracer::new()), editor);
    } else {
        present(session.solve(rule, vars, limits, NoopTracer), editor);
    }
}

/// Enumerate answers interactively. `yes` closes an accepted search,
/// `no` one that ran out of answers.
fn present<T: Tracer>(mut solve: Solve<'_, T>, editor: &mut DefaultEditor) {
    loop {
        match solve.next_answer() {
            Err(err) => {
                eprintln!("error: {}", err);
                return;
            }
            Ok(None) => {
                println!("no");
                return;
            }
            Ok(Some(answer)) => {
                if answer.is_ground() {
                    println!("yes");
                    return;
                }
                for (name, value) in &answer.bindings {
                    println!("{} = {}", name, value);
                }
                match editor.readline("") {
                    Ok(line) if line.trim().is_empty() => {
                        println!("yes");
                        return;
                    }
                    Ok(_) => continue,
                    // End of input while an answer is up: take it.
                    Err(_) => {
                        println!("yes");
                        return;
                    }
                }
            }
        }
    }
}
