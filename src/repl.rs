//! The interactive query loop.

use crate::catalog::Catalog;
use crate::dispatch::{dispatch, Outcome, Template};
use crate::error::Result;
use crate::output::Output;
use crate::pattern::tokenize;
use std::io::{self, BufRead};

/// Reads queries until the session-ending template matches, stdin closes, or
/// the process is interrupted. Every exit path prints the farewell.
pub fn run(table: &[Template], catalog: &Catalog, output: &mut Output) -> Result<()> {
    // Ctrl-C while blocked on read_line ends the session the same way "bye"
    // does. The handler must exit itself: the blocked read cannot observe a
    // flag until the next line arrives.
    let _ = ctrlc::set_handler(|| {
        println!("\nSo long!\n");
        std::process::exit(0);
    });

    output.print_welcome();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        output.print_prompt();

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let tokens = tokenize(&line);
        if tokens.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();

        match dispatch(table, catalog, &tokens) {
            Outcome::Answers(answers) => output.print_answers(&answers),
            Outcome::NotUnderstood => output.print_not_understood(),
            Outcome::Goodbye => break,
        }
    }

    output.print_farewell();
    Ok(())
}
