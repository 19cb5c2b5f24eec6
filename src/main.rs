use clap::Parser;
use flick::catalog::Catalog;
use flick::cli::Cli;
use flick::dispatch::{dispatch, standard_table, Outcome};
use flick::output::Output;
use flick::pattern::tokenize;
use flick::repl;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    let table = standard_table();

    if cli.list_queries {
        output.print_templates(&table);
        return Ok(());
    }

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    if let Some(query) = &cli.query {
        let tokens = tokenize(query);
        let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
        match dispatch(&table, &catalog, &tokens) {
            Outcome::Answers(answers) => output.print_answers(&answers),
            Outcome::NotUnderstood => {
                output.print_not_understood();
                std::process::exit(1);
            }
            Outcome::Goodbye => {}
        }
        return Ok(());
    }

    repl::run(&table, &catalog, &mut output)?;
    Ok(())
}
