//! The template table and first-match dispatch to catalog queries.

use crate::catalog::Catalog;
use crate::matcher::match_tokens;
use crate::pattern::Pattern;

/// What a matched template does with its arguments. One variant per
/// recognized question form; all of them read the catalog except `Bye`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    TitlesByYear,
    TitlesBetweenYears,
    TitlesBeforeYear,
    TitlesAfterYear,
    DirectorByTitle,
    TitlesByDirector,
    ActorsByTitle,
    YearByTitle,
    TitlesByActor,
    Bye,
}

/// One recognized question form: a pattern plus the action it triggers.
#[derive(Debug, Clone)]
pub struct Template {
    pattern: Pattern,
    action: Action,
}

impl Template {
    pub fn new(template: &str, action: Action) -> Self {
        Self {
            pattern: Pattern::parse(template),
            action,
        }
    }

    pub fn text(&self) -> &str {
        self.pattern.text()
    }
}

/// The built-in question forms, tried in this order. Order matters: the
/// first structural match wins and no later template is considered.
pub fn standard_table() -> Vec<Template> {
    vec![
        Template::new("what movies were made in _", Action::TitlesByYear),
        Template::new("what movies were made between _ and _", Action::TitlesBetweenYears),
        Template::new("what movies were made before _", Action::TitlesBeforeYear),
        Template::new("what movies were made after _", Action::TitlesAfterYear),
        Template::new("who directed %", Action::DirectorByTitle),
        Template::new("who was the director of %", Action::DirectorByTitle),
        Template::new("what movies were directed by %", Action::TitlesByDirector),
        Template::new("who acted in %", Action::ActorsByTitle),
        Template::new("when was % made", Action::YearByTitle),
        Template::new("in what movies did % appear", Action::TitlesByActor),
        Template::new("bye", Action::Bye),
    ]
}

/// Result of dispatching one query.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Answers from a matched template's action; may be empty.
    Answers(Vec<String>),
    /// No template matched the input.
    NotUnderstood,
    /// The session-ending template matched.
    Goodbye,
}

/// Tries each template in table order against the tokenized input. On the
/// first match, each wildcard binding is joined into a single space-separated
/// argument and the template's action runs against the catalog.
pub fn dispatch(table: &[Template], catalog: &Catalog, input: &[&str]) -> Outcome {
    for template in table {
        if let Some(bindings) = match_tokens(template.pattern.tokens(), input) {
            let args: Vec<String> = bindings.iter().map(|b| b.join(" ")).collect();
            return run_action(template.action, catalog, &args);
        }
    }
    Outcome::NotUnderstood
}

fn run_action(action: Action, catalog: &Catalog, args: &[String]) -> Outcome {
    let answers = match action {
        Action::TitlesByYear => match year_arg(args, 0) {
            Some(year) => catalog.titles_by_year(year),
            None => Vec::new(),
        },
        Action::TitlesBetweenYears => match (year_arg(args, 0), year_arg(args, 1)) {
            (Some(start), Some(end)) => catalog.titles_between_years(start, end),
            _ => Vec::new(),
        },
        Action::TitlesBeforeYear => match year_arg(args, 0) {
            Some(year) => catalog.titles_before_year(year),
            None => Vec::new(),
        },
        Action::TitlesAfterYear => match year_arg(args, 0) {
            Some(year) => catalog.titles_after_year(year),
            None => Vec::new(),
        },
        Action::DirectorByTitle => match catalog.director_by_title(text_arg(args, 0)) {
            Some(director) => vec![director],
            None => vec!["No answers".to_string()],
        },
        Action::TitlesByDirector => catalog.titles_by_director(text_arg(args, 0)),
        Action::ActorsByTitle => catalog.cast_by_title(text_arg(args, 0)).unwrap_or_default(),
        Action::YearByTitle => match catalog.year_by_title(text_arg(args, 0)) {
            Some(year) => vec![year.to_string()],
            None => Vec::new(),
        },
        Action::TitlesByActor => catalog.titles_by_actor(text_arg(args, 0)),
        Action::Bye => return Outcome::Goodbye,
    };
    Outcome::Answers(answers)
}

fn text_arg(args: &[String], index: usize) -> &str {
    args.get(index).map(String::as_str).unwrap_or("")
}

// A wildcard can bind anything; a token that is not a year yields no answers
// instead of failing the session.
fn year_arg(args: &[String], index: usize) -> Option<i32> {
    args.get(index)?.parse().ok()
}
