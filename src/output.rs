use crate::dispatch::Template;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    pub fn print_welcome(&mut self) {
        self.set_bold();
        writeln!(self.stdout, "Welcome to the movie database!").unwrap();
        self.reset();
        writeln!(self.stdout).unwrap();
    }

    pub fn print_prompt(&mut self) {
        self.set_dim();
        write!(self.stdout, "Your query? ").unwrap();
        self.reset();
        let _ = self.stdout.flush();
    }

    pub fn print_answers(&mut self, answers: &[String]) {
        for answer in answers {
            self.set_color(Color::Green);
            writeln!(self.stdout, "{}", answer).unwrap();
            self.reset();
        }
    }

    pub fn print_not_understood(&mut self) {
        self.set_color(Color::Yellow);
        writeln!(self.stdout, "I don't understand").unwrap();
        self.reset();
    }

    pub fn print_farewell(&mut self) {
        writeln!(self.stdout).unwrap();
        self.set_bold();
        writeln!(self.stdout, "So long!").unwrap();
        self.reset();
        writeln!(self.stdout).unwrap();
    }

    pub fn print_templates(&mut self, table: &[Template]) {
        for template in table {
            writeln!(self.stdout, "{}", template.text()).unwrap();
        }
    }
}
