use crate::matcher::ParseError;
use crate::parser::ErrorContext;

/// Where the command line parser presents its output.
pub trait UserInterface {
    /// Present a line of regular output (ex: the help message).
    fn print(&self, message: String);

    /// Present the error that stopped a parse.
    fn print_error(&self, error: ParseError);

    /// Present the tokens of a failed parse.
    fn print_error_context(&self, error_context: ErrorContext);
}

/// Presents output on the console: messages on stdout, errors on stderr.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("Parse error: {error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
