use std::env;

use crate::api::ArgumentTable;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ErrorContext;

/// The configured command line parser.
/// Built via `CommandLineParser::build`.
pub struct GeneralParser {
    table: ArgumentTable,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for GeneralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("table", &self.table)
            .field("printer", &self.printer)
            .finish()
    }
}

impl GeneralParser {
    pub(crate) fn new(
        table: ArgumentTable,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            table,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// `tokens[0]` is taken to be the program name, and is skipped.
    /// See [`ArgumentTable::parse`] for the parsing rules.
    ///
    /// If parsing fails, the error, the failing token, and the help message are displayed, and this returns `Err(1)`.
    /// The parser never interprets any argument itself; for example, a `--help` flag is only reported via [`GeneralParser::is_matched`].
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), i32> {
        match self.table.parse(tokens) {
            Ok(()) => Ok(()),
            Err(error) => {
                let error_context = ErrorContext::new(error.offset(), tokens);
                self.user_interface.print_error(error);
                self.user_interface.print_error_context(error_context);
                self.print_help();
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If parsing fails, the error, the failing token, and the help message are displayed, and the process exits with error code `1` (via `std::process::exit`).
    pub fn parse(&mut self) {
        let command_input: Vec<String> = env::args().collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }

    /// Display the help message.
    pub fn print_help(&self) {
        self.printer.print_help(&self.table, &*self.user_interface);
    }

    /// The arguments, along with the outcome of the latest parse.
    pub fn table(&self) -> &ArgumentTable {
        &self.table
    }

    /// Whether the argument named `name` was matched by the latest parse.
    pub fn is_matched(&self, name: &str) -> bool {
        self.table.is_matched(name)
    }

    /// The raw value captured for the argument named `name` by the latest parse.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.table.value(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ArgumentSpec;
    use crate::parser::util::channel_interface;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn table() -> ArgumentTable {
        ArgumentTable::new()
            .add(ArgumentSpec::flag("verbose").short('v'))
            .add(ArgumentSpec::valued("level").short('l'))
            .add(ArgumentSpec::positional("item"))
    }

    #[test]
    fn parse_tokens_empty() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut general_parser =
            GeneralParser::new(ArgumentTable::new(), Printer::empty(), Box::new(sender));

        // Execute
        general_parser.parse_tokens(&[]).unwrap();

        // Verify
        let (message, error, error_context) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[rstest]
    #[case(vec!["program", "abc"], false, None)]
    #[case(vec!["program", "-v", "abc"], true, None)]
    #[case(vec!["program", "abc", "--level", "3"], false, Some("3"))]
    fn parse_tokens(
        #[case] tokens: Vec<&str>,
        #[case] verbose: bool,
        #[case] level: Option<&str>,
    ) {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut general_parser = GeneralParser::new(table(), Printer::empty(), Box::new(sender));

        // Execute
        general_parser.parse_tokens(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(general_parser.value("item"), Some("abc"));
        assert_eq!(general_parser.is_matched("verbose"), verbose);
        assert_eq!(general_parser.value("level"), level);
        assert_eq!(general_parser.table().len(), 3);

        let (message, error, error_context) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[rstest]
    #[case(vec!["program"], "missing required argument 'item'.", None)]
    #[case(vec!["program", "abc", "-l"], "missing value for option 'level'.", Some(2))]
    #[case(vec!["program", "-vl", "3", "abc"], "value option 'level' cannot be bundled in '-vl'.", Some(1))]
    #[case(vec!["program", "-4", "abc"], "malformed argument '-4'.", Some(1))]
    fn parse_tokens_fails(
        #[case] tokens: Vec<&str>,
        #[case] expected: &str,
        #[case] offset: Option<usize>,
    ) {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut general_parser = GeneralParser::new(table(), Printer::empty(), Box::new(sender));

        // Execute
        let exit_code = general_parser.parse_tokens(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(exit_code, 1);

        let (message, error, error_context) = receiver.consume();
        let message = message.unwrap();
        assert_contains!(message, "USAGE:\n  program [FLAGS] item");
        assert_eq!(error.unwrap(), expected);
        assert_eq!(
            error_context.unwrap(),
            ErrorContext::new(offset, tokens.as_slice())
        );
    }

    #[test]
    fn print_help() {
        // Setup
        let (sender, receiver) = channel_interface();
        let general_parser = GeneralParser::new(table(), Printer::empty(), Box::new(sender));

        // Execute
        general_parser.print_help();

        // Verify
        let message = receiver.consume_message();
        assert_contains!(message, "  -l, --level LEVEL");
        assert_contains!(message, "ARGUMENTS:\n  item");
    }
}
