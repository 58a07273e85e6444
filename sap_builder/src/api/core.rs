use crate::api::{ArgumentSpec, ArgumentTable};
use crate::model::Version;
use crate::parser::{terminal_width, ConsoleInterface, GeneralParser, Printer, UserInterface};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use sap_builder as sap;
/// use sap::{ArgumentSpec, CommandLineParser};
///
/// let mut parser = CommandLineParser::new("program")
///     .version(1, 2, 3)
///     .add(ArgumentSpec::flag("verbose").short('v'))
///     .add(ArgumentSpec::positional("item"))
///     .build();
///
/// parser.parse_tokens(&["program", "abc", "-v"]).unwrap();
///
/// assert!(parser.is_matched("verbose"));
/// assert_eq!(parser.value("item"), Some("abc"));
/// ```
#[derive(Debug)]
pub struct CommandLineParser {
    program: String,
    version: Option<Version>,
    author: Option<String>,
    about: Option<String>,
    table: ArgumentTable,
}

impl CommandLineParser {
    /// Create a command line parser.
    /// The program name is used in the help message only; parsing always skips the first token.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version: None,
            author: None,
            about: None,
            table: ArgumentTable::new(),
        }
    }

    /// Document the `MAJOR.MINOR.PATCH` version of this program.
    pub fn version(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.version.replace(Version::new(major, minor, patch));
        self
    }

    /// Document the author of this program.
    /// If repeated, only the final author will apply.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author.replace(author.into());
        self
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    ///
    /// ### Example
    /// ```
    /// # use sap_builder as sap;
    /// use sap::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// parser.parse_tokens(&["program"]).unwrap();
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an argument to the command line parser.
    ///
    /// The order of positional arguments corresponds to their positional order during parsing.
    /// The order of options only decides which of two same-named options is reported by name lookups.
    pub fn add(mut self, spec: ArgumentSpec) -> Self {
        self.table.push(spec);
        self
    }

    /// Build the command line parser, presenting any output on the console.
    pub fn build(self) -> GeneralParser {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser, presenting any output on the `user_interface`.
    pub fn build_with_interface(self, user_interface: Box<dyn UserInterface>) -> GeneralParser {
        self.assemble(terminal_width(), user_interface)
    }

    fn assemble(
        self,
        terminal_width: Option<usize>,
        user_interface: Box<dyn UserInterface>,
    ) -> GeneralParser {
        let CommandLineParser {
            program,
            version,
            author,
            about,
            table,
        } = self;
        let printer = Printer::new(program, version, author, about, terminal_width);
        GeneralParser::new(table, printer, user_interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::channel_interface;
    use crate::test::assert_contains;

    #[test]
    fn build_empty() {
        let (sender, receiver) = channel_interface();
        let mut parser = CommandLineParser::new("program").build_with_interface(Box::new(sender));

        parser.parse_tokens(&["program"]).unwrap();

        assert!(parser.table().is_empty());
        assert_eq!(receiver.consume(), (None, None, None));
    }

    #[test]
    fn build_order() {
        let parser = CommandLineParser::new("program")
            .add(ArgumentSpec::positional("b"))
            .add(ArgumentSpec::flag("a"))
            .add(ArgumentSpec::positional("c"))
            .build();

        let names: Vec<&str> = parser.table().specs().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn help_metadata() {
        let (sender, receiver) = channel_interface();
        let parser = CommandLineParser::new("program")
            .version(0, 3, 1)
            .author("--this will get discarded--")
            .author("A. Person")
            .about("Does things.")
            .add(ArgumentSpec::flag("help").short('h').help("Print this help message"))
            .assemble(None, Box::new(sender));

        parser.print_help();

        let message = receiver.consume_message();
        assert!(message.starts_with("program 0.3.1\nA. Person\nDoes things.\n\nUSAGE:\n"));
        assert_contains!(message, "  program [FLAGS]\n");
        assert_contains!(message, "-h, --help");
        assert_contains!(message, "  -h, --help  Print this help message");
    }

    #[test]
    fn help_wraps_to_width() {
        let (sender, receiver) = channel_interface();
        let parser = CommandLineParser::new("program")
            .add(ArgumentSpec::flag("help").short('h').help("Print this help message"))
            // 2 (indent) + 10 (left) + 2 (padding) leaves the minimum of 17.
            .assemble(Some(20), Box::new(sender));

        parser.print_help();

        let message = receiver.consume_message();
        assert_contains!(message, "  -h, --help  Print this help\n              message");
    }

    #[test]
    fn reparse() {
        let (sender, _receiver) = channel_interface();
        let mut parser = CommandLineParser::new("program")
            .add(ArgumentSpec::flag("verbose").short('v'))
            .add(ArgumentSpec::positional("item"))
            .build_with_interface(Box::new(sender));

        parser.parse_tokens(&["program", "-v", "a"]).unwrap();
        assert!(parser.is_matched("verbose"));

        parser.parse_tokens(&["program", "b"]).unwrap();
        assert!(!parser.is_matched("verbose"));
        assert_eq!(parser.value("item"), Some("b"));
    }
}
