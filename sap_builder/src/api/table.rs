use crate::api::{ArgumentSpec, ArgumentState};
use crate::matcher::{ParseError, TokenMatcher};

/// The ordered set of arguments accepted by a Cli, along with the outcome of the latest parse.
///
/// Declaration order matters:
/// * Positional arguments are assigned to the Cli tokens in the order they are declared.
/// * When names are duplicated, lookups by name resolve to the first declared argument.
///
/// Long names and short forms are expected to be unique; this is not validated.
///
/// ### Example
/// ```
/// # use sap_builder as sap;
/// use sap::{ArgumentSpec, ArgumentTable};
///
/// let mut table = ArgumentTable::new()
///     .add(ArgumentSpec::flag("verbose").short('v'))
///     .add(ArgumentSpec::valued("level").short('l'))
///     .add(ArgumentSpec::positional("file"));
///
/// table.parse(&["program", "notes.txt", "-v", "--level", "3"]).unwrap();
///
/// assert!(table.is_matched("verbose"));
/// assert_eq!(table.value("level"), Some("3"));
/// assert_eq!(table.value("file"), Some("notes.txt"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgumentTable {
    specs: Vec<ArgumentSpec>,
    states: Vec<ArgumentState>,
}

impl ArgumentTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument to the end of the table.
    pub fn add(mut self, spec: ArgumentSpec) -> Self {
        self.push(spec);
        self
    }

    /// Add an argument to the end of the table, in place.
    pub fn push(&mut self, spec: ArgumentSpec) {
        self.specs.push(spec);
        self.states.push(ArgumentState::default());
    }

    /// The number of declared arguments.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no arguments are declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The declared arguments, in declaration order.
    pub fn specs(&self) -> &[ArgumentSpec] {
        &self.specs
    }

    /// Each declared argument paired with its state from the latest parse, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArgumentSpec, &ArgumentState)> {
        self.specs.iter().zip(self.states.iter())
    }

    /// The state of the first argument declared with the long name `name`.
    pub fn state(&self, name: &str) -> Option<&ArgumentState> {
        self.iter()
            .find(|(spec, _)| spec.name() == name)
            .map(|(_, state)| state)
    }

    /// Whether the argument named `name` was matched by the latest parse.
    /// Unknown names are never matched.
    pub fn is_matched(&self, name: &str) -> bool {
        self.state(name)
            .map(ArgumentState::is_matched)
            .unwrap_or(false)
    }

    /// The raw value captured for the argument named `name` by the latest parse.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.state(name).and_then(ArgumentState::value)
    }

    /// Match the Cli tokens against this table.
    ///
    /// `tokens` is the full argument vector: `tokens[0]` is the program name and is skipped.
    /// Every state is reset on entry, so repeated parses of the same tokens produce the same states.
    ///
    /// Parsing proceeds in three passes, stopping at the first error:
    /// 1. Options (flags & valued options) are matched in declaration order.
    /// Valued options consume the token immediately following them.
    /// 2. Positionals are assigned, in declaration order, to the remaining plain tokens from left to right.
    /// 3. Required options, and all positionals, are checked to have matched.
    ///
    /// When an error is returned, the states are only partially updated and should not be relied on.
    pub fn parse(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.states.iter_mut().for_each(ArgumentState::reset);
        TokenMatcher::new(tokens).consume(&self.specs, &mut self.states)
    }
}

impl FromIterator<ArgumentSpec> for ArgumentTable {
    fn from_iter<I: IntoIterator<Item = ArgumentSpec>>(iter: I) -> Self {
        let mut table = ArgumentTable::new();

        for spec in iter {
            table.push(spec);
        }

        table
    }
}
