use crate::model::ArgumentKind;

/// The static description of one argument accepted by the Cli.
///
/// ### Example
/// ```
/// # use sap_builder as sap;
/// use sap::{ArgumentKind, ArgumentSpec};
///
/// let spec = ArgumentSpec::valued("type")
///     .short('t')
///     .help("[ int | float ] type of numbers")
///     .required();
///
/// assert_eq!(spec.name(), "type");
/// assert_eq!(spec.short_name(), Some('t'));
/// assert_eq!(spec.kind(), ArgumentKind::ValuedOption);
/// assert!(spec.is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    short: Option<char>,
    name: String,
    help: Option<String>,
    kind: ArgumentKind,
    required: bool,
}

impl ArgumentSpec {
    /// Create an argument of the given kind.
    /// Prefer [`ArgumentSpec::flag`], [`ArgumentSpec::valued`] or [`ArgumentSpec::positional`].
    pub fn new(kind: ArgumentKind, name: impl Into<String>) -> Self {
        Self {
            short: None,
            name: name.into(),
            help: None,
            kind,
            required: false,
        }
    }

    /// Create a no-value option, matched by `--NAME` (or its short form).
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(ArgumentKind::Flag, name)
    }

    /// Create an option that captures the token following `--NAME` (or its short form).
    pub fn valued(name: impl Into<String>) -> Self {
        Self::new(ArgumentKind::ValuedOption, name)
    }

    /// Create a positional argument.
    /// The name is only used for display and lookup.
    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(ArgumentKind::Positional, name)
    }

    /// Set the single character short form, matched by `-S`.
    /// If repeated, only the final short form will apply.
    /// Positional arguments ignore the short form.
    pub fn short(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Document the help message for this argument.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Declare that this argument must be present on the Cli.
    /// Positional arguments are required whether or not this is declared.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The long name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short form, if any.
    pub fn short_name(&self) -> Option<char> {
        match self.kind {
            ArgumentKind::Flag | ArgumentKind::ValuedOption => self.short,
            ArgumentKind::Positional => None,
        }
    }

    /// The help message, if any.
    pub fn description(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The kind.
    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    /// Whether a parse fails when this argument is not matched.
    pub fn is_required(&self) -> bool {
        self.required || self.kind.always_required()
    }
}

/// The outcome of the most recent parse for one [`ArgumentSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentState {
    matched: bool,
    value: Option<String>,
}

impl ArgumentState {
    /// Whether the argument was found on the Cli.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// The raw value captured for the argument, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(crate) fn reset(&mut self) {
        self.matched = false;
        self.value = None;
    }

    pub(crate) fn mark(&mut self) {
        self.matched = true;
    }

    pub(crate) fn bind(&mut self, value: &str) {
        self.matched = true;
        self.value.replace(value.to_string());
    }
}
