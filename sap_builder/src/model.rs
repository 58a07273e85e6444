/// The kind of an argument, which decides how it is matched against the Cli tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// `-f` / `--flag`: presence only, no value.
    Flag,
    /// `-o VALUE` / `--option VALUE`: presence plus the immediately following token.
    ValuedOption,
    /// `VALUE`: matched by position amongst the unmarked tokens.
    /// Positionals are always required.
    Positional,
}

impl ArgumentKind {
    /// Whether this kind must be matched for a parse to succeed, regardless of the declared `required` flag.
    pub fn always_required(&self) -> bool {
        match self {
            ArgumentKind::Positional => true,
            ArgumentKind::Flag | ArgumentKind::ValuedOption => false,
        }
    }

    /// Whether a matched argument of this kind carries a value.
    pub fn takes_value(&self) -> bool {
        match self {
            ArgumentKind::Flag => false,
            ArgumentKind::ValuedOption | ArgumentKind::Positional => true,
        }
    }
}

impl std::fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A semantic version triple, displayed as `MAJOR.MINOR.PATCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub patch: u32,
}

impl Version {
    /// Create a version triple.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
