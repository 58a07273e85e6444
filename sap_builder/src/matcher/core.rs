use thiserror::Error;

use crate::api::{ArgumentSpec, ArgumentState};
use crate::matcher::token::*;
use crate::model::ArgumentKind;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reason a parse did not complete.
///
/// Offsets index into the full token list (offset `0` is the program name).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token starts with `-`, but its second character is neither `-` nor a letter.
    #[error("malformed argument '{token}'.")]
    MalformedToken {
        /// Offset of the malformed token.
        offset: usize,
        /// The malformed token.
        token: String,
    },

    /// A valued option was matched, but is not followed by a plain value token.
    #[error("missing value for option '{name}'.")]
    MissingOptionValue {
        /// Long name of the option.
        name: String,
        /// Offset of the token which matched the option.
        offset: usize,
    },

    /// The short form of a valued option appeared inside a multi-letter short cluster.
    #[error("value option '{name}' cannot be bundled in '{token}'.")]
    BundledValueOption {
        /// Long name of the option.
        name: String,
        /// Offset of the short cluster.
        offset: usize,
        /// The short cluster.
        token: String,
    },

    /// A required option, or any positional, was not matched.
    #[error("missing required argument '{name}'.")]
    MissingRequiredArgument {
        /// Long name of the argument.
        name: String,
    },
}

impl ParseError {
    /// The offset of the token responsible for this error, if a single token is responsible.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::MalformedToken { offset, .. }
            | ParseError::MissingOptionValue { offset, .. }
            | ParseError::BundledValueOption { offset, .. } => Some(*offset),
            ParseError::MissingRequiredArgument { .. } => None,
        }
    }
}

/// Matches one token list against a table of specs.
/// A matcher lives for exactly one parse: it owns the record of which tokens were consumed as option values.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'t> {
    tokens: &'t [&'t str],
    consumed: Vec<bool>,
    // Option tokens whose value was already taken by an earlier declared spec.
    claimed: Vec<bool>,
    positionals_assigned: usize,
}

impl<'t> TokenMatcher<'t> {
    pub(crate) fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            tokens,
            consumed: vec![false; tokens.len()],
            claimed: vec![false; tokens.len()],
            positionals_assigned: 0,
        }
    }

    /// Run all the passes, writing the outcome onto `states` (which pair up with `specs` by index).
    pub(crate) fn consume(
        mut self,
        specs: &[ArgumentSpec],
        states: &mut [ArgumentState],
    ) -> Result<(), ParseError> {
        debug_assert_eq!(specs.len(), states.len());
        self.match_options(specs, states)?;
        self.match_positionals(specs, states)?;
        validate(specs, states)
    }

    fn class_at(&self, offset: usize) -> TokenClass {
        if self.consumed[offset] {
            TokenClass::Blank
        } else {
            classify(self.tokens[offset])
        }
    }

    fn match_options(
        &mut self,
        specs: &[ArgumentSpec],
        states: &mut [ArgumentState],
    ) -> Result<(), ParseError> {
        let tokens = self.tokens;

        for (spec, state) in specs.iter().zip(states.iter_mut()) {
            match spec.kind() {
                ArgumentKind::Flag | ArgumentKind::ValuedOption => {}
                ArgumentKind::Positional => continue,
            }

            // Offset 0 is the program name.
            for offset in 1..tokens.len() {
                match self.class_at(offset) {
                    TokenClass::ShortCluster => self.match_short(spec, state, offset)?,
                    TokenClass::LongOption => self.match_long(spec, state, offset)?,
                    TokenClass::Malformed => return Err(malformed(tokens, offset)),
                    TokenClass::PlainText | TokenClass::Blank => {}
                }
            }
        }

        Ok(())
    }

    fn match_short(
        &mut self,
        spec: &ArgumentSpec,
        state: &mut ArgumentState,
        offset: usize,
    ) -> Result<(), ParseError> {
        let token = self.tokens[offset];
        let short = match spec.short_name() {
            Some(short) => short,
            None => return Ok(()),
        };

        if !short_letters(token).any(|letter| letter == short) || self.is_claimed(spec, offset) {
            return Ok(());
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Short '{short}' of '{}' matched by '{token}' at {offset}.", spec.name());
        }

        state.mark();

        match spec.kind() {
            ArgumentKind::Flag => Ok(()),
            ArgumentKind::ValuedOption => {
                // A valued short option must stand alone: "-v VALUE".
                if token.chars().count() > 2 {
                    return Err(ParseError::BundledValueOption {
                        name: spec.name().to_string(),
                        offset,
                        token: token.to_string(),
                    });
                }

                self.take_value(spec, state, offset)
            }
            ArgumentKind::Positional => {
                unreachable!("internal error - positionals never match as options")
            }
        }
    }

    fn match_long(
        &mut self,
        spec: &ArgumentSpec,
        state: &mut ArgumentState,
        offset: usize,
    ) -> Result<(), ParseError> {
        let token = self.tokens[offset];

        if token.strip_prefix("--") != Some(spec.name()) || self.is_claimed(spec, offset) {
            return Ok(());
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Long '{}' matched at {offset}.", spec.name());
        }

        state.mark();

        match spec.kind() {
            ArgumentKind::Flag => Ok(()),
            ArgumentKind::ValuedOption => self.take_value(spec, state, offset),
            ArgumentKind::Positional => {
                unreachable!("internal error - positionals never match as options")
            }
        }
    }

    /// Whether a duplicate valued option already took the value following `offset`.
    fn is_claimed(&self, spec: &ArgumentSpec, offset: usize) -> bool {
        let claimed = spec.kind().takes_value() && self.claimed[offset];

        #[cfg(feature = "tracing_debug")]
        {
            if claimed {
                debug!("Option '{}' at {offset} was already matched.", spec.name());
            }
        }

        claimed
    }

    fn take_value(
        &mut self,
        spec: &ArgumentSpec,
        state: &mut ArgumentState,
        offset: usize,
    ) -> Result<(), ParseError> {
        let tokens = self.tokens;
        let next = offset + 1;

        if next < tokens.len() && self.class_at(next) == TokenClass::PlainText {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Option '{}' consumed '{}' at {next}.", spec.name(), tokens[next]);
            }

            self.consumed[next] = true;
            self.claimed[offset] = true;
            state.bind(tokens[next]);
            Ok(())
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Option '{}' at {offset} has no value.", spec.name());
            }

            Err(ParseError::MissingOptionValue {
                name: spec.name().to_string(),
                offset,
            })
        }
    }

    fn match_positionals(
        &mut self,
        specs: &[ArgumentSpec],
        states: &mut [ArgumentState],
    ) -> Result<(), ParseError> {
        let tokens = self.tokens;

        for (spec, state) in specs.iter().zip(states.iter_mut()) {
            match spec.kind() {
                ArgumentKind::Positional => {}
                ArgumentKind::Flag | ArgumentKind::ValuedOption => continue,
            }

            // Plain tokens passed over while looking for this spec's rank.
            let mut skipped = 0;

            for offset in 1..tokens.len() {
                if state.is_matched() {
                    break;
                }

                match self.class_at(offset) {
                    TokenClass::PlainText => {
                        if skipped == self.positionals_assigned {
                            #[cfg(feature = "tracing_debug")]
                            {
                                debug!(
                                    "Positional '{}' bound to '{}' at {offset}.",
                                    spec.name(),
                                    tokens[offset]
                                );
                            }

                            state.bind(tokens[offset]);
                            self.positionals_assigned += 1;
                        } else {
                            skipped += 1;
                        }
                    }
                    TokenClass::Malformed => return Err(malformed(tokens, offset)),
                    TokenClass::ShortCluster | TokenClass::LongOption | TokenClass::Blank => {}
                }
            }
        }

        Ok(())
    }
}

fn validate(specs: &[ArgumentSpec], states: &[ArgumentState]) -> Result<(), ParseError> {
    for (spec, state) in specs.iter().zip(states.iter()) {
        if spec.is_required() && !state.is_matched() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Required '{}' ({}) was not matched.", spec.name(), spec.kind());
            }

            return Err(ParseError::MissingRequiredArgument {
                name: spec.name().to_string(),
            });
        }
    }

    Ok(())
}

fn malformed(tokens: &[&str], offset: usize) -> ParseError {
    ParseError::MalformedToken {
        offset,
        token: tokens[offset].to_string(),
    }
}
