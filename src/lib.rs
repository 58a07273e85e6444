//! `sap` is a small, table driven command line parser for Rust.
//!
//! A Cli is described by an ordered table of arguments.
//! Parsing marks which arguments appeared on the command line, and captures the raw `&str` value of each valued option & positional.
//! `sap` intentionally stops there:
//! * *No conversions*:
//! Values are handed back exactly as they appeared on the Cli.
//! Converting `"3"` into a `u32` is the program's concern.
//! * *No implicit behaviour*:
//! A `--help` flag is a flag like any other.
//! The program decides what to do when it is matched (typically, [`GeneralParser::print_help`]).
//! * *Detailed yet basic UX*:
//! Failures report the offending token and the help message.
//! We do not aim to support rich display configurations, such as colour output, shell completions, etc.
//!
//! # Usage
//! The calculator demo (in `demos/`) multiplies, divides, etc. two numbers:
//! ```no_run
#![doc = include_str!("../demos/calculator.rs")]
//! ```
//!
//! ```console
//! $ calculator -h -t int 0 0
//! calculator 0.0.1
//! Chua Hou
//! Example application
//!
//! USAGE:
//!   calculator [FLAGS] x y
//!
//! FLAGS:
//!   -h, --help       Print this help message
//!   -a, --add        Add x and y
//! <truncated>
//!
//! $ calculator -t int -a 1 2
//! 3
//!
//! $ calculator -t int -a 1
//! Parse error: missing required argument 'y'.
//! -t int -a 1
//!             ^
//! <help message>
//! ```
//!
//! # Builder Api
//! Configure `sap` by starting with a [`CommandLineParser`] and `add`ing [`ArgumentSpec`]s.
//! There are three kinds of argument ([`ArgumentKind`]):
//! * [`ArgumentSpec::flag`]: a no-value option (ex: `--verbose`, or `-v`).
//! * [`ArgumentSpec::valued`]: an option that captures the token immediately following it (ex: `--type int`, or `-t int`).
//! * [`ArgumentSpec::positional`]: a value identified by its position amongst the plain tokens (ex: `notes.txt`).
//!
//! Options are optional unless marked [`ArgumentSpec::required`].
//! Positionals are always required.
//!
//! After [`GeneralParser::parse`] (or [`GeneralParser::parse_tokens`]), query the outcome by long name via [`GeneralParser::is_matched`] & [`GeneralParser::value`].
//! The same machinery is available without any output via [`ArgumentTable::parse`], which returns a [`ParseError`] instead of printing.
//!
//! # Cli Semantics
//! `sap` parses the Cli tokens according to the following set of rules.
//!
//! * The first token is the program name, and is never matched.
//! * Options are matched first, in declaration order.
//! `--NAME` matches the option whose long name is exactly `NAME`.
//! `-N` matches the option whose short form is `N`.
//! * Multiple short flags may be combined into a single token.
//! For example, `-abc` is equivalent to `-a -b -c`.
//! A valued option may not take part in such a combination; `-vc value` is an error.
//! * A valued option captures the token that immediately follows it, if that token is plain text.
//! For example, in `-t int` the value is `int`, but `-t -a` is an error.
//! * The tokens used by options are set aside.
//! The remaining plain tokens are assigned, left to right, to the positionals in their declaration order.
//! For example, `a -t int b` and `-t int a b` both assign `a` to the first positional and `b` to the second.
//! * Plain tokens beyond the declared positionals are ignored, as are tokens naming no declared option.
//! * Tokens starting with `-` followed by neither `-` nor a letter are rejected (ex: `-5`, or `-?`).
//! A bare `-` is plain text.
//! * Finally, every required option and every positional must have matched.
//! This applies even when a `--help` flag is matched, which is why the demo's `-h` needs a complete command line.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing::debug!` events as tokens are matched.
pub use sap_builder::*;
