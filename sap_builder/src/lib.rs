//! Builder module for `sap`.
//! See the `sap` crate documentation for full details.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use matcher::ParseError;
pub use model::*;
pub use parser::{ConsoleInterface, ErrorContext, GeneralParser, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
