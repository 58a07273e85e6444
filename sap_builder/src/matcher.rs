mod core;
mod token;

pub(crate) use self::core::TokenMatcher;
pub use self::core::ParseError;
