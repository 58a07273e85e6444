mod interface;
mod middleware;
mod printer;

pub use interface::*;
pub use middleware::*;
pub(crate) use printer::*;

/// The Cli tokens of a failed parse, with the failing token pointed out.
///
/// Displays over two lines: the tokens (excluding the program name), and a caret under the failing token.
/// When no single token is responsible, the caret points past the end of the tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    offset: Option<usize>,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: Option<usize>, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().skip(1).map(|token| token.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.tokens.join(" ");
        let column = match self.offset {
            // Offsets count the program name, which isn't displayed.
            Some(offset) if offset >= 1 && offset <= self.tokens.len() => self.tokens
                [..offset - 1]
                .iter()
                .map(|token| token.chars().count() + 1)
                .sum::<usize>(),
            _ => {
                if line.is_empty() {
                    0
                } else {
                    line.chars().count() + 1
                }
            }
        };

        writeln!(f, "{line}")?;
        write!(f, "{:column$}^", "")
    }
}
