use terminal_size::{terminal_size, Width};

use crate::api::{ArgumentSpec, ArgumentTable};
use crate::model::{ArgumentKind, Version};
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const INDENT: usize = 2;
const PADDING: usize = 2;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_HELP_WIDTH: usize = 17;

/// Renders the help message for an `ArgumentTable`.
#[derive(Debug)]
pub(crate) struct Printer {
    program: String,
    version: Option<Version>,
    author: Option<String>,
    about: Option<String>,
    terminal_width: Option<usize>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", None, None, None, None)
    }

    pub(crate) fn new(
        program: impl Into<String>,
        version: Option<Version>,
        author: Option<String>,
        about: Option<String>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            version,
            author,
            about,
            terminal_width,
        }
    }

    pub(crate) fn print_help(
        &self,
        table: &ArgumentTable,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render(table) {
            user_interface.print(line);
        }
    }

    pub(crate) fn render(&self, table: &ArgumentTable) -> Vec<String> {
        let options: Vec<(String, Option<&str>)> = table
            .specs()
            .iter()
            .filter(|spec| spec.kind() != ArgumentKind::Positional)
            .map(|spec| (option_grammar(spec), spec.description()))
            .collect();
        let arguments: Vec<(String, Option<&str>)> = table
            .specs()
            .iter()
            .filter(|spec| spec.kind() == ArgumentKind::Positional)
            .map(|spec| (spec.name().to_string(), spec.description()))
            .collect();
        let left_width = options
            .iter()
            .chain(arguments.iter())
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or(0);
        let help_width = self.help_width(left_width);
        let mut out = Vec::default();

        match &self.version {
            Some(version) => out.push(format!("{} {version}", self.program)),
            None => out.push(self.program.clone()),
        };

        if let Some(author) = &self.author {
            out.push(author.clone());
        }

        if let Some(about) = &self.about {
            out.push(about.clone());
        }

        out.push(String::default());
        out.push("USAGE:".to_string());
        let mut usage = vec![self.program.clone()];

        if !options.is_empty() {
            usage.push("[FLAGS]".to_string());
        }

        usage.extend(arguments.iter().map(|(name, _)| name.clone()));
        out.push(format!("{:INDENT$}{}", "", usage.join(" ")));

        if !options.is_empty() {
            out.push(String::default());
            out.push("FLAGS:".to_string());

            for (left, help) in &options {
                out.extend(render_row(left, *help, left_width, help_width));
            }
        }

        if !arguments.is_empty() {
            out.push(String::default());
            out.push("ARGUMENTS:".to_string());

            for (left, help) in &arguments {
                out.extend(render_row(left, *help, left_width, help_width));
            }
        }

        out
    }

    fn help_width(&self, left_width: usize) -> Option<usize> {
        let total_width = self.terminal_width?;
        let non_help = INDENT + left_width + PADDING;
        let help_width = std::cmp::max(total_width.saturating_sub(non_help), MINIMUM_HELP_WIDTH);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns {non_help} within the total {total_width}.  Selecting help: {help_width}.");
        }

        Some(help_width)
    }
}

/// The width of the attached terminal, if any.
pub(crate) fn terminal_width() -> Option<usize> {
    if let Some((Width(terminal_width), _)) = terminal_size() {
        Some(terminal_width as usize)
    } else {
        None
    }
}

fn option_grammar(spec: &ArgumentSpec) -> String {
    let flags = match spec.short_name() {
        Some(short) => format!("-{short}, --{}", spec.name()),
        // Aligns with the "-S, " prefix.
        None => format!("    --{}", spec.name()),
    };

    match spec.kind() {
        ArgumentKind::Flag => flags,
        ArgumentKind::ValuedOption => {
            format!("{flags} {}", spec.name().to_ascii_uppercase().replace('-', "_"))
        }
        ArgumentKind::Positional => {
            unreachable!("internal error - positionals have no option grammar")
        }
    }
}

fn render_row(
    left: &str,
    help: Option<&str>,
    left_width: usize,
    help_width: Option<usize>,
) -> Vec<String> {
    let parts = match (help, help_width) {
        (Some(help), Some(width)) => wrap(help, width),
        (Some(help), None) => vec![help.to_string()],
        (None, _) => Vec::default(),
    };

    if parts.is_empty() {
        return vec![format!("{:INDENT$}{left}", "")];
    }

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let left = if i == 0 { left } else { "" };
            format!("{:INDENT$}{left:left_width$}{:PADDING$}{part}", "", "")
        })
        .collect()
}

/// Greedily fill lines up to `width`.
/// A word longer than `width` takes a line to itself.
fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
