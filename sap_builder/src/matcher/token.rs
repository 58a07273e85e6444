/// The syntactic class of a single Cli token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TokenClass {
    /// Empty, or already consumed as the value of an option.
    Blank,
    /// `-abc`: one or more short options.
    ShortCluster,
    /// `--name`.
    LongOption,
    /// Anything else that is non-empty.
    PlainText,
    /// `-` followed by neither `-` nor a letter (ex: `-5`, `-?`).
    Malformed,
}

pub(crate) fn classify(token: &str) -> TokenClass {
    let mut characters = token.chars();

    match (characters.next(), characters.next()) {
        (None, _) => TokenClass::Blank,
        (Some('-'), Some('-')) => TokenClass::LongOption,
        (Some('-'), Some(second)) if second.is_ascii_alphabetic() => TokenClass::ShortCluster,
        (Some('-'), Some(_)) => TokenClass::Malformed,
        // Includes a lone "-".
        (Some(_), _) => TokenClass::PlainText,
    }
}

/// The letters of a short cluster, up to the first non-letter.
pub(crate) fn short_letters(token: &str) -> impl Iterator<Item = char> + '_ {
    token
        .chars()
        .skip(1)
        .take_while(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", TokenClass::Blank)]
    #[case("-", TokenClass::PlainText)]
    #[case("a", TokenClass::PlainText)]
    #[case("abc", TokenClass::PlainText)]
    #[case("123abc", TokenClass::PlainText)]
    #[case("a-b", TokenClass::PlainText)]
    #[case("--", TokenClass::LongOption)]
    #[case("--value", TokenClass::LongOption)]
    #[case("---value", TokenClass::LongOption)]
    #[case("-v", TokenClass::ShortCluster)]
    #[case("-abh", TokenClass::ShortCluster)]
    #[case("-V", TokenClass::ShortCluster)]
    #[case("-a1", TokenClass::ShortCluster)]
    #[case("-5", TokenClass::Malformed)]
    #[case("-12.5", TokenClass::Malformed)]
    #[case("-?", TokenClass::Malformed)]
    #[case("-=", TokenClass::Malformed)]
    #[case("-é", TokenClass::Malformed)]
    fn classify_token(#[case] token: &str, #[case] expected: TokenClass) {
        assert_eq!(classify(token), expected);
    }

    #[rstest]
    #[case("-v", vec!['v'])]
    #[case("-abh", vec!['a', 'b', 'h'])]
    #[case("-ab1c", vec!['a', 'b'])]
    #[case("-a=b", vec!['a'])]
    fn short_cluster_letters(#[case] token: &str, #[case] expected: Vec<char>) {
        assert_eq!(short_letters(token).collect::<Vec<char>>(), expected);
    }
}
