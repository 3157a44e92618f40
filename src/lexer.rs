/// Splits a command line into whitespace-delimited tokens.
///
/// Only the literal space character separates tokens; runs of spaces are
/// collapsed and a line made entirely of spaces yields no tokens. No
/// quoting or escaping is recognized.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
