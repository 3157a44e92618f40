/// How an output redirection target is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Truncate,
    Append,
}

/// Redirection targets collected from one command line.
///
/// Populated once per line by [`Redirections::extract`] and consumed by the
/// process executor; builtins ignore it.
#[derive(Debug, PartialEq, Eq)]
pub struct Redirections {
    pub input: Option<String>,
    pub output: Option<String>,
    pub error: Option<String>,
    pub output_mode: OutputMode,
}

impl Default for Redirections {
    fn default() -> Self {
        Redirections {
            input: None,
            output: None,
            error: None,
            output_mode: OutputMode::Truncate,
        }
    }
}

impl Redirections {
    /// Strips `<`, `>`, `>>` and `2>` (with their file operands) out of the
    /// argument vector, recording the targets. The remaining arguments keep
    /// their relative order, so the vector is safe to hand to exec.
    ///
    /// A repeated operator overwrites the earlier target. An operator at the
    /// end of the line with no operand is dropped without complaint.
    pub fn extract(argv: &mut Vec<String>) -> Redirections {
        let mut redirects = Redirections::default();
        let mut cleaned = Vec::with_capacity(argv.len());

        let mut tokens = std::mem::take(argv).into_iter();
        while let Some(token) = tokens.next() {
            match token.as_str() {
                "<" => {
                    if let Some(path) = tokens.next() {
                        redirects.input = Some(path);
                    }
                }
                ">" => {
                    if let Some(path) = tokens.next() {
                        redirects.output = Some(path);
                        redirects.output_mode = OutputMode::Truncate;
                    }
                }
                ">>" => {
                    if let Some(path) = tokens.next() {
                        redirects.output = Some(path);
                        redirects.output_mode = OutputMode::Append;
                    }
                }
                "2>" => {
                    if let Some(path) = tokens.next() {
                        redirects.error = Some(path);
                    }
                }
                _ => cleaned.push(token),
            }
        }

        *argv = cleaned;
        redirects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_none() {
        let mut args = argv(&["ls", "-l"]);
        let redirects = Redirections::extract(&mut args);
        assert_eq!(args, argv(&["ls", "-l"]));
        assert_eq!(redirects, Redirections::default());
    }

    #[test]
    fn test_extract_input_and_output() {
        let mut args = argv(&["cat", "<", "in.txt", ">", "out.txt", "extra"]);
        let redirects = Redirections::extract(&mut args);

        assert_eq!(args, argv(&["cat", "extra"]));
        assert_eq!(redirects.input.as_deref(), Some("in.txt"));
        assert_eq!(redirects.output.as_deref(), Some("out.txt"));
        assert_eq!(redirects.output_mode, OutputMode::Truncate);
        assert!(redirects.error.is_none());
    }

    #[test]
    fn test_extract_append_mode() {
        let mut args = argv(&["echo", "hi", ">>", "log.txt"]);
        let redirects = Redirections::extract(&mut args);

        assert_eq!(args, argv(&["echo", "hi"]));
        assert_eq!(redirects.output.as_deref(), Some("log.txt"));
        assert_eq!(redirects.output_mode, OutputMode::Append);
    }

    #[test]
    fn test_extract_error_target() {
        let mut args = argv(&["make", "2>", "errors.txt"]);
        let redirects = Redirections::extract(&mut args);

        assert_eq!(args, argv(&["make"]));
        assert_eq!(redirects.error.as_deref(), Some("errors.txt"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let mut args = argv(&["cmd", ">", "first.txt", ">>", "second.txt"]);
        let redirects = Redirections::extract(&mut args);

        assert_eq!(args, argv(&["cmd"]));
        assert_eq!(redirects.output.as_deref(), Some("second.txt"));
        assert_eq!(redirects.output_mode, OutputMode::Append);
    }

    #[test]
    fn test_trailing_bare_operator_is_dropped() {
        let mut args = argv(&["cmd", "arg", ">"]);
        let redirects = Redirections::extract(&mut args);

        assert_eq!(args, argv(&["cmd", "arg"]));
        assert!(redirects.output.is_none());
        assert_eq!(redirects.output_mode, OutputMode::Truncate);
    }

    #[test]
    fn test_extract_empty_vector() {
        let mut args: Vec<String> = Vec::new();
        let redirects = Redirections::extract(&mut args);
        assert!(args.is_empty());
        assert_eq!(redirects, Redirections::default());
    }
}
