//! Command-line argument parsing.

use clap::Parser;

/// Rust language walkthroughs, one topic at a time.
///
/// Every word is treated as a topic, so clap's own help and version flags are
/// turned off; running without a topic prints the topic listing instead.
#[derive(Debug, Parser)]
#[command(
    name = "rustedge",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Topic to run, or `all`.
    #[arg(allow_hyphen_values = true)]
    pub topic: Option<String>,

    /// Anything after the topic is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("rustedge").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_topic() {
        assert!(parse(&[]).topic.is_none());
    }

    #[test]
    fn test_topic() {
        assert_eq!(parse(&["json"]).topic.as_deref(), Some("json"));
    }

    #[test]
    fn test_flag_like_words_are_topics() {
        assert_eq!(parse(&["--help"]).topic.as_deref(), Some("--help"));
        assert_eq!(parse(&["-x"]).topic.as_deref(), Some("-x"));
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let cli = parse(&["maps", "extra", "--flag"]);
        assert_eq!(cli.topic.as_deref(), Some("maps"));
        assert_eq!(cli.rest, vec!["extra", "--flag"]);
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
