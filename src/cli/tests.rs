//! Unit tests for CLI parsing

use super::*;

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_with_league_override() {
        let cli = Cli::try_parse_from(["sleeper-reporter", "run", "--league-id", "12345"]).unwrap();
        match cli.command {
            Commands::Run { league_id } => assert_eq!(league_id.as_deref(), Some("12345")),
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_once_without_override() {
        let cli = Cli::try_parse_from(["sleeper-reporter", "once"]).unwrap();
        match cli.command {
            Commands::Once { league_id } => assert!(league_id.is_none()),
            _ => panic!("expected once command"),
        }
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Cli::try_parse_from(["sleeper-reporter"]).is_err());
    }
}
