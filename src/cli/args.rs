use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::SavePolicy;

#[derive(Parser, Debug)]
#[command(name = "cro")]
#[command(about = "A line-oriented personal task list")]
#[command(long_about = "cro - a line-oriented personal task list

Reads one command per line from standard input until `bye`.

COMMANDS:
  todo <description>                                   Add a todo
  deadline <description> /by yyyy M d HH mm            Add a deadline
  event <description> /from yyyy M d HH mm /to yyyy M d HH mm
                                                       Add an event
  list                                                 Show all tasks
  mark <n> / unmark <n>                                Set task n done / not done
  delete <n>                                           Remove task n
  bye                                                  Save and quit

EXAMPLE:
  deadline submit report /by 2024 3 5 18 00")]
#[command(version)]
pub struct Cli {
    /// Task list file (JSON Lines)
    ///
    /// Defaults to `~/.cro/tasks.jsonl`, or `storage.data_file` from the
    /// config file.
    #[arg(short, long, env = "CRO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Configuration file
    ///
    /// Defaults to `~/.cro/config.yaml`. A missing file means defaults.
    #[arg(short, long, env = "CRO_CONFIG")]
    pub config: Option<PathBuf>,

    /// When to write the task list back to disk
    #[arg(long, value_enum)]
    pub save_policy: Option<SavePolicy>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the welcome and farewell banners
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cro"]).unwrap();
        assert!(cli.save_policy.is_none());
        assert!(!cli.no_color);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "cro",
            "--data-file",
            "/tmp/tasks.jsonl",
            "--save-policy",
            "on-exit",
            "--no-color",
            "-q",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/tasks.jsonl")));
        assert_eq!(cli.save_policy, Some(SavePolicy::OnExit));
        assert!(cli.no_color);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_invalid_save_policy() {
        assert!(Cli::try_parse_from(["cro", "--save-policy", "sometimes"]).is_err());
    }
}
