//! Command-line interface.
//!
//! With no command the root menu opens. A topic command runs that topic on
//! its own, and leaving it ends the program.

mod completions;

use crate::screens::Topic;
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::path::PathBuf;

const AFTER_HELP: &str = indoc! {"
    Run without a command to open the main menu.

    Keys: arrows to move, Enter to select, Esc to go back, Ctrl+C to quit.
    Key bindings and the theme can be changed in the config file
    (see `explore-nepal config`).
"};

/// An interactive terminal guide to Nepal
#[derive(Parser, Debug)]
#[command(
    name = "explore-nepal",
    version,
    about = "An interactive terminal guide to Nepal's destinations, culture and adventures",
    long_about = None,
    after_help = AFTER_HELP,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse Nepal's top destinations
    Destinations,
    /// Explore the Himalayan, Hilly and Terai regions
    Regions,
    /// Discover religion, festivals, cuisine and traditions
    Culture,
    /// Trekking, rafting, paragliding and more
    Adventure,
    /// Read and write community travel messages
    Messages,
    /// Essential travel tips by category
    Tips,
    /// Trip templates and a custom trip planner
    Planner,
    /// Navigation help and app information
    Help,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
    /// Shows logs location and how to view them
    Logs,
    /// Configuration file location
    Config,
}

impl Commands {
    /// The topic this command opens, if it is a topic command.
    pub fn topic(&self) -> Option<Topic> {
        match self {
            Commands::Destinations => Some(Topic::Destinations),
            Commands::Regions => Some(Topic::Regions),
            Commands::Culture => Some(Topic::Culture),
            Commands::Adventure => Some(Topic::Adventure),
            Commands::Messages => Some(Topic::Messages),
            Commands::Tips => Some(Topic::Tips),
            Commands::Planner => Some(Topic::Planner),
            Commands::Help => Some(Topic::Help),
            Commands::Completions { .. } | Commands::Logs | Commands::Config => None,
        }
    }
}

impl Cli {
    /// Config file in use: `--config` or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Run a command that prints and exits without starting the TUI.
    ///
    /// Returns `false` when the command (or its absence) needs the TUI.
    pub fn execute_non_interactive(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell, &mut std::io::stdout())?;
            }
            Some(Commands::Logs) => Self::cmd_logs(),
            Some(Commands::Config) => println!("{}", self.config_path().display()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn cmd_logs() {
        let log_file = crate::utils::get_log_path();
        println!("{}", log_file.display());
        println!("View logs in real-time: tail -f {:?}", log_file);
    }
}
