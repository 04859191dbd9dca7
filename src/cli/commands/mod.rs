//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod clean;
pub mod init;
pub mod run;
pub mod sdk;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default fxbuild.toml in the current directory
    Init {
        /// Overwrite an existing manifest
        #[arg(short, long)]
        force: bool,
    },

    /// Compile the project sources
    Build,

    /// Run the compiled application
    Run {
        /// Main class to launch (defaults to the manifest's project.main_class)
        main_class: Option<String>,
    },

    /// Reset the output directory
    Clean,

    /// Manage the JavaFX SDK
    Sdk {
        #[command(subcommand)]
        command: SdkCommands,
    },
}

/// SDK management subcommands
#[derive(Subcommand, Debug)]
pub enum SdkCommands {
    /// Download and extract the JavaFX SDK into the library directory
    Install {
        /// Reinstall even if the SDK is already present
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command against the current working directory
    pub async fn run(self) -> Result<()> {
        let project_dir = std::env::current_dir()?;
        match self {
            Commands::Init { force } => init::execute(&project_dir, force).await,
            Commands::Build => build::execute(&project_dir).await,
            Commands::Run { main_class } => run::execute(&project_dir, main_class).await,
            Commands::Clean => clean::execute(&project_dir).await,
            Commands::Sdk { command } => match command {
                SdkCommands::Install { force } => sdk::execute_install(&project_dir, force).await,
            },
        }
    }
}
