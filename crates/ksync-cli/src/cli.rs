//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ksync - Keep local directories in sync with containers
#[derive(Parser, Debug)]
#[command(name = "ksync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use (default: ~/.ksync.yaml)
    #[arg(long, global = true, env = "KSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a new sync spec
    ///
    /// Adds the spec to the settings file. Exactly one of --pod or
    /// --selector picks the containers to sync with.
    ///
    /// Examples:
    ///   ksync create --pod web-0 ./src /app
    ///   ksync create --selector app=web --name frontend ./src /app
    ///   ksync create --pod web-0 --force ./src /app   # allow duplicates
    Create {
        /// Local directory to sync
        local: String,

        /// Directory inside the container
        remote: String,

        /// Name of the spec (generated from the local directory if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Pod to sync with
        #[arg(short, long, conflicts_with = "selector")]
        pod: Option<String>,

        /// Label selector picking the pods to sync with (repeatable)
        #[arg(short = 'l', long)]
        selector: Vec<String>,

        /// Container name inside the pods
        #[arg(short, long)]
        container: Option<String>,

        /// Namespace of the pods
        #[arg(long, default_value = ksync_core::DEFAULT_NAMESPACE)]
        namespace: String,

        /// Reload the container when files change
        #[arg(long)]
        reload: bool,

        /// Never push local changes
        #[arg(long)]
        local_read_only: bool,

        /// Never pull remote changes
        #[arg(long)]
        remote_read_only: bool,

        /// Skip the name and similarity checks
        #[arg(long)]
        force: bool,
    },

    /// Delete sync specs by name
    Delete {
        /// Names of the specs to delete
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List the configured sync specs
    Get {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Reconcile specs with the settings file and watch them
    ///
    /// Each pass re-reads the settings file, adopts new specs, cleans up
    /// removed ones and starts watching everything that is left.
    ///
    /// Examples:
    ///   ksync watch                 # single pass
    ///   ksync watch --interval 5    # re-check every 5 seconds
    Watch {
        /// Seconds between passes; runs a single pass if omitted
        #[arg(short, long)]
        interval: Option<u64>,

        /// Run a single pass even when --interval is set
        #[arg(long)]
        once: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_with_pod() {
        let cli = Cli::parse_from(["ksync", "create", "--pod", "web-0", "./src", "/app"]);
        match cli.command {
            Some(Commands::Create {
                local,
                remote,
                pod,
                namespace,
                force,
                ..
            }) => {
                assert_eq!(local, "./src");
                assert_eq!(remote, "/app");
                assert_eq!(pod.as_deref(), Some("web-0"));
                assert_eq!(namespace, "default");
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_create_pod_and_selector_conflict() {
        let result = Cli::try_parse_from([
            "ksync", "create", "--pod", "web-0", "-l", "app=web", "./src", "/app",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_delete_requires_name() {
        assert!(Cli::try_parse_from(["ksync", "delete"]).is_err());
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["ksync", "get", "--config", "/tmp/k.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/k.yaml")));
        assert_eq!(cli.command, Some(Commands::Get { json: false }));
    }

    #[test]
    fn parse_watch_interval() {
        let cli = Cli::parse_from(["ksync", "watch", "-i", "5"]);
        assert_eq!(
            cli.command,
            Some(Commands::Watch {
                interval: Some(5),
                once: false
            })
        );
    }
}
