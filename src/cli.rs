use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// goseal: build a Kubernetes secret from a file, optionally sealed with kubeseal
#[derive(Parser, Debug)]
#[command(version, about = "Kubernetes secret wizard")]
pub struct Cli {
    /// Write logs to this file instead of the terminal
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Defaults to the interactive wizard
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive wizard (the default)
    Tui(TuiArgs),

    /// Every top-level scalar of a YAML map becomes one secret entry
    Yaml {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// The whole file becomes a single secret entry
    File {
        #[command(flatten)]
        target: TargetArgs,

        /// Key of the entry inside the secret
        #[arg(short = 'k', long)]
        key: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct TuiArgs {
    /// Where the manifest is written (default: ./secret.yaml)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory the secret file picker starts in (default: working directory)
    #[arg(long)]
    pub start_dir: Option<PathBuf>,

    /// Directory the certificate picker starts in (default: home directory)
    #[arg(long)]
    pub cert_dir: Option<PathBuf>,
}

/// Shared by the non-interactive commands; the manifest goes to stdout.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Namespace of the secret
    #[arg(short = 'n', long)]
    pub namespace: String,

    /// Source file
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Name of the secret
    #[arg(short = 's', long)]
    pub secret_name: String,

    /// Public certificate; the secret is sealed when given
    #[arg(short = 'c', long)]
    pub cert: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_wizard() {
        let cli = Cli::try_parse_from(["goseal"]).unwrap();
        assert!(cli.cmd.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn file_command_takes_short_flags() {
        let cli = Cli::try_parse_from([
            "goseal", "file", "-n", "default", "-f", "pw.txt", "-s", "db", "-k", "password",
            "--log-file", "goseal.log",
        ])
        .unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("goseal.log")));
        match cli.cmd {
            Some(Command::File { target, key }) => {
                assert_eq!(target.namespace, "default");
                assert_eq!(target.file, PathBuf::from("pw.txt"));
                assert_eq!(target.secret_name, "db");
                assert!(target.cert.is_none());
                assert_eq!(key, "password");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn yaml_command_requires_namespace() {
        assert!(Cli::try_parse_from(["goseal", "yaml", "-f", "s.yaml", "-s", "db"]).is_err());
    }
}
