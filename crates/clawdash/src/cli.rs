use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clawdash")]
#[command(version)]
#[command(about = "Build the agent dashboard snapshot from local logs")]
pub struct Cli {
    /// Agents root with one directory per agent [env: CLAWDASH_AGENTS_DIR]
    #[arg(long)]
    pub agents_dir: Option<PathBuf>,

    /// Directory holding the pipeline and content index files [env: CLAWDASH_DATA_DIR]
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Snapshot output file [env: CLAWDASH_OUTPUT]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["clawdash"]).unwrap();
        assert!(cli.agents_dir.is_none());
        assert!(cli.data_dir.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_parse_overrides() {
        let cli = Cli::try_parse_from([
            "clawdash",
            "--agents-dir",
            "/srv/agents",
            "--data-dir",
            "/srv/data",
            "-o",
            "site/snapshot.json",
        ])
        .unwrap();
        assert_eq!(cli.agents_dir, Some(PathBuf::from("/srv/agents")));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/data")));
        assert_eq!(cli.output, Some(PathBuf::from("site/snapshot.json")));
    }

    #[test]
    fn test_cli_rejects_positional_args() {
        assert!(Cli::try_parse_from(["clawdash", "extra"]).is_err());
    }
}
