pub mod storage;
pub mod toml_config;

pub use toml_config::FlatTreeConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::FlatTreeConfig;
    use crate::domain::model::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "flat-tree")]
    #[command(about = "Flatten unpacked detector events into a branch-per-field tree")]
    pub struct CliConfig {
        /// TOML configuration file; command line values override it
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// JSON-lines input with one event per line
        #[arg(short, long)]
        pub input: Option<String>,

        #[arg(long)]
        pub output_path: Option<String>,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        #[arg(long)]
        pub tree_name: Option<String>,

        /// Skip the <tree>_branches.csv schema file
        #[arg(long)]
        pub no_schema: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Log as JSON lines on stderr
        #[arg(long)]
        pub log_json: bool,

        /// Read and flatten the input but write nothing
        #[arg(long)]
        pub dry_run: bool,
    }

    impl CliConfig {
        /// Load the config file if one was given, apply command line
        /// overrides and validate the result.
        pub fn resolve(&self) -> Result<FlatTreeConfig> {
            let mut config = match &self.config {
                Some(path) => FlatTreeConfig::from_file(path)?,
                None => FlatTreeConfig::default(),
            };

            if let Some(input) = &self.input {
                config.input.path = Some(input.clone());
            }
            if let Some(output_path) = &self.output_path {
                config.output.path = output_path.clone();
            }
            if let Some(format) = self.format {
                config.output.format = format;
            }
            if let Some(tree_name) = &self.tree_name {
                config.tree.name = tree_name.clone();
            }
            if self.no_schema {
                config.output.write_schema = false;
            }

            config.validate()?;
            Ok(config)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::utils::error::FlatTreeError;
        use std::io::Write;
        use tempfile::NamedTempFile;

        #[test]
        fn test_resolve_from_args_only() {
            let cli = CliConfig::parse_from([
                "flat-tree",
                "--input",
                "run.jsonl",
                "--format",
                "json",
                "--tree-name",
                "fdc",
                "--no-schema",
            ]);
            let config = cli.resolve().unwrap();

            assert_eq!(config.input.path.as_deref(), Some("run.jsonl"));
            assert_eq!(config.output.format, OutputFormat::Json);
            assert_eq!(config.tree.name, "fdc");
            assert!(!config.output.write_schema);
        }

        #[test]
        fn test_args_override_file() {
            let mut file = NamedTempFile::new().unwrap();
            file.write_all(b"[tree]\nname = \"from_file\"\n[input]\npath = \"a.jsonl\"\n")
                .unwrap();

            let cli = CliConfig::parse_from([
                "flat-tree",
                "--config",
                file.path().to_str().unwrap(),
                "--input",
                "b.jsonl",
            ]);
            let config = cli.resolve().unwrap();

            assert_eq!(config.tree.name, "from_file");
            assert_eq!(config.input.path.as_deref(), Some("b.jsonl"));
        }

        #[test]
        fn test_missing_input_fails() {
            let cli = CliConfig::parse_from(["flat-tree"]);
            assert!(matches!(
                cli.resolve(),
                Err(FlatTreeError::MissingConfigError { .. })
            ));
        }
    }
}
