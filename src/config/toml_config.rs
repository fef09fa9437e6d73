use crate::domain::model::{OutputFormat, RecordSelection};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FlatTreeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlatTreeConfig {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub records: RecordSelection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub name: String,
    pub title: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            name: "events".to_string(),
            title: "Flattened events".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// JSON-lines file with one unpacked event per line.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub format: OutputFormat,
    pub write_schema: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
            format: OutputFormat::default(),
            write_schema: true,
        }
    }
}

impl FlatTreeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FlatTreeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value. Unset variables are left
    /// as written so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FlatTreeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for FlatTreeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_branch_name("tree.name", &self.tree.name)?;

        let input = validation::validate_required_field("input.path", &self.input.path)?;
        validation::validate_path("input.path", input)?;
        validation::validate_path("output.path", &self.output.path)?;

        if self.records.is_empty() {
            return Err(FlatTreeError::ConfigValidationError {
                field: "records".to_string(),
                message: "At least one record type must be enabled".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for FlatTreeConfig {
    fn tree_name(&self) -> &str {
        &self.tree.name
    }

    fn tree_title(&self) -> &str {
        &self.tree.title
    }

    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn write_schema(&self) -> bool {
        self.output.write_schema
    }

    fn record_selection(&self) -> RecordSelection {
        self.records
    }
}
