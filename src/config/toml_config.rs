use crate::domain::model::{CheckSpec, RuleKind};
use crate::utils::error::{Result, StrKitError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("built-in pattern must compile"));

const OUTPUT_FORMATS: [&str; 2] = ["csv", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub job: JobConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub format: Option<String>,
    pub failures_only: Option<bool>,
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StrKitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn delimiter(&self) -> Result<u8> {
        match &self.input.delimiter {
            Some(value) => validation::validate_delimiter("input.delimiter", value),
            None => Ok(b','),
        }
    }

    pub fn output_format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("csv")
    }

    pub fn failures_only(&self) -> bool {
        self.output.failures_only.unwrap_or(false)
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("job.name", &self.job.name)?;
        validation::validate_path("input.path", &self.input.path)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;
        self.delimiter()?;

        if self.checks.is_empty() {
            return Err(StrKitError::ConfigValidationError {
                field: "checks".to_string(),
                message: "At least one check is required".to_string(),
            });
        }

        for (index, check) in self.checks.iter().enumerate() {
            let field = format!("checks[{}]", index);
            validation::validate_non_empty_string(&format!("{}.column", field), &check.column)?;

            match (check.rule, &check.pattern) {
                (RuleKind::Pattern, pattern) => {
                    validation::validate_required_field(&format!("{}.pattern", field), pattern)?;
                }
                (rule, Some(_)) => {
                    return Err(StrKitError::ConfigValidationError {
                        field: format!("{}.pattern", field),
                        message: format!("'pattern' is only used by the pattern rule, not {}", rule),
                    });
                }
                (_, None) => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[job]
name = "customers"

[input]
path = "customers.csv"

[[checks]]
column = "id_card"
rule = "national_id"

[[checks]]
column = "code"
rule = "pattern"
pattern = "[A-Z]{3}"
allow_blank = true

[output]
path = "report.json"
format = "json"
"#;

    #[test]
    fn test_parse_sample() {
        let config = BatchConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.job.name, "customers");
        assert_eq!(config.checks.len(), 2);
        assert_eq!(config.checks[0].rule, RuleKind::NationalId);
        assert!(!config.checks[0].allow_blank);
        assert!(config.checks[1].allow_blank);
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.delimiter().unwrap(), b',');
        assert!(!config.failures_only());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_rule_is_parse_error() {
        let content = SAMPLE.replace("national_id", "passport");
        assert!(matches!(
            BatchConfig::from_toml_str(&content),
            Err(StrKitError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("STRKIT_TEST_INPUT_DIR", "/data/in");
        let content = SAMPLE.replace("\"customers.csv\"", "\"${STRKIT_TEST_INPUT_DIR}/customers.csv\"");
        let config = BatchConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.input.path, "/data/in/customers.csv");
    }

    #[test]
    fn test_undefined_env_var_is_kept() {
        let content = SAMPLE.replace("\"customers.csv\"", "\"${STRKIT_TEST_UNDEFINED_VAR}.csv\"");
        let config = BatchConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.input.path, "${STRKIT_TEST_UNDEFINED_VAR}.csv");
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let content = SAMPLE.replace("format = \"json\"", "format = \"xml\"");
        let config = BatchConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(StrKitError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validate_pattern_pairing() {
        let content = SAMPLE.replace("pattern = \"[A-Z]{3}\"\n", "");
        let config = BatchConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(StrKitError::MissingConfigError { .. })
        ));

        let content = SAMPLE.replace(
            "rule = \"national_id\"",
            "rule = \"national_id\"\npattern = \"x\"",
        );
        let config = BatchConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_checks() {
        let content = r#"
[job]
name = "empty"
[input]
path = "in.csv"
[output]
path = "out.csv"
"#;
        let config = BatchConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }
}
