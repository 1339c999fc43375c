use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rules that can be applied to a column of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    NationalId,
    MobilePhone,
    WechatId,
    AllChinese,
    InputText,
    Integer,
    NotBlank,
    Displayable,
    /// Caller-supplied regular expression, matched against the whole value.
    Pattern,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::NationalId => "national_id",
            RuleKind::MobilePhone => "mobile_phone",
            RuleKind::WechatId => "wechat_id",
            RuleKind::AllChinese => "all_chinese",
            RuleKind::InputText => "input_text",
            RuleKind::Integer => "integer",
            RuleKind::NotBlank => "not_blank",
            RuleKind::Displayable => "displayable",
            RuleKind::Pattern => "pattern",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `[[checks]]` entry of a batch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSpec {
    pub column: String,
    pub rule: RuleKind,
    pub pattern: Option<String>,
    #[serde(default)]
    pub allow_blank: bool,
}

/// Result of applying one check to one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// 1-based data row, not counting the header.
    pub row: usize,
    pub column: String,
    pub rule: RuleKind,
    pub value: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub job: String,
    pub rows: usize,
    pub checks: usize,
    pub failures: usize,
    pub output_path: String,
    pub generated_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }
}

/// Body of a JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub outcomes: Vec<CheckOutcome>,
}
