use crate::core::{blank, id_card, patterns, patterns::AnchoredPattern};
use crate::domain::model::{CheckSpec, RuleKind};
use crate::domain::ports::Check;
use crate::utils::error::{Result, StrKitError};

/// Applies a built-in rule. `RuleKind::Pattern` has nothing to match against
/// here and always fails; compile a [`RuleCheck`] for it instead.
pub fn evaluate(rule: RuleKind, value: &str) -> bool {
    match rule {
        RuleKind::NationalId => id_card::is_national_id(value),
        RuleKind::MobilePhone => patterns::is_mobile_phone(value),
        RuleKind::WechatId => patterns::is_wechat_id(value),
        RuleKind::AllChinese => patterns::is_all_chinese(value),
        RuleKind::InputText => patterns::is_input_text(value),
        RuleKind::Integer => patterns::is_integer(value),
        RuleKind::NotBlank => !blank::is_blank(Some(value)),
        RuleKind::Displayable => blank::is_displayable(Some(value)),
        RuleKind::Pattern => false,
    }
}

#[derive(Debug, Clone)]
pub struct RuleCheck {
    rule: RuleKind,
    pattern: Option<AnchoredPattern>,
    allow_blank: bool,
}

impl RuleCheck {
    pub fn builtin(rule: RuleKind) -> Self {
        Self {
            rule,
            pattern: None,
            allow_blank: false,
        }
    }

    pub fn pattern(source: &str) -> Result<Self> {
        Ok(Self {
            rule: RuleKind::Pattern,
            pattern: Some(AnchoredPattern::new(source)?),
            allow_blank: false,
        })
    }

    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    pub fn from_spec(spec: &CheckSpec) -> Result<Self> {
        let check = match (spec.rule, spec.pattern.as_deref()) {
            (RuleKind::Pattern, Some(source)) => Self::pattern(source)?,
            (RuleKind::Pattern, None) => {
                return Err(StrKitError::MissingConfigError {
                    field: format!("checks.{}.pattern", spec.column),
                })
            }
            (rule, _) => Self::builtin(rule),
        };
        Ok(check.allow_blank(spec.allow_blank))
    }
}

impl Check for RuleCheck {
    fn rule(&self) -> RuleKind {
        self.rule
    }

    fn check(&self, value: &str) -> bool {
        if self.allow_blank && blank::is_blank(Some(value)) {
            return true;
        }
        match &self.pattern {
            Some(pattern) => pattern.is_full_match(value),
            None => evaluate(self.rule, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(rule: RuleKind, pattern: Option<&str>, allow_blank: bool) -> CheckSpec {
        CheckSpec {
            column: "value".to_string(),
            rule,
            pattern: pattern.map(str::to_string),
            allow_blank,
        }
    }

    #[test]
    fn test_evaluate_builtin_rules() {
        assert!(evaluate(RuleKind::NationalId, "11010519491231002X"));
        assert!(evaluate(RuleKind::MobilePhone, "13800138000"));
        assert!(evaluate(RuleKind::Integer, "-12"));
        assert!(!evaluate(RuleKind::NotBlank, " \n"));
        assert!(!evaluate(RuleKind::Displayable, "保密"));
        assert!(!evaluate(RuleKind::Pattern, "anything"));
    }

    #[test]
    fn test_pattern_check() {
        let check = RuleCheck::from_spec(&spec(RuleKind::Pattern, Some("[A-Z]{3}"), false)).unwrap();
        assert_eq!(check.rule(), RuleKind::Pattern);
        assert!(check.check("ABC"));
        assert!(!check.check("ABCD"));
        assert!(!check.check(""));
    }

    #[test]
    fn test_pattern_rule_requires_pattern() {
        let result = RuleCheck::from_spec(&spec(RuleKind::Pattern, None, false));
        assert!(matches!(result, Err(StrKitError::MissingConfigError { .. })));
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        let result = RuleCheck::from_spec(&spec(RuleKind::Pattern, Some("(unclosed"), false));
        assert!(matches!(result, Err(StrKitError::InvalidPattern(_))));
    }

    #[test]
    fn test_allow_blank() {
        let strict = RuleCheck::from_spec(&spec(RuleKind::MobilePhone, None, false)).unwrap();
        let lenient = RuleCheck::from_spec(&spec(RuleKind::MobilePhone, None, true)).unwrap();
        assert!(!strict.check(""));
        assert!(lenient.check(""));
        assert!(lenient.check(" \r\n"));
        assert!(!lenient.check("12345"));
    }
}
