use crate::domain::model::RuleKind;

/// A compiled rule that decides whether a single value is acceptable.
pub trait Check: Send + Sync {
    fn rule(&self) -> RuleKind;
    fn check(&self, value: &str) -> bool;
}
