pub mod batch;
pub mod blank;
pub mod case;
pub mod duration;
pub mod ext;
pub mod id_card;
pub mod markup;
pub mod patterns;
pub mod rules;
pub mod substring;

pub use crate::domain::model::{CheckOutcome, RuleKind};
pub use crate::domain::ports::Check;
pub use crate::utils::error::Result;
