pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{Cli, Command};

pub use crate::config::BatchConfig;
pub use crate::core::batch::BatchChecker;
pub use crate::core::blank::{is_blank, is_displayable};
pub use crate::core::case::to_ascii_lower;
pub use crate::core::duration::{format_duration, format_signed_duration};
pub use crate::core::ext::{OrNil, StrExt};
pub use crate::core::id_card::is_national_id;
pub use crate::core::patterns::{is_all_chinese, is_input_text, is_integer, is_mobile_phone, is_wechat_id};
pub use crate::core::substring::substring;
pub use crate::utils::error::{Result, StrKitError};
