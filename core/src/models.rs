mod note;
mod setting;
mod tag;

pub use note::{normalize_title, Note};
pub use setting::SettingValue;
pub use tag::{format_tags, parse_tags};
