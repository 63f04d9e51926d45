//! Turns a flat JSON settings document into a C++ X-macro header.
//!
//! Every top-level key becomes one `DEF_SETTING_GROUP(name, type, default)`
//! row inside `SETTING_GROUPS`, typed as `uint32_t`, `bool` or `std::string`.

pub mod error;
pub mod header_generator;
pub mod header_layout;
pub mod setting_value;

pub use error::GenerateError;
pub use header_generator::{generate, generate_with_layout, render_header};
pub use header_layout::HeaderLayout;
pub use setting_value::{ConfigDocument, SettingEntry, SettingKind, classify, parse_document};
