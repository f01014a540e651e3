//! Command implementations.

pub mod apps;
pub mod discover;
pub mod info;
pub mod key;
pub mod launch;
pub mod type_text;

pub use apps::run_apps;
pub use discover::run_discover;
pub use info::run_info;
pub use key::run_key;
pub use launch::run_launch;
pub use type_text::run_type;
