//! One module per subcommand.

pub mod activity;
pub mod add;
pub mod change_master;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod insights;
pub mod list;
pub mod show;
