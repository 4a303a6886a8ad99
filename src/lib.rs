//! branchpick - searchable branch picker for the terminal
//!
//! A single-writer reactive store holds the workspace's branches and the
//! checked-out branch. The picker reads it, filters by a case-insensitive
//! search and groups the current branch apart from the others.

pub mod app;
pub mod config;
pub mod git;
pub mod paths;
pub mod picker;
pub mod store;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use picker::{BranchPicker, PickerHost};
pub use store::{BranchStore, BranchUpdate, BranchWriter, branch_store};
