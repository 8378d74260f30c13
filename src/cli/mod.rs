//! Interactive shell
//!
//! Menus, prompts and the graph controller. Every menu reads through a
//! [`Prompter`] so the whole shell can run against scripted input.

pub mod category;
pub mod graph;
pub mod menu;
pub mod prompt;
pub mod transaction;

pub use graph::GraphController;
pub use menu::run_shell;
pub use prompt::Prompter;
