//! Display formatting for terminal output
//!
//! Tables for listings, proportional bars for trend graphs, and colored
//! status messages.

pub mod category;
pub mod console;
pub mod graph;
pub mod transaction;

pub use category::format_category_list;
pub use console::Palette;
pub use graph::render as render_graph;
pub use transaction::format_transaction_list;
