//! Command implementations

mod list;
mod show;

pub use list::{run_default, run_list};
pub use show::run_show;
