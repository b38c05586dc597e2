//! Route planning over the grid.

mod dfs;

pub use dfs::find_path;
