//! Widget implementations, one per file.

mod card;
mod carousel;
mod pager;
mod progress_bar;
mod project_grid;
mod reveal;

pub use card::*;
pub use carousel::*;
pub use pager::*;
pub use progress_bar::*;
pub use project_grid::*;
pub use reveal::*;
