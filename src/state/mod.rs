//! Application state module

mod app_state;
mod deferred;
mod forms;
mod page;
mod scroll;

pub use app_state::*;
pub use forms::*;
pub use page::*;
pub use scroll::*;
