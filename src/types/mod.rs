mod column;
mod config;
mod row;
mod view;

pub use column::*;
pub use config::*;
pub use row::*;
pub use view::*;
