mod core;
mod spec;
mod table;

pub use self::core::*;
pub use spec::*;
pub use table::*;
