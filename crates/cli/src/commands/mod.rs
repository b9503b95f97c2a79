pub mod menu;
pub mod scan;
pub mod util;

pub use menu::*;
pub use scan::*;
pub use util::*;
