pub mod frame;
pub mod io;
pub mod record;
pub mod report;

pub use frame::*;
pub use io::*;
pub use record::*;
pub use report::*;
