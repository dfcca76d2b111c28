pub mod footer;
pub mod header;
pub mod io_element;
pub mod main;
pub mod record;
pub mod schema;
pub mod stream;

#[cfg(test)]
pub(crate) mod test_support;

pub use footer::*;
pub use header::*;
pub use io_element::*;
pub use main::*;
pub use record::*;
pub use stream::*;
