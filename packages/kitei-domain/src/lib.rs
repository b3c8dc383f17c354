pub mod normalize;
pub mod record;

pub use record::{Cell, Record, Table};
