mod table;

pub use table::{Cell, Table};
