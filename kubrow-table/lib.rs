pub use self::column::{AGE, Column, NAME, NAMESPACE};
pub use self::header::Header;
pub use self::row::Row;
pub use self::text::TextTable;

mod column;
mod header;
mod row;
mod text;
