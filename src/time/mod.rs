mod date;
pub use date::*;
mod month;
pub use month::*;
mod period;
pub use period::*;
mod year;
pub use year::*;
