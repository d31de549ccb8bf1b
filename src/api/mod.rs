mod client;
mod record;

pub use client::*;
pub use record::*;
