pub mod format;

pub use format::{format_timestamp, shorten_address, FormatError};
