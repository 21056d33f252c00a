//! Feed loading: CSV decoding and the one-shot remote fetch.

pub mod decode;
pub mod fetch;

pub use decode::*;
pub use fetch::*;
