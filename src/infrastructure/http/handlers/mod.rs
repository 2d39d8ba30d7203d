//! HTTP Handlers

mod books;
mod ping;
mod shelves;

pub use books::*;
pub use ping::*;
pub use shelves::*;
