//! The book itself: where the reader is (cover or spread) and what each
//! spread shows. Pure state and projection, no DOM.

mod spread;
mod state;


pub use spread::{spread_for_page, PagePhoto, SpreadView};
pub use state::BookState;
