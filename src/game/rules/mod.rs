//! Pure rule evaluation over grids.
//!
//! Rules are free functions separated from board storage, so the session and
//! the view layer can derive state without owning any of it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, check_winner};
