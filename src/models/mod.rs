pub use contact::*;
pub use cursor::*;
pub use page_id::*;
pub use parallax::*;
pub use reveal::*;

pub mod brand;
pub mod newsletter;

mod contact;
mod cursor;
mod page_id;
mod parallax;
mod reveal;
