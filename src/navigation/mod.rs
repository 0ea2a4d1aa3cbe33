//! Page selection, the nav bar's transient state, and page-swap sequencing.
//! Nothing in here touches the DOM.

pub use nav_bar::*;
pub use router::*;
pub use transition::*;

mod nav_bar;
mod router;
mod transition;
