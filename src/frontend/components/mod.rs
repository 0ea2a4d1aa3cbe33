//! Reusable UI components for the Healsphere frontend

mod alert;
mod button;
mod cursor;
mod feature_card;
mod footer;
mod input;
mod nav;
mod reveal;

pub use alert::{Alert, AlertVariant, ErrorAlert, SuccessAlert};
pub use button::{Arrow, ButtonSize, ButtonVariant, NavigateButton};
pub use cursor::CustomCursor;
pub use feature_card::{FeatureCard, StatTile};
pub use footer::Footer;
pub use input::{EmailInput, TextArea, TextInput};
pub use nav::Nav;
pub use reveal::{Eyebrow, Reveal, RevealFrom};
