//! Page components for the Healsphere frontend

mod about;
mod contact;
mod home;
mod not_found;
mod services;
mod wellness;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use services::ServicesPage;
pub use wellness::WellnessPage;

use leptos::prelude::*;

use crate::models::PageId;

/// Page registry: the component responsible for each page.
pub fn render_page(page: PageId, on_navigate: Callback<PageId>) -> AnyView {
    match page {
        PageId::Home => view! { <HomePage on_navigate=on_navigate/> }.into_any(),
        PageId::About => view! { <AboutPage/> }.into_any(),
        PageId::Services => view! { <ServicesPage on_navigate=on_navigate/> }.into_any(),
        PageId::Wellness => view! { <WellnessPage on_navigate=on_navigate/> }.into_any(),
        PageId::Contact => view! { <ContactPage/> }.into_any(),
    }
}
