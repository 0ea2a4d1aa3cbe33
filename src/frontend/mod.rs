pub mod components;
pub mod pages;
mod transition_host;
pub mod viewport;

use components::{CustomCursor, Footer, Nav};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use pages::NotFound;
use transition_host::PageTransitionHost;
use viewport::BrowserViewport;

use crate::models::brand::{favicon_data_uri, SITE_DESCRIPTION, SITE_TITLE, THEME_COLOR};
use crate::models::PageId;
use crate::navigation::Router as PageRouter;

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Document metadata plus the single mounted route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let favicon = favicon_data_uri();

    view! {
        <Stylesheet id="leptos" href="/pkg/healsphere.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Meta name="theme-color" content=THEME_COLOR/>
        <Link rel="icon" type_="image/svg+xml" href=favicon.clone()/>
        <Link rel="apple-touch-icon" href=favicon/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=AppShell/>
                </Routes>
            </main>
        </Router>
    }
}

/// Owns the current page. Children get it read-only plus a `navigate` callback.
#[component]
fn AppShell() -> impl IntoView {
    let router = RwSignal::new(PageRouter::new(BrowserViewport));

    let current_page = Memo::new(move |_| router.with(PageRouter::current));
    let navigate = Callback::new(move |page: PageId| {
        router.update(|r| {
            r.navigate(page);
        });
    });

    // Effects only run in the browser, which is the only place with a scroll position.
    Effect::new(move |_| router.with_untracked(PageRouter::mount));

    view! {
        <div class="min-h-screen bg-black">
            <CustomCursor/>
            <Nav current_page=current_page on_navigate=navigate/>
            <PageTransitionHost page=current_page on_navigate=navigate/>
            <Footer on_navigate=navigate/>
        </div>
    }
}
