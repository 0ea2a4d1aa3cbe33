use leptos::prelude::*;

/// Served for any path other than `/`; the pages themselves are not URL-addressable.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-black noise">
            <div class="absolute inset-0 grid-background opacity-30"></div>
            <div class="relative z-10 text-center">
                <h1 class="text-8xl md:text-9xl font-space font-bold tracking-tighter gradient-text mb-4">
                    "404"
                </h1>
                <p class="text-2xl font-space font-medium text-white mb-2">"Page not found"</p>
                <p class="text-white/60 mb-10 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a
                    href="/"
                    class="inline-block px-10 py-5 bg-[#00ff88] text-black font-medium tracking-wider hover:bg-white transition-colors duration-300"
                >
                    "RETURN HOME"
                </a>
            </div>
        </div>
    }
}
