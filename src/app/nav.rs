use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::portfolio::PORTFOLIO;

pub const NAV_LINKS: [(&str, &str); 7] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Experience", "/experience"),
    ("Education", "/education"),
    ("Projects", "/projects"),
    ("Certifications", "/certifications"),
    ("Contact", "/contact"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let pathname = use_location().pathname;

    // the mobile menu should not survive a route change
    Effect::watch(
        move || pathname.get(),
        move |_, _, _| set_is_open(false),
        false,
    );

    let link_class = move |href: &'static str, mobile: bool| {
        move || {
            let active = pathname.get() == href;
            match (mobile, active) {
                (false, true) => "px-4 py-2 text-sm font-medium text-cyan border-b-2 border-cyan",
                (false, false) => "px-4 py-2 text-sm font-medium text-muted hover:text-foreground",
                (true, true) => "block px-4 py-3 text-base font-medium text-cyan bg-brightBlack/30",
                (true, false) => {
                    "block px-4 py-3 text-base font-medium text-muted hover:text-foreground"
                }
            }
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-background/95 backdrop-blur-sm border-b border-muted/30 shadow-lg">
            <nav class="max-w-7xl mx-auto px-6 sm:px-8 lg:px-12">
                <div class="flex items-center justify-between h-20">
                    <A href="/" attr:class="text-2xl font-bold tracking-tight">
                        {PORTFOLIO.personal.name.as_str()}
                    </A>
                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(name, href)| {
                                view! {
                                    <A href=href attr:class=link_class(href, false)>
                                        {name}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden p-2 text-muted hover:text-foreground"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                    >
                        {move || if is_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || is_open.get()>
                    <div class="md:hidden px-4 pt-4 pb-6 space-y-2 border-t border-muted/30">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(name, href)| {
                                view! {
                                    <A href=href attr:class=link_class(href, true)>
                                        {name}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </nav>
        </header>
    }
}
