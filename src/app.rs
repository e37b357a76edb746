mod about;
mod certifications;
mod components;
mod contact;
mod education;
mod experience;
mod homepage;
mod nav;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::PORTFOLIO;
use about::AboutPage;
use certifications::CertificationsPage;
use contact::ContactPage;
use education::EducationPage;
use experience::ExperiencePage;
use homepage::HomePage;
use nav::Navigation;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = PORTFOLIO.personal.name.as_str();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=format!("Portfolio of {name}") />

        <Router>
            <Navigation />
            <main class="flex flex-col flex-grow pt-20 mx-auto w-full">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/experience") view=ExperiencePage />
                    <Route path=path!("/education") view=EducationPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/certifications") view=CertificationsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="max-w-2xl mx-auto py-24 px-6 text-center">
            <h1 class="text-4xl font-bold mb-4">"Page not found."</h1>
            <A href="/" attr:class="text-cyan hover:underline">
                "Back home"
            </A>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.format("%b %e, %Y").to_string())
        .unwrap_or_default();
    let year = env!("BUILD_TIME").get(..4).unwrap_or_default();
    view! {
        <footer class="border-t border-muted/30 py-8 px-6 text-center text-sm text-muted">
            <p>{format!("© {year} {}", PORTFOLIO.personal.name)}</p>
            <p class="mt-1">"Last built " {built}</p>
        </footer>
    }
}
