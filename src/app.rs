mod about;
mod contact;
mod experience;
mod hero;
mod nav;
mod projects;
pub mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{PROFILE, SITE_DESCRIPTION, SITE_TITLE},
    structured_data::person_json_ld,
    theme,
};

use about::About;
use contact::{Contact, Footer};
use experience::Experience;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;

/// Forces every revealable block visible when scripts never run.
const NOSCRIPT_CSS: &str =
    "[data-reveal] { opacity: 1 !important; transform: none !important; }";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let json_ld = person_json_ld()
        .inspect_err(|e| log::warn!("skipping structured data: {e}"))
        .ok();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="theme-color" content=theme::SURFACE.hex />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
                <link rel="stylesheet" href=theme::FONT_STYLESHEET />
                <style>{theme::css_variables()}</style>
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
                {json_ld
                    .map(|json| {
                        view! { <script type="application/ld+json" inner_html=json></script> }
                    })}
                <MetaTags />
            </head>
            <body class="min-h-screen font-body antialiased bg-surface text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta property="og:type" content="website" />
        <Meta name="author" content=PROFILE.name />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-mesh">
            <NavBar />
            <Hero />
            <About />
            <Experience />
            <Projects />
            <Skills />
            <Contact />
            <Footer />
        </main>
    }
}
