use leptos::prelude::*;

use super::reveal::MountReveal;
use crate::{
    content::{NavLink, NAV_LINKS, PROFILE},
    reveal::Tween,
};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50">
            <MountReveal
                tween=Tween::drop_in(-100.0)
                class="border-b border-border/50 bg-surface/80 backdrop-blur-md"
            >
                <div class="max-w-4xl mx-auto px-6 py-5 flex items-center justify-between">
                    <a href="#hero" class="font-heading flex items-baseline gap-1.5 text-white">
                        <span class="text-2xl font-bold tracking-tight">{PROFILE.initials}</span>
                        <span class="text-lg font-semibold text-text-muted">{PROFILE.name}</span>
                    </a>
                    <NavLinks links=NAV_LINKS />
                </div>
            </MountReveal>
        </nav>
    }
}

#[component]
fn NavLinks(links: &'static [NavLink]) -> impl IntoView {
    view! {
        <ul class="flex items-center gap-8">
            {links
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a
                                href=link.href
                                data-nav-link=""
                                class="text-base text-text-muted hover:text-accent transition-colors"
                            >
                                {link.label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_in_declared_order() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <NavLinks links=NAV_LINKS /> }.to_html());

        assert_eq!(html.matches("data-nav-link").count(), NAV_LINKS.len());
        let positions = NAV_LINKS
            .iter()
            .map(|link| {
                html.find(&format!("href=\"{}\"", link.href))
                    .unwrap_or_else(|| panic!("{} should be rendered", link.href))
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for link in NAV_LINKS {
            assert!(html.contains(link.label));
        }
    }

    #[test]
    fn test_nav_bar_starts_above_the_viewport() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <NavBar /> }.to_html());
        assert!(html.contains("href=\"#hero\""));
        assert!(html.contains("translate(0px, -100px)"));
    }
}
