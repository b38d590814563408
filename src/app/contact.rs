use leptos::prelude::*;

use super::reveal::{FadeInSection, SectionHeading, SectionSubline};
use crate::content::PROFILE;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-6 max-w-4xl mx-auto">
            <SectionHeading>"Contact"</SectionHeading>
            <SectionSubline />
            <FadeInSection>
                <p class="text-text-muted text-xl mb-8 leading-relaxed">
                    "I'm open to collaboration and new opportunities. Reach out via email or connect on LinkedIn."
                </p>
                <div class="flex flex-wrap gap-6 text-lg">
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        class="text-accent hover:underline font-medium"
                    >
                        {PROFILE.email}
                    </a>
                    <a
                        href=format!("tel:{}", PROFILE.phone)
                        class="text-accent hover:underline font-medium"
                    >
                        {PROFILE.phone_display}
                    </a>
                </div>
                <div class="flex gap-6 mt-6 text-lg">
                    {PROFILE
                        .profiles
                        .iter()
                        .map(|profile| {
                            view! {
                                <a
                                    href=profile.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=profile.label
                                    class="text-text-muted hover:text-accent transition-colors"
                                >
                                    {profile.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </FadeInSection>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-6 border-t border-border text-center text-text-muted text-base">
            {format!("© {BUILD_YEAR} {}. Built with Leptos & Tailwind.", PROFILE.name)}
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_contact_links() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Contact /> }.to_html());

        assert!(html.contains("href=\"mailto:prashantmishra10232@gmail.com\""));
        assert!(html.contains("href=\"tel:+919958304996\""));
        assert_eq!(
            html.matches("target=\"_blank\"").count(),
            PROFILE.profiles.len()
        );
        for profile in PROFILE.profiles {
            assert!(html.contains(&format!("aria-label=\"{}\"", profile.label)));
        }
    }

    #[test]
    fn test_footer_year() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Footer /> }.to_html());
        assert!(html.contains(BUILD_YEAR));
        assert!(BUILD_YEAR.parse::<i32>().is_ok());
    }
}
