use leptos::prelude::*;

use super::reveal::{FadeInSection, SectionHeading, SectionSubline};
use crate::content::PROFILE;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-6 max-w-4xl mx-auto">
            <SectionHeading>"About"</SectionHeading>
            <SectionSubline />
            <FadeInSection>
                <div class="flex flex-col sm:flex-row items-center sm:items-start gap-8">
                    <div class="shrink-0 w-48 h-48 sm:w-56 sm:h-56 rounded-2xl overflow-hidden border-2 border-border bg-surface-card ring-2 ring-accent/20">
                        <img
                            src=PROFILE.headshot.src
                            alt=PROFILE.headshot.alt
                            width="224"
                            height="224"
                            loading="lazy"
                            class="w-full h-full object-cover"
                        />
                    </div>
                    <p class="text-text-muted text-xl leading-relaxed max-w-2xl">{PROFILE.about}</p>
                </div>
            </FadeInSection>
        </section>
    }
}
