use leptos::prelude::*;

use super::reveal::MountReveal;
use crate::{content::PROFILE, reveal::Tween};

const OUTLINE_BUTTON: &str = "inline-flex items-center px-6 py-3 rounded-lg border border-border text-base text-text-muted hover:text-accent hover:border-accent/50 transition-colors";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="min-h-screen flex flex-col md:flex-row md:items-center justify-center px-6 pt-20 pb-16 max-w-5xl mx-auto gap-12 md:gap-16"
        >
            <div class="flex flex-col justify-center max-w-xl">
                <MountReveal tween=Tween::fade_up(20.0)>
                    <p class="text-accent font-medium text-sm uppercase tracking-widest mb-4">
                        {PROFILE.headline}
                    </p>
                </MountReveal>
                <MountReveal tween=Tween::fade_up(24.0).delay(100)>
                    <h1 class="font-heading text-4xl sm:text-5xl md:text-6xl font-bold text-white leading-tight mb-4">
                        {PROFILE.name}
                    </h1>
                </MountReveal>
                <MountReveal tween=Tween::fade_up(24.0).delay(200)>
                    <p class="text-xl sm:text-2xl text-text-muted max-w-xl mb-10 leading-relaxed">
                        {PROFILE.tagline}
                    </p>
                </MountReveal>
                <MountReveal tween=Tween::fade_up(20.0).delay(300) class="flex flex-wrap gap-4">
                    <a
                        href="#contact"
                        class="inline-flex items-center px-6 py-3 rounded-lg bg-accent text-surface text-base font-medium hover:opacity-90 transition-opacity"
                    >
                        "Get in touch"
                    </a>
                    {PROFILE
                        .profiles
                        .iter()
                        .map(|profile| {
                            view! {
                                <a
                                    href=profile.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=OUTLINE_BUTTON
                                >
                                    {profile.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </MountReveal>
            </div>
            <MountReveal
                tween=Tween::zoom_in(0.95).delay(200)
                class="flex justify-center md:justify-end shrink-0"
            >
                <img
                    src=PROFILE.hero_image.src
                    alt=PROFILE.hero_image.alt
                    width="420"
                    height="420"
                    class="w-full max-w-[320px] sm:max-w-[380px] md:max-w-[420px] h-auto rounded-2xl object-contain"
                />
            </MountReveal>
        </section>
    }
}
