use leptos::prelude::*;

use super::reveal::{FadeInSection, RevealItem, SectionHeading, SectionSubline};
use crate::content::{EducationEntry, ExperienceEntry, EDUCATION, EXPERIENCE};

const CARD: &str = "rounded-xl bg-surface-card border border-border p-6 sm:p-8";

#[component]
pub fn Experience() -> impl IntoView {
    let jobs = EXPERIENCE
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let class = if i == 0 { "" } else { "mt-8" };
            view! {
                <FadeInSection class=class>
                    <ExperienceCard entry />
                </FadeInSection>
            }
        })
        .collect_view();
    let schools = EDUCATION
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            view! {
                <FadeInSection delay_ms={150 + i as u32 * 100} class="mt-8">
                    <EducationCard entry />
                </FadeInSection>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="py-20 px-6 max-w-4xl mx-auto">
            <SectionHeading>"Experience"</SectionHeading>
            <SectionSubline />
            {jobs}
            {schools}
        </section>
    }
}

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class=CARD>
            <div class="flex flex-wrap items-baseline justify-between gap-2 mb-5">
                <div>
                    <h3 class="font-heading text-2xl font-semibold text-white">{entry.role}</h3>
                    <p class="text-accent font-medium text-lg">{entry.company}</p>
                </div>
                <div class="text-base text-text-muted">
                    <span>{entry.period}</span>
                    <span class="mx-2">"·"</span>
                    <span>{entry.kind}</span>
                </div>
            </div>
            <ul class="space-y-3 text-base text-text-muted">
                {entry
                    .points
                    .iter()
                    .enumerate()
                    .map(|(index, point)| {
                        view! {
                            <RevealItem index>
                                <span class="text-accent mt-1.5">"·"</span>
                                <span>{*point}</span>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn EducationCard(entry: &'static EducationEntry) -> impl IntoView {
    view! {
        <div class=CARD>
            <div class="flex flex-wrap items-baseline justify-between gap-2 mb-2">
                <h3 class="font-heading text-2xl font-semibold text-white">{entry.degree}</h3>
                <span class="text-base text-text-muted">{entry.period}</span>
            </div>
            <p class="text-accent font-medium text-lg">{entry.institution}</p>
            <p class="text-base text-text-muted mt-1">{entry.location}</p>
        </div>
    }
}
