use leptos::prelude::*;

use super::reveal::{FadeInSection, SectionHeading, SectionSubline};
use crate::content::{SkillGroup, PROFILE, SKILL_GROUPS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-6 max-w-4xl mx-auto">
            <SectionHeading>"Skills"</SectionHeading>
            <SectionSubline />
            <SkillGrid groups=SKILL_GROUPS />
            <FadeInSection delay_ms=300 class="mt-8">
                <div class="rounded-xl bg-surface-card border border-border p-6">
                    <h4 class="font-heading text-lg font-semibold text-white mb-2">
                        "Certification"
                    </h4>
                    <p class="text-text-muted text-base">{PROFILE.certification}</p>
                </div>
            </FadeInSection>
        </section>
    }
}

#[component]
fn SkillGrid(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {groups
                .iter()
                .enumerate()
                .map(|(i, group)| {
                    view! {
                        <FadeInSection delay_ms={i as u32 * 80}>
                            <div class="rounded-xl bg-surface-card border border-border p-6" data-skill-group=i.to_string()>
                                <h4 class="font-heading text-lg font-semibold text-white mb-3">
                                    {group.title}
                                </h4>
                                <div class="flex flex-wrap gap-2">
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <span
                                                    data-skill=*item
                                                    class="px-3 py-1.5 rounded-md bg-surface-elevated text-text-muted text-base border border-border"
                                                >
                                                    {*item}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </FadeInSection>
                    }
                })
                .collect_view()}
        </div>
    }
}
