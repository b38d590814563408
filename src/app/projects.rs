use leptos::{either::Either, prelude::*};

use super::reveal::{FadeInSection, SectionHeading, SectionSubline};
use crate::content::{Project, Screenshot, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-6 max-w-4xl mx-auto">
            <SectionHeading>"Projects"</SectionHeading>
            <SectionSubline />
            <div class="space-y-6">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <FadeInSection delay_ms={i as u32 * 100}>
                                <ProjectCard project />
                            </FadeInSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let layout = project.layout();
    view! {
        <div class="rounded-xl bg-surface-card border border-border overflow-hidden hover:border-accent/30 transition-colors">
            {layout.screenshot().map(|shot| view! { <ProjectScreenshot shot name=project.name /> })}
            <div class="p-6 sm:p-8">
                <div class="flex flex-wrap items-center gap-3 mb-2">
                    <h3 class="font-heading text-2xl font-semibold text-white">{project.name}</h3>
                    {layout
                        .live_demo()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    data-role="live-demo"
                                    class="text-base text-accent hover:underline"
                                >
                                    "Live demo"
                                </a>
                            }
                        })}
                </div>
                <p class="text-base text-accent mb-3">{project.stack}</p>
                <p class="text-lg text-text-muted mb-4">{project.description}</p>
                <ul class="space-y-2 text-base text-text-muted">
                    {project
                        .highlights
                        .iter()
                        .map(|h| {
                            view! {
                                <li class="flex gap-2">
                                    <span class="text-accent">"→"</span>
                                    {*h}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn ProjectScreenshot(shot: Screenshot, name: &'static str) -> impl IntoView {
    let image = move || {
        view! {
            <img
                src=shot.image
                alt=format!("{name} application screenshot")
                loading="lazy"
                class="absolute inset-0 w-full h-full object-cover object-top"
            />
        }
    };
    match shot.link {
        Some(url) => Either::Left(view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                data-role="screenshot-link"
                class="block focus:outline-none focus-visible:ring-2 focus-visible:ring-accent ring-offset-2 ring-offset-surface-card rounded-t-xl"
            >
                <div class="relative w-full aspect-video bg-surface-elevated overflow-hidden">
                    {image()}
                    <span class="absolute bottom-3 right-3 px-4 py-2 rounded-lg bg-accent/90 text-surface text-base font-medium backdrop-blur-sm">
                        "View live demo →"
                    </span>
                </div>
            </a>
        }),
        None => Either::Right(view! {
            <div
                data-role="screenshot"
                class="relative w-full aspect-video bg-surface-elevated overflow-hidden rounded-t-xl"
            >
                {image()}
            </div>
        }),
    }
}
