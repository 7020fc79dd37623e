use leptos::prelude::*;

use super::{section::Section, use_notifications};
use crate::content::{Project, RESUME};

const PRIVATE_NOTICE: &str = "PROTOCOL NOT YET PUBLIC. MODULE IS CONSISTENTLY BUILDING...";

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <Section id="projects" title="Project Modules">
            <div class="grid md:grid-cols-2 gap-8">
                {RESUME
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project index /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="relative bg-gray-900/40 border border-gray-800 hover:border-purple-500/50 p-6 rounded-sm backdrop-blur-md transition-all duration-300 group hover:-translate-y-1 hover:shadow-[0_0_30px_rgba(188,19,254,0.1)]">
            <div class="flex justify-between items-start mb-4">
                <span class="text-[10px] font-mono text-purple-500/70">
                    {format!("MOD_{:02}", index + 1)}
                </span>
                <button
                    on:click=move |_| notifications.show(PRIVATE_NOTICE)
                    aria-label=format!("Open {}", project.title)
                    class="text-gray-600 hover:text-purple-400 transition-colors font-mono text-sm"
                >
                    "[↗]"
                </button>
            </div>

            <h3 class="text-xl font-orbitron text-white mb-3 group-hover:text-purple-400 transition-colors">
                {project.title.as_str()}
            </h3>
            <p class="text-gray-400 text-sm leading-relaxed mb-6">{project.description.as_str()}</p>

            {project
                .metrics
                .as_deref()
                .map(|metrics| {
                    view! {
                        <div class="mb-6 px-3 py-2 bg-yellow-500/5 border-l-2 border-yellow-500 text-yellow-300 text-xs font-mono">
                            {metrics}
                        </div>
                    }
                })}

            <div class="flex flex-wrap gap-2">
                {project
                    .tech_stack
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-2 py-0.5 text-[10px] font-mono uppercase tracking-wider text-cyan-300 bg-cyan-950/40 border border-cyan-800/50 rounded-sm">
                                {tech.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
