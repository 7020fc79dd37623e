use leptos::prelude::*;

use super::section::Section;
use crate::content::{Experience, RESUME};
use crate::expand::{CardState, Truncation, VISIBLE_ACHIEVEMENTS};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <Section id="experience" title="Execution History">
            <div class="relative border-l border-gray-800 ml-3 md:ml-6 space-y-12">
                {RESUME
                    .experience
                    .iter()
                    .enumerate()
                    .map(|(index, job)| view! { <ExperienceCard job index /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ExperienceCard(job: &'static Experience, index: usize) -> impl IntoView {
    let card = RwSignal::new(CardState::new(job.id.as_str()));
    let truncation = Truncation::new(job.achievements.len(), VISIBLE_ACHIEVEMENTS);
    let expanded = move || card.with(|c| c.expanded);
    let list_id = card.with_untracked(|c| format!("achievements-{}", c.id));

    let achievements = move || {
        truncation
            .visible(&job.achievements, expanded())
            .iter()
            .map(|line| {
                view! {
                    <li class="flex items-start gap-3 text-gray-400 text-sm leading-relaxed group/item hover:text-gray-200 transition-colors animate-fade-in">
                        <span class="mt-1.5 text-cyan-500 shrink-0 text-xs">">"</span>
                        <span>{line.as_str()}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="relative pl-8 md:pl-12 group">
            <div class="absolute -left-[5px] top-6 w-2.5 h-2.5 bg-gray-900 border border-cyan-500 rounded-full group-hover:bg-cyan-500 group-hover:shadow-[0_0_10px_#00f3ff] transition-all duration-300 z-10" />
            <div class="absolute left-0 top-[29px] w-8 md:w-12 h-px bg-gray-800 group-hover:bg-cyan-900 transition-colors" />

            <div class="bg-gray-900/40 backdrop-blur-md border border-gray-800 hover:border-cyan-500/30 p-6 md:p-8 rounded-sm transition-all duration-300 hover:shadow-[0_0_30px_rgba(0,243,255,0.05)] relative overflow-hidden">
                <div class="absolute top-0 right-0 p-2 text-[10px] font-mono text-gray-700 group-hover:text-cyan-700 transition-colors">
                    {format!("LOG_ENTRY_{:02}", index + 1)}
                </div>

                <div class="flex flex-col md:flex-row md:items-center justify-between mb-6 gap-4">
                    <div>
                        <h3 class="text-xl md:text-2xl font-bold text-white font-orbitron tracking-wide group-hover:text-cyan-400 transition-colors">
                            {job.role.as_str()}
                        </h3>
                        <div class="text-purple-400 text-sm md:text-base font-mono mt-1">
                            "@ " {job.company.as_str()}
                        </div>
                    </div>
                    <div class="flex flex-col md:items-end gap-1">
                        <span class="px-3 py-1 bg-cyan-950/30 text-cyan-300 text-xs font-mono border border-cyan-800/50 rounded-sm">
                            {job.period.as_str()}
                        </span>
                        <span class="text-gray-500 text-xs font-mono">{job.location.as_str()}</span>
                    </div>
                </div>

                <ul id=list_id.clone() class="space-y-3">
                    {achievements}
                </ul>

                <Show when=move || truncation.has_toggle()>
                    <button
                        on:click=move |_| {
                            card.update(|c| {
                                c.toggle();
                            });
                        }
                        aria-expanded=move || expanded().to_string()
                        aria-controls=list_id.clone()
                        class="mt-6 flex items-center gap-2 text-xs font-mono text-cyan-500 hover:text-cyan-300 transition-colors uppercase tracking-wider"
                    >
                        <span>{move || if expanded() { "▲" } else { "▼" }}</span>
                        {move || truncation.toggle_label(expanded())}
                    </button>
                </Show>
            </div>
        </div>
    }
}
