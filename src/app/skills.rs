use leptos::prelude::*;

use super::section::Section;
use crate::content::RESUME;

/// (card border, heading) classes, cycled per category.
const ACCENTS: [(&str, &str); 3] = [
    ("hover:border-cyan-500/40", "text-cyan-400"),
    ("hover:border-purple-500/40", "text-purple-400"),
    ("hover:border-yellow-500/40", "text-yellow-400"),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <Section id="skills" title="System Capabilities" class="bg-gray-900/20">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {RESUME
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(index, category)| {
                        let (border, heading) = ACCENTS[index % ACCENTS.len()];
                        view! {
                            <div class=format!(
                                "bg-black/40 border border-gray-800 {border} p-6 rounded-sm backdrop-blur-sm transition-all duration-300 group",
                            )>
                                <h3 class=format!(
                                    "font-orbitron text-lg mb-4 uppercase tracking-wider {heading}",
                                )>{category.category.as_str()}</h3>
                                <div class="flex flex-wrap gap-2">
                                    {category
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <span class="px-2 py-1 text-xs font-mono text-gray-300 bg-gray-800/60 border border-gray-700 rounded-sm group-hover:border-gray-600 transition-colors">
                                                    {item.as_str()}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
