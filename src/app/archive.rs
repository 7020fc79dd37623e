use leptos::prelude::*;

use super::section::Section;
use crate::content::RESUME;

#[component]
pub fn Archive() -> impl IntoView {
    view! {
        <Section id="archive" title="Knowledge Base" class="bg-gray-900/20">
            <div class="grid md:grid-cols-2 gap-12">
                <div>
                    <h3 class="font-mono text-sm text-cyan-500 mb-6 uppercase tracking-widest">
                        "// Education"
                    </h3>
                    <div class="space-y-6">
                        {RESUME
                            .education
                            .iter()
                            .map(|edu| {
                                view! {
                                    <div class="border-l-2 border-cyan-800 pl-4 hover:border-cyan-400 transition-colors">
                                        <h4 class="text-white font-orbitron">{edu.degree.as_str()}</h4>
                                        <div class="text-purple-400 text-sm font-mono">
                                            {edu.institution.as_str()}
                                        </div>
                                        <div class="text-gray-500 text-xs font-mono mt-1">
                                            {format!("{} // {}", edu.period, edu.location)}
                                        </div>
                                        {(!edu.grade.is_empty())
                                            .then(|| {
                                                view! {
                                                    <div class="text-yellow-300 text-xs font-mono mt-1">
                                                        {edu.grade.as_str()}
                                                    </div>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h3 class="font-mono text-sm text-purple-500 mb-6 uppercase tracking-widest">
                        "// Publications"
                    </h3>
                    <div class="space-y-6">
                        {RESUME
                            .publications
                            .iter()
                            .map(|publication| {
                                view! {
                                    <div class="bg-black/40 border border-gray-800 p-4 rounded-sm hover:border-purple-500/40 transition-colors">
                                        <h4 class="text-white text-sm font-bold mb-1">
                                            {publication.title.as_str()}
                                        </h4>
                                        <div class="text-purple-400 text-xs font-mono mb-2">
                                            {publication.publisher.as_str()}
                                        </div>
                                        <p class="text-gray-400 text-xs leading-relaxed">
                                            {publication.details.as_str()}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Section>
    }
}
