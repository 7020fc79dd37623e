use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_window_scroll};

use super::{glitch::GlitchText, outbound::OutboundLink, use_notifications};
use crate::content::RESUME;
use crate::motion::{HERO_BACKDROP_DRIFT, HERO_BACKDROP_OPACITY, SCROLL_HINT_OPACITY};
use crate::splash::{CycleMode, PhraseCycle, TITLE_INTERVAL};

const PROTOCOLS_NOTICE: &str =
    "SYSTEM UPGRADE IN PROGRESS. PROTOCOLS ARE CONSISTENTLY BUILDING...";

#[component]
pub fn Hero() -> impl IntoView {
    let notifications = use_notifications();
    let info = &RESUME.personal_info;
    let titles = RESUME.hero_titles.as_slice();
    let (first, rest) = RESUME.name_parts();

    let (cycle, set_cycle) = signal(PhraseCycle::new(titles.len(), CycleMode::Loop));
    use_interval_fn(
        move || {
            set_cycle.update(|c| {
                c.advance();
            });
        },
        TITLE_INTERVAL.as_millis() as u64,
    );
    let title = move || {
        cycle
            .get()
            .current(titles)
            .map(String::as_str)
            .unwrap_or(info.title.as_str())
    };

    let (_, scroll_y) = use_window_scroll();
    let backdrop_style = move || {
        let s = scroll_y.get();
        format!(
            "transform: translateY({:.1}px); opacity: {:.3}",
            HERO_BACKDROP_DRIFT.map(s),
            HERO_BACKDROP_OPACITY.map(s)
        )
    };
    let hint_style = move || format!("opacity: {:.3}", SCROLL_HINT_OPACITY.map(scroll_y.get()));

    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20">
            <div
                class="absolute inset-0 pointer-events-none bg-[radial-gradient(circle_at_30%_40%,rgba(188,19,254,0.12),transparent_60%)]"
                style=backdrop_style
            />
            <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-[#020005] to-transparent z-10 pointer-events-none" />

            <div class="container mx-auto px-4 z-10 grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <div class="mb-4 flex items-center gap-2 text-cyan-400 font-mono text-sm animate-slide-in">
                        <span>">_"</span>
                        <span>"> INITIALIZING_USER_PROFILE..."</span>
                    </div>

                    <h1 class="text-5xl md:text-7xl font-orbitron font-bold mb-6 leading-tight uppercase">
                        <GlitchText text=first />
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-500 to-cyan-400">
                            {rest}
                        </span>
                    </h1>

                    <div class="h-8 mb-8 font-mono text-xl md:text-2xl text-yellow-300">
                        "> " {title} <span class="animate-pulse">"_"</span>
                    </div>

                    <p class="text-gray-400 max-w-lg mb-8 leading-relaxed border-l-2 border-purple-500 pl-4 bg-purple-900/10 p-4 rounded-r backdrop-blur-sm">
                        {info.summary.as_str()}
                    </p>

                    <div class="flex gap-4 flex-wrap">
                        <OutboundLink
                            href=info.linkedin.as_str()
                            external=true
                            class="px-6 py-3 bg-cyan-900/30 border border-cyan-500 text-cyan-400 font-orbitron hover:bg-cyan-500 hover:text-black transition-all duration-300 uppercase tracking-wider relative overflow-hidden group"
                        >
                            <span class="relative z-10">"Connect LinkedIn"</span>
                            <div class="absolute inset-0 h-full w-full bg-cyan-400 translate-y-full group-hover:translate-y-0 transition-transform duration-300"></div>
                        </OutboundLink>
                        <button
                            on:click=move |ev| {
                                ev.prevent_default();
                                notifications.show(PROTOCOLS_NOTICE);
                            }
                            class="px-6 py-3 bg-transparent border border-purple-500 text-purple-400 font-orbitron hover:shadow-[0_0_15px_#bc13fe] transition-all duration-300 uppercase tracking-wider backdrop-blur-sm"
                        >
                            "View Protocols"
                        </button>
                    </div>
                </div>

                <Orbit />
            </div>

            <div
                class="absolute bottom-10 left-1/2 -translate-x-1/2 text-cyan-500/50 flex flex-col items-center gap-2 animate-bob"
                style=hint_style
            >
                <span class="text-[10px] uppercase tracking-[0.2em]">"Scroll to Navigate"</span>
                <div class="w-px h-12 bg-gradient-to-b from-cyan-500 to-transparent"></div>
            </div>
        </div>
    }
}

#[component]
fn Orbit() -> impl IntoView {
    view! {
        <div class="relative hidden md:flex items-center justify-center" aria-hidden="true">
            <div class="relative w-80 h-80">
                <div class="absolute inset-0 rounded-full border border-dashed border-cyan-500/30 animate-[spin_20s_linear_infinite]" />
                <div class="absolute inset-4 rounded-full border border-dotted border-purple-500/30 animate-[spin_15s_linear_infinite_reverse]" />
                <div class="absolute inset-12 rounded-full border border-dashed border-yellow-500/20 animate-[spin_10s_linear_infinite]" />

                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="relative w-32 h-32 bg-gray-900/80 backdrop-blur-md border border-cyan-500 flex items-center justify-center clip-path-hexagon shadow-[0_0_30px_rgba(0,243,255,0.2)]">
                        <span class="text-cyan-400 text-4xl font-orbitron animate-pulse">"AI"</span>
                    </div>
                </div>

                <div class="absolute inset-0 animate-[spin_12s_linear_infinite]">
                    <div class="absolute -top-4 left-1/2 -translate-x-1/2 bg-black border border-cyan-500 p-2 rounded shadow-[0_0_10px_#00f3ff] text-cyan-300 font-mono text-xs">
                        "CPU"
                    </div>
                </div>
                <div class="absolute inset-0 animate-[spin_18s_linear_infinite_reverse]">
                    <div class="absolute -bottom-4 left-1/2 -translate-x-1/2 bg-black border border-purple-500 p-2 rounded shadow-[0_0_10px_#bc13fe] text-purple-300 font-mono text-xs">
                        "DB"
                    </div>
                </div>
            </div>
        </div>
    }
}
