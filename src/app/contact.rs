use leptos::prelude::*;

use super::outbound::OutboundLink;
use crate::build_info::{build_year, copyright_line, version_tag};
use crate::content::RESUME;
use crate::links::{mailto, tel};

#[derive(Debug, Clone)]
struct Channel {
    label: &'static str,
    glyph: &'static str,
    href: String,
    external: bool,
}

fn channels() -> Vec<Channel> {
    let info = &RESUME.personal_info;
    vec![
        Channel {
            label: "Email",
            glyph: "@",
            href: mailto(&info.email),
            external: false,
        },
        Channel {
            label: "LinkedIn",
            glyph: "in",
            href: info.linkedin.clone(),
            external: true,
        },
        Channel {
            label: "GitHub",
            glyph: "</>",
            href: info.github.clone(),
            external: true,
        },
        Channel {
            label: "Phone",
            glyph: "#",
            href: tel(&info.phone),
            external: false,
        },
    ]
}

#[component]
pub fn Contact() -> impl IntoView {
    let copyright = copyright_line(build_year(), &RESUME.personal_info.name);

    view! {
        <footer id="contact" class="relative pt-24 pb-12 border-t border-gray-800/50 bg-black/60 backdrop-blur-md">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-1/2 h-px bg-gradient-to-r from-transparent via-cyan-500 to-transparent shadow-[0_0_10px_#00f3ff]" />

            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl md:text-5xl font-orbitron font-bold text-white mb-4 uppercase tracking-wider">
                    "Establish " <span class="text-cyan-400">"Connection"</span>
                </h2>
                <p class="text-gray-400 font-mono text-sm mb-12">
                    "> Open channels for collaboration and new protocols."
                </p>

                <SocialLinks />

                <div class="mt-16 pt-8 border-t border-gray-900 flex flex-col md:flex-row items-center justify-between gap-4 text-xs font-mono text-gray-600">
                    <span>{copyright}</span>
                    <span class="text-cyan-900">{version_tag()}</span>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-6">
            {channels()
                .into_iter()
                .map(|channel| {
                    view! {
                        <OutboundLink
                            href=channel.href
                            external=channel.external
                            label=channel.label
                            class="group flex flex-col items-center gap-3 w-24"
                        >
                            <div class="w-14 h-14 flex items-center justify-center border border-gray-700 bg-gray-900/60 text-gray-400 font-mono rounded-sm group-hover:border-cyan-500 group-hover:text-cyan-400 group-hover:shadow-[0_0_15px_rgba(0,243,255,0.3)] transition-all duration-300">
                                {channel.glyph}
                            </div>
                            <span class="text-[10px] font-mono uppercase tracking-widest text-gray-500 group-hover:text-cyan-400 transition-colors">
                                {channel.label}
                            </span>
                        </OutboundLink>
                    }
                })
                .collect_view()}
        </div>
    }
}
