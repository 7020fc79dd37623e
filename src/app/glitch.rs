use leptos::prelude::*;

#[component]
pub fn GlitchText(#[prop(into)] text: String, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=format!(
            "relative inline-block group hover:text-white transition-colors duration-200 {class}",
        )>
            <span class="relative z-10">{text.clone()}</span>
            <span
                class="absolute top-0 left-0 -z-10 w-full h-full text-[#00f3ff] opacity-0 group-hover:opacity-70 animate-glitch-1"
                aria-hidden="true"
            >
                {text.clone()}
            </span>
            <span
                class="absolute top-0 left-0 -z-10 w-full h-full text-[#bc13fe] opacity-0 group-hover:opacity-70 animate-glitch-2"
                aria-hidden="true"
            >
                {text}
            </span>
        </span>
    }
}
