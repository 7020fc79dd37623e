use leptos::prelude::*;

/// Heading chrome shared by the content blocks.
#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("py-16 md:py-24 relative {class}")>
            <div class="absolute left-0 top-0 h-full w-px bg-gradient-to-b from-transparent via-cyan-900 to-transparent opacity-20" />
            <div class="absolute right-0 top-0 h-full w-px bg-gradient-to-b from-transparent via-purple-900 to-transparent opacity-20" />

            <div class="container mx-auto px-4 md:px-8 relative z-10">
                <div class="flex items-center mb-12">
                    <div class="h-2 w-2 bg-cyan-500 rounded-full mr-4 shadow-[0_0_10px_#00f3ff]"></div>
                    <h2 class="text-3xl md:text-4xl font-orbitron text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-purple-500 uppercase tracking-wider">
                        {title}
                    </h2>
                    <div class="flex-grow h-px bg-gradient-to-r from-cyan-900 to-transparent ml-6"></div>
                    <div class="text-xs font-mono text-cyan-700 ml-4 hidden md:block">
                        {format!("// SECTION_ID: {}", id.to_uppercase())}
                    </div>
                </div>
                {children()}
            </div>
        </section>
    }
}
