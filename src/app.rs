mod archive;
mod background;
mod contact;
mod experience;
mod glitch;
mod hero;
mod loader;
mod notification;
mod outbound;
mod projects;
mod section;
mod skills;

pub use notification::{provide_notifications, use_notifications, Notifications};

use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::RESUME;
use crate::links::{anchor_scroll_top, NavItem, HEADER_OFFSET, NAV_ITEMS};
use crate::splash::{Splash, SPLASH_DURATION};

use archive::Archive;
use background::Background;
use contact::Contact;
use experience::ExperienceSection;
use hero::Hero;
use loader::Loader;
use notification::NotificationToast;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/neon-folio.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-void">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_notifications();

    let name = RESUME.personal_info.name.as_str();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=RESUME.personal_info.title.as_str() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
        <NotificationToast />
    }
}

/// The single page. Shows the loader until the splash timer fires, then the
/// site; there is no way back to the loader.
#[component]
fn Portfolio() -> impl IntoView {
    let splash = RwSignal::new(Splash::new());

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            splash.update(|s| {
                if s.finish() {
                    log::debug!("splash finished");
                }
            });
        },
        SPLASH_DURATION.as_millis() as f64,
    );
    // arm on the client only, after mount
    Effect::new(move |_| start(()));

    view! {
        <Title text="Portfolio" />
        <Show when=move || splash.with(Splash::is_loading) fallback=|| view! { <Site /> }>
            <Loader />
        </Show>
    }
}

#[component]
fn Site() -> impl IntoView {
    view! {
        <div class="min-h-screen text-gray-200 scanlines font-sans selection:bg-cyan-500 selection:text-black relative overflow-hidden">
            <Background />
            <Nav />
            <main class="relative z-0">
                <Hero />
                <ExperienceSection />
                <Skills />
                <Projects />
                <Archive />
                <Contact />
            </main>
        </div>
    }
}

fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let top = el.get_bounding_client_rect().top();
    let scroll_y = window().scroll_y().unwrap_or(0.0);
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(anchor_scroll_top(top, scroll_y, HEADER_OFFSET));
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (first, rest) = RESUME.name_parts();

    let nav_click = move |ev: MouseEvent, item: NavItem| {
        ev.prevent_default();
        set_menu_open.set(false);
        scroll_to_section(item.target);
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-[100] bg-[#050505]/80 backdrop-blur-md border-b border-gray-800/50 h-16 shadow-[0_4px_30px_rgba(0,0,0,0.5)]">
            <div class="container mx-auto px-4 h-full flex items-center justify-between">
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_top();
                    }
                    class="text-xl font-orbitron font-bold text-white tracking-widest cursor-pointer group flex items-center gap-2 uppercase"
                >
                    <div class="w-3 h-3 bg-cyan-500 rotate-45 group-hover:animate-spin" />
                    {first}
                    " "
                    <span class="text-cyan-500 group-hover:text-cyan-400 transition-colors">
                        {rest}
                    </span>
                </a>

                <div class="hidden md:flex gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|&item| {
                            view! {
                                <a
                                    href=item.href()
                                    on:click=move |ev| nav_click(ev, item)
                                    class="text-sm font-mono text-gray-400 hover:text-cyan-400 transition-colors uppercase tracking-wider relative group cursor-pointer"
                                >
                                    <span class="relative z-10">{item.label}</span>
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-500 group-hover:w-full transition-all duration-300 shadow-[0_0_10px_#00f3ff]" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="md:hidden text-cyan-500 hover:text-white transition-colors font-mono text-2xl"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-gray-900/95 border-b border-gray-800 overflow-hidden backdrop-blur-xl animate-fade-in">
                    <div class="flex flex-col p-4 gap-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|&item| {
                                view! {
                                    <a
                                        href=item.href()
                                        on:click=move |ev| nav_click(ev, item)
                                        class="text-gray-300 hover:text-cyan-400 font-mono block py-2 border-l-2 border-transparent hover:border-cyan-500 pl-4 transition-all cursor-pointer"
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
