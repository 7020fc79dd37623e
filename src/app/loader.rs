use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::splash::{
    cube_position, CycleMode, PhraseCycle, CUBE_COUNT, SPLASH_DURATION, STATUS_INTERVAL,
    STATUS_PHRASES,
};

const CUBE_SPACING: f64 = 120.0;
const FACES: [(&str, &str); 6] = [
    ("front", "rotateY(0deg)"),
    ("back", "rotateY(180deg)"),
    ("right", "rotateY(90deg)"),
    ("left", "rotateY(-90deg)"),
    ("top", "rotateX(90deg)"),
    ("bottom", "rotateX(-90deg)"),
];

#[component]
pub fn Loader() -> impl IntoView {
    let (status, set_status) = signal(PhraseCycle::new(STATUS_PHRASES.len(), CycleMode::Once));
    // paused automatically when the loader is unmounted
    use_interval_fn(
        move || {
            if !status.get_untracked().is_done() {
                set_status.update(|c| {
                    c.advance();
                });
            }
        },
        STATUS_INTERVAL.as_millis() as u64,
    );

    let phrase = move || {
        status
            .get()
            .current(STATUS_PHRASES)
            .copied()
            .unwrap_or_default()
    };
    // bar fills a little before the switch
    let fill = format!(
        "animation-duration: {}ms",
        SPLASH_DURATION.as_millis().saturating_sub(300)
    );

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-black overflow-hidden">
            <div class="relative w-64 h-64 flex items-center justify-center perspective-1000">
                <div class="relative w-full h-full preserve-3d animate-cube-spin">
                    {(0..CUBE_COUNT).map(|i| view! { <Cube index=i /> }).collect_view()}
                </div>
            </div>

            <div class="mt-20 text-center animate-fade-in">
                <h2
                    class="text-2xl font-orbitron text-cyan-400 tracking-widest uppercase glitch-text"
                    data-text=phrase
                >
                    {phrase}
                </h2>
                <div class="w-64 h-1 bg-gray-800 mt-4 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-cyan-500 via-purple-500 to-yellow-500 animate-fill"
                        style=fill
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Cube(index: usize) -> impl IntoView {
    let (x, y, z) = cube_position(index, CUBE_SPACING);
    let is_center = (x, y, z) == (0.0, 0.0, 0.0);
    // the breathe keyframes scale between these two offsets
    let style = format!(
        "--near: translate3d({}px, {}px, {}px); --far: translate3d({}px, {}px, {}px); animation-delay: {:.2}s",
        x * 0.4,
        y * 0.4,
        z * 0.4,
        x * 0.8,
        y * 0.8,
        z * 0.8,
        index as f64 * 0.05,
    );
    let class = if is_center {
        "absolute left-1/2 top-1/2 w-8 h-8 -ml-4 -mt-4 preserve-3d animate-breathe animate-pulse"
    } else {
        "absolute left-1/2 top-1/2 w-8 h-8 -ml-4 -mt-4 preserve-3d animate-breathe"
    };

    view! {
        <div class=class style=style>
            {FACES
                .iter()
                .map(|(face, rotate)| {
                    view! {
                        <div
                            class=format!(
                                "absolute w-full h-full border border-cyan-400 bg-cyan-900/20 shadow-neon {face}",
                            )
                            style=format!("transform: {rotate} translateZ(16px)")
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
