use leptos::prelude::*;
use leptos_use::{
    use_mouse, use_raf_fn, use_window_scroll, use_window_size, UseMouseReturn,
    UseRafFnCallbackArgs, UseWindowSizeReturn,
};

use crate::motion::{
    pointer_shift, GridFlow, Particle, GRID_DRIFT, GRID_TILE, GRID_TILT, PARTICLE_COUNT,
    SUN_DRIFT, SUN_OPACITY,
};

/// Depth of the pointer-follow effect on the glows, in px.
const POINTER_DEPTH: f64 = 24.0;

/// Fixed decorative layer behind the page. Reads scroll and pointer signals,
/// owns nothing but the grid flow counter.
#[component]
pub fn Background() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseMouseReturn {
        x, y, source_type, ..
    } = use_mouse();
    let UseWindowSizeReturn { width, height, .. } = use_window_size();

    let flow = StoredValue::new(GridFlow::default());
    let (grid_offset, set_grid_offset) = signal(0.0_f64);
    use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let scroll = scroll_y.get_untracked();
        if let Some(offset) = flow.try_update_value(|f| f.tick(args.delta, scroll)) {
            set_grid_offset.set(offset);
        }
    });

    // use_mouse reports (0, 0) until the first pointer event
    let shift = move || {
        let pointer = source_type.get().map(|_| (x.get(), y.get()));
        pointer_shift(pointer, (width.get(), height.get()), POINTER_DEPTH)
    };

    let sun_style = move || {
        let (dx, dy) = shift();
        let s = scroll_y.get();
        format!(
            "transform: translate(calc(-50% + {dx:.1}px), {:.1}px); opacity: {:.3}",
            SUN_DRIFT.map(s) + dy,
            SUN_OPACITY.map(s)
        )
    };
    let core_style = move || {
        let (dx, dy) = shift();
        format!(
            "transform: translate(calc(-50% - {dx:.1}px), {:.1}px)",
            SUN_DRIFT.map(scroll_y.get()) - dy
        )
    };
    let grid_style = move || {
        let s = scroll_y.get();
        format!(
            "transform: translateY({:.1}px) rotateX({:.2}deg); background-position: 0 {:.2}px; background-size: {GRID_TILE}px {GRID_TILE}px",
            GRID_DRIFT.map(s),
            GRID_TILT.map(s),
            grid_offset.get()
        )
    };

    view! {
        <div class="fixed inset-0 z-[-1] bg-void overflow-hidden pointer-events-none" aria-hidden="true">
            <div
                class="absolute top-[10%] left-1/2 w-[600px] h-[600px] rounded-full bg-gradient-to-b from-yellow-300 via-pink-600 to-purple-900 blur-[80px] opacity-20"
                style=sun_style
            />
            <div
                class="absolute top-[15%] left-1/2 w-[400px] h-[400px] rounded-full bg-gradient-to-t from-cyan-500 via-transparent to-transparent blur-[60px] opacity-10 mix-blend-screen"
                style=core_style
            />

            <div class="absolute inset-0 perspective-1000 overflow-hidden">
                <div
                    class="absolute -left-[50%] -right-[50%] bottom-[-50%] h-[200%] origin-top grid-floor"
                    style=grid_style
                >
                    <div class="absolute top-0 left-0 right-0 h-[40%] bg-gradient-to-b from-[#020005] via-[#020005]/80 to-transparent" />
                </div>
            </div>

            <div class="absolute inset-0">
                {(0..PARTICLE_COUNT)
                    .map(|i| view! { <FloatingParticle particle=Particle::from_index(i) scroll_y /> })
                    .collect_view()}
            </div>

            <div class="absolute inset-0 bg-[radial-gradient(circle_at_center,transparent_0%,#020005_100%)] opacity-80" />
        </div>
    }
}

#[component]
fn FloatingParticle(particle: Particle, scroll_y: Signal<f64>) -> impl IntoView {
    let outer = move || {
        format!(
            "top: {:.2}%; left: {:.2}%; transform: translateY({:.1}px)",
            particle.top,
            particle.left,
            particle.drift(scroll_y.get())
        )
    };
    let inner = format!(
        "width: {size:.1}px; height: {size:.1}px; animation-duration: {:.1}s; animation-delay: {:.1}s",
        particle.duration,
        particle.delay,
        size = particle.size,
    );
    view! {
        <div class="absolute" style=outer>
            <div class="bg-cyan-500 shadow-[0_0_5px_#00f3ff] animate-float" style=inner />
        </div>
    }
}
