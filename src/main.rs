//! Stark Landing entry point
//!
//! Handles platform-specific initialization and constructs the page effects.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use web_sys::Event;

    use stark_landing::LandingConfig;
    use stark_landing::dom::{
        self, counters, effects_toggle::EffectsToggle, loader, marquee, navigation, pointer,
        reveal, scroll, text, time_of_day, video,
    };
    use stark_landing::fx::startup::REVEAL_RESCAN_MS;
    use stark_landing::fx::{Component, StartupPlan, Viewport};

    fn viewport() -> Viewport {
        let Some(window) = dom::window() else {
            return Viewport::default();
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let touch_events = js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false);
        let max_touch_points = u32::try_from(window.navigator().max_touch_points()).unwrap_or(0);
        Viewport {
            width,
            touch_events,
            max_touch_points,
        }
    }

    fn construct(component: Component, config: &LandingConfig, rng: &mut Pcg32) {
        match component {
            Component::TimeOfDay => time_of_day::init(config.time_of_day_refresh_ms),
            Component::PageLoader => loader::init(Pcg32::from_rng(rng)),
            Component::Navigation => navigation::init_navigation(),
            Component::EffectsToggle => {
                EffectsToggle::init(&config.effects_stylesheet);
            }
            Component::SmoothScroll => navigation::init_smooth_scroll(),
            Component::ScrollReveal => reveal::init_scroll_reveal(),
            Component::AnimatedCounters => counters::init(config.counter_duration_ms),
            Component::MobileStickyCta => scroll::init_mobile_sticky_cta(),
            Component::LogosScroll => marquee::init(config.marquee_speed, config.marquee_gap),
            Component::LazyLoad => reveal::init_lazy_load(),
            Component::Ripple => pointer::init_ripple(),
            Component::ScrollProgress => scroll::init_scroll_progress(),
            Component::MagneticButtons => pointer::init_magnetic_buttons(),
            Component::Parallax => scroll::init_parallax(),
            Component::Tilt => pointer::init_tilt(),
            Component::CardMouseTracking => pointer::init_card_tracking(),
            Component::VideoPlayer => video::init(&config.video_embed_url),
            Component::TypingEffect => text::init_typing(config.typing),
            Component::TextScramble => text::init_text_scramble(config.scramble_hold_ms, rng),
        }
    }

    fn start(config: &LandingConfig) {
        dom::set_body_overflow("hidden");

        let seed = js_sys::Date::now() as u64;
        let mut rng = Pcg32::seed_from_u64(seed);

        let plan = StartupPlan::for_viewport(viewport(), config.mobile_breakpoint);
        log::debug!(
            "Startup plan ({}): {:?}",
            if plan.mobile { "mobile" } else { "desktop" },
            plan.components
        );
        for &component in &plan.components {
            construct(component, config, &mut rng);
        }

        // Staggered grid children are tagged after the first reveal scan
        reveal::apply_stagger();
        if plan.includes(Component::ScrollReveal) {
            dom::set_timeout(REVEAL_RESCAN_MS, reveal::init_scroll_reveal);
        }

        log::info!(
            "Stark Financial landing page initialized ({} effects)",
            plan.components.len()
        );
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let config = LandingConfig::load();
        if let Err(err) = console_log::init_with_level(config.log_level()) {
            web_sys::console::warn_1(&format!("Logger unavailable: {err}").into());
        }

        let Some(document) = dom::document() else {
            log::warn!("No document; effects disabled");
            return;
        };

        if document.ready_state() == "loading" {
            dom::listen(&document, "DOMContentLoaded", move |_: Event| start(&config));
        } else {
            start(&config);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Stark Landing (native) starting...");
    log::info!("Effects need a browser - build for wasm32 and serve the page for the real thing");

    demo_effects();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_effects() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use stark_landing::LandingConfig;
    use stark_landing::fx::{Scrambler, StartupPlan, TimeOfDay, Viewport, format_compact};

    for hour in [6, 12, 18, 23] {
        log::info!("{hour:02}:00 -> {}", TimeOfDay::from_hour(hour).as_str());
    }
    for value in [42, 2_300, 1_500_000] {
        log::info!("Counter {value} -> {}", format_compact(value));
    }

    let mut scrambler = Scrambler::new(Pcg32::seed_from_u64(42));
    scrambler.retarget("Build wealth", "Sleep well");
    let mut frames = 0;
    let last = loop {
        let frame = scrambler.step();
        frames += 1;
        if frame.complete {
            break frame;
        }
        log::debug!("{}", frame.text());
    };
    log::info!("Scramble settled on {:?} after {frames} frames", last.text());

    let desktop = Viewport {
        width: 1440.0,
        ..Default::default()
    };
    let breakpoint = LandingConfig::default().mobile_breakpoint;
    let plan = StartupPlan::for_viewport(desktop, breakpoint);
    log::info!("Desktop startup plan: {} components", plan.components.len());
}
