//! Which components run on this page load, and in what order

use super::viewport::Viewport;

/// Every page effect that can be constructed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    TimeOfDay,
    PageLoader,
    Navigation,
    EffectsToggle,
    SmoothScroll,
    ScrollReveal,
    AnimatedCounters,
    MobileStickyCta,
    LogosScroll,
    LazyLoad,
    Ripple,
    ScrollProgress,
    MagneticButtons,
    Parallax,
    Tilt,
    CardMouseTracking,
    VideoPlayer,
    TypingEffect,
    TextScramble,
}

impl Component {
    /// Effects that follow the pointer or scroll-jank on touch devices
    pub fn is_pointer_tracking(&self) -> bool {
        matches!(
            self,
            Component::MagneticButtons
                | Component::Parallax
                | Component::Tilt
                | Component::CardMouseTracking
        )
    }
}

/// Every component, in construction order
const STARTUP_ORDER: &[Component] = &[
    Component::TimeOfDay,
    Component::PageLoader,
    Component::Navigation,
    Component::EffectsToggle,
    Component::SmoothScroll,
    Component::ScrollReveal,
    Component::AnimatedCounters,
    Component::MobileStickyCta,
    Component::LogosScroll,
    Component::LazyLoad,
    Component::Ripple,
    Component::ScrollProgress,
    Component::MagneticButtons,
    Component::Parallax,
    Component::Tilt,
    Component::CardMouseTracking,
    Component::VideoPlayer,
    Component::TypingEffect,
    Component::TextScramble,
];

/// Construction order for one page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupPlan {
    pub components: Vec<Component>,
    pub mobile: bool,
}

impl StartupPlan {
    pub fn for_viewport(viewport: Viewport, breakpoint: f64) -> Self {
        let mobile = viewport.is_mobile(breakpoint);
        let components = STARTUP_ORDER
            .iter()
            .copied()
            .filter(|component| !(mobile && component.is_pointer_tracking()))
            .collect();
        Self { components, mobile }
    }

    pub fn includes(&self, component: Component) -> bool {
        self.components.contains(&component)
    }
}

/// Grid children that get a reveal class plus a staggered delay class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerGroup {
    pub selector: &'static str,
    pub reveal_class: &'static str,
    pub modulo: usize,
}

impl StaggerGroup {
    /// `stagger-1` .. `stagger-{modulo}`, cycling
    pub fn stagger_class(&self, index: usize) -> String {
        format!("stagger-{}", (index % self.modulo.max(1)) + 1)
    }
}

pub const STAGGER_GROUPS: &[StaggerGroup] = &[
    StaggerGroup {
        selector: ".features-grid .feature-card",
        reveal_class: "reveal",
        modulo: 3,
    },
    StaggerGroup {
        selector: ".results-grid .result-card",
        reveal_class: "reveal-scale",
        modulo: 4,
    },
    StaggerGroup {
        selector: ".testimonials-grid .testimonial-card",
        reveal_class: "reveal",
        modulo: 3,
    },
    StaggerGroup {
        selector: ".stats-grid .stat-item",
        reveal_class: "reveal",
        modulo: 4,
    },
];

/// Delay before ScrollReveal runs again to pick up stagger-tagged elements
pub const REVEAL_RESCAN_MS: i32 = 100;
