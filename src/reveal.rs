//! One-shot reveal-on-scroll.
//!
//! Every revealable block owns a [`Reveal`] state machine. The browser side
//! feeds it intersection notifications; the machine decides when the block
//! flips to its visible state and makes sure the underlying viewport watch is
//! released exactly once, either on the first intersection or on unmount.

/// A registered viewport watch that can be torn down.
pub trait ViewportWatch {
    fn release(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unobserved,
    Watching,
    Revealed,
}

#[derive(Debug)]
pub struct Reveal<W> {
    phase: Phase,
    watch: Option<W>,
    unmounted: bool,
}

impl<W: ViewportWatch> Default for Reveal<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ViewportWatch> Reveal<W> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Unobserved,
            watch: None,
            unmounted: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Starts watching the block. `None` means the platform has no
    /// intersection primitive, in which case the block is revealed right
    /// away rather than staying hidden forever.
    pub fn mount(&mut self, watch: Option<W>) -> Phase {
        if self.unmounted {
            if let Some(mut w) = watch {
                w.release();
            }
            return self.phase;
        }
        match (self.phase, watch) {
            (Phase::Unobserved, Some(w)) => {
                self.watch = Some(w);
                self.phase = Phase::Watching;
            }
            (Phase::Unobserved, None) => {
                self.phase = Phase::Revealed;
            }
            // already revealed (or mounted twice): the new watch is never needed
            (_, Some(mut w)) => w.release(),
            (_, None) => {}
        }
        self.phase
    }

    /// Feeds one intersection notification. Returns true only for the call
    /// that reveals the block.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.unmounted || self.phase == Phase::Revealed || !intersecting {
            return false;
        }
        self.phase = Phase::Revealed;
        self.release();
        true
    }

    /// Tears the block down. A watch still held is released; nothing
    /// changes state afterwards.
    pub fn unmount(&mut self) {
        self.unmounted = true;
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut w) = self.watch.take() {
            w.release();
        }
    }
}

/// Vertical extent of a block, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn scrolled_to(self, top: f64) -> Self {
        Self { top, ..self }
    }
}

impl Rect {
    /// Any part of the block lies inside the viewport grown by `margin`
    /// pixels on each side. Touching edges count.
    pub fn intersects(&self, viewport: Viewport, margin: f64) -> bool {
        self.top <= viewport.bottom() + margin && self.bottom >= viewport.top - margin
    }
}

/// A pose a block can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub scale_x: f32,
}

impl VisualState {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
    };

    fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            parts.push(format!(
                "translate({}px, {}px)",
                self.translate_x, self.translate_y
            ));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.scale_x != 1.0 {
            parts.push(format!("scaleX({})", self.scale_x));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Transition between a hidden and a visible pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub hidden: VisualState,
    pub visible: VisualState,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Tween {
    pub fn fade_up(offset: f32) -> Self {
        Self {
            hidden: VisualState {
                opacity: 0.0,
                translate_y: offset,
                ..VisualState::VISIBLE
            },
            visible: VisualState::VISIBLE,
            duration_ms: 500,
            delay_ms: 0,
        }
    }

    pub fn slide_x(offset: f32) -> Self {
        Self {
            hidden: VisualState {
                opacity: 0.0,
                translate_x: offset,
                ..VisualState::VISIBLE
            },
            ..Self::fade_up(0.0)
        }
    }

    /// Slides in without fading, e.g. a fixed header dropping into place.
    pub fn drop_in(offset: f32) -> Self {
        Self {
            hidden: VisualState {
                translate_y: offset,
                ..VisualState::VISIBLE
            },
            duration_ms: 400,
            ..Self::fade_up(0.0)
        }
    }

    pub fn zoom_in(scale: f32) -> Self {
        Self {
            hidden: VisualState {
                opacity: 0.0,
                scale,
                ..VisualState::VISIBLE
            },
            duration_ms: 600,
            ..Self::fade_up(0.0)
        }
    }

    pub fn grow_x() -> Self {
        Self {
            hidden: VisualState {
                scale_x: 0.0,
                ..VisualState::VISIBLE
            },
            ..Self::fade_up(0.0)
        }
    }

    pub fn duration(self, duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    pub fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Inline CSS for the block in the given state.
    pub fn style(&self, revealed: bool) -> String {
        let state = if revealed { self.visible } else { self.hidden };
        format!(
            "opacity: {}; transform: {}; transition: opacity {d}ms ease-out {w}ms, transform {d}ms ease-out {w}ms",
            state.opacity,
            state.transform(),
            d = self.duration_ms,
            w = self.delay_ms,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Early-trigger margin around the viewport, in logical pixels.
    pub margin_px: u32,
    pub tween: Tween,
}

impl RevealOptions {
    /// Content blocks: 30px rise, triggered 80px early.
    pub fn section(delay_ms: u32) -> Self {
        Self {
            margin_px: 80,
            tween: Tween::fade_up(30.0).delay(delay_ms),
        }
    }

    pub fn heading() -> Self {
        Self {
            margin_px: 50,
            tween: Tween::fade_up(20.0),
        }
    }

    /// The accent bar under a heading.
    pub fn accent() -> Self {
        Self {
            margin_px: 0,
            tween: Tween::grow_x(),
        }
    }

    /// One bullet of a list, staggered by its position.
    pub fn list_item(index: usize) -> Self {
        Self {
            margin_px: 0,
            tween: Tween::slide_x(-10.0)
                .duration(300)
                .delay(index as u32 * 80),
        }
    }

    pub fn root_margin(&self) -> String {
        format!("{}px", self.margin_px)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct CountingWatch(Rc<Cell<u32>>);

    impl CountingWatch {
        fn releases(&self) -> u32 {
            self.0.get()
        }
    }

    impl ViewportWatch for CountingWatch {
        fn release(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn watching() -> (Reveal<CountingWatch>, CountingWatch) {
        let watch = CountingWatch::default();
        let mut reveal = Reveal::new();
        assert_eq!(reveal.mount(Some(watch.clone())), Phase::Watching);
        (reveal, watch)
    }

    #[test]
    fn test_starts_unobserved() {
        let reveal = Reveal::<CountingWatch>::new();
        assert_eq!(reveal.phase(), Phase::Unobserved);
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn test_reveals_once() {
        let (mut reveal, watch) = watching();

        assert!(!reveal.observe(false));
        assert_eq!(reveal.phase(), Phase::Watching);
        assert_eq!(watch.releases(), 0);

        assert!(reveal.observe(true));
        assert!(reveal.is_revealed());
        assert_eq!(watch.releases(), 1);

        // later notifications never flip it back or release again
        assert!(!reveal.observe(false));
        assert!(!reveal.observe(true));
        assert!(reveal.is_revealed());
        assert_eq!(watch.releases(), 1);
    }

    #[test]
    fn test_unmount_while_watching_releases_once() {
        let (mut reveal, watch) = watching();

        reveal.unmount();
        assert_eq!(watch.releases(), 1);
        assert_eq!(reveal.phase(), Phase::Watching);

        assert!(!reveal.observe(true));
        reveal.unmount();
        assert_eq!(watch.releases(), 1);
        assert_eq!(reveal.phase(), Phase::Watching);
    }

    #[test]
    fn test_unmount_after_reveal_does_not_release_again() {
        let (mut reveal, watch) = watching();
        assert!(reveal.observe(true));
        reveal.unmount();
        assert_eq!(watch.releases(), 1);
    }

    #[test]
    fn test_unsupported_platform_reveals_on_mount() {
        let mut reveal = Reveal::<CountingWatch>::new();
        assert_eq!(reveal.mount(None), Phase::Revealed);
        assert!(!reveal.observe(true));
    }

    #[test]
    fn test_intersection_before_mount_releases_new_watch() {
        let mut reveal = Reveal::new();
        assert!(reveal.observe(true));

        let watch = CountingWatch::default();
        assert_eq!(reveal.mount(Some(watch.clone())), Phase::Revealed);
        assert_eq!(watch.releases(), 1);
    }

    #[test]
    fn test_second_mount_keeps_first_watch() {
        let (mut reveal, first) = watching();
        let second = CountingWatch::default();
        assert_eq!(reveal.mount(Some(second.clone())), Phase::Watching);
        assert_eq!(second.releases(), 1);
        assert_eq!(first.releases(), 0);

        reveal.observe(true);
        assert_eq!(first.releases(), 1);
    }

    #[test]
    fn test_intersects_with_margin() {
        let viewport = Viewport {
            top: 0.0,
            height: 900.0,
        };
        let below = Rect {
            top: 960.0,
            bottom: 1200.0,
        };
        assert!(!below.intersects(viewport, 0.0));
        assert!(!below.intersects(viewport, 50.0));
        assert!(below.intersects(viewport, 80.0));

        let above = Rect {
            top: -400.0,
            bottom: -10.0,
        };
        assert!(!above.intersects(viewport, 0.0));
        assert!(above.intersects(viewport, 10.0));

        let inside = Rect {
            top: 100.0,
            bottom: 300.0,
        };
        assert!(inside.intersects(viewport, 0.0));
        assert!(inside.intersects(viewport.scrolled_to(250.0), 0.0));
        assert!(!inside.intersects(viewport.scrolled_to(301.0), 0.0));
    }

    #[test]
    fn test_tween_styles() {
        let tween = Tween::fade_up(30.0).delay(150);
        assert_eq!(
            tween.style(false),
            "opacity: 0; transform: translate(0px, 30px); transition: opacity 500ms ease-out 150ms, transform 500ms ease-out 150ms"
        );
        assert_eq!(
            tween.style(true),
            "opacity: 1; transform: none; transition: opacity 500ms ease-out 150ms, transform 500ms ease-out 150ms"
        );

        assert!(Tween::grow_x().style(false).contains("transform: scaleX(0)"));
        assert!(Tween::zoom_in(0.95).style(false).contains("scale(0.95)"));
        assert!(Tween::drop_in(-100.0)
            .style(false)
            .starts_with("opacity: 1; transform: translate(0px, -100px)"));
    }

    #[test]
    fn test_list_items_stagger() {
        assert_eq!(RevealOptions::list_item(0).tween.delay_ms, 0);
        assert_eq!(RevealOptions::list_item(3).tween.delay_ms, 240);
        assert_eq!(RevealOptions::section(100).root_margin(), "80px");
        assert_eq!(RevealOptions::heading().root_margin(), "50px");
    }

    struct Block {
        rect: Rect,
        reveal: Reveal<CountingWatch>,
        watch: CountingWatch,
        reveals: u32,
    }

    impl Block {
        fn mount(rect: Rect, viewport: Viewport) -> Self {
            let watch = CountingWatch::default();
            let mut reveal = Reveal::new();
            reveal.mount(Some(watch.clone()));
            let mut block = Self {
                rect,
                reveal,
                watch,
                reveals: 0,
            };
            block.scroll(viewport);
            block
        }

        fn scroll(&mut self, viewport: Viewport) {
            let hit = self
                .rect
                .intersects(viewport, RevealOptions::section(0).margin_px as f64);
            if self.reveal.observe(hit) {
                self.reveals += 1;
            }
        }
    }

    #[test]
    fn test_page_scroll_scenario() {
        // hero fits in the first screen, about starts 200px below the fold
        let viewport = Viewport {
            top: 0.0,
            height: 900.0,
        };
        let mut hero = Block::mount(
            Rect {
                top: 120.0,
                bottom: 820.0,
            },
            viewport,
        );
        let mut about = Block::mount(
            Rect {
                top: 1100.0,
                bottom: 1500.0,
            },
            viewport,
        );

        assert!(hero.reveal.is_revealed());
        assert_eq!(about.reveal.phase(), Phase::Watching);
        assert!(!RevealOptions::section(0)
            .tween
            .style(about.reveal.is_revealed())
            .starts_with("opacity: 1"));

        // top of about is 90px below the fold: still hidden
        about.scroll(viewport.scrolled_to(110.0));
        assert!(!about.reveal.is_revealed());

        // within 80px of the viewport bottom
        about.scroll(viewport.scrolled_to(120.0));
        assert!(about.reveal.is_revealed());

        for top in [0.0, 600.0, 0.0, 1400.0, 3000.0] {
            hero.scroll(viewport.scrolled_to(top));
            about.scroll(viewport.scrolled_to(top));
        }
        assert!(hero.reveal.is_revealed());
        assert!(about.reveal.is_revealed());
        assert_eq!(hero.reveals, 1);
        assert_eq!(about.reveals, 1);
        assert_eq!(hero.watch.releases(), 1);
        assert_eq!(about.watch.releases(), 1);
    }
}
