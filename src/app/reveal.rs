use std::sync::Arc;

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use wasm_bindgen::JsValue;

use crate::reveal::{Phase, Rect, Reveal, RevealOptions, Tween, Viewport, ViewportWatch};

/// Stops the intersection observer backing one block.
#[derive(Clone)]
struct ObserverHandle(Arc<dyn Fn() + Send + Sync>);

impl ViewportWatch for ObserverHandle {
    fn release(&mut self) {
        (self.0)();
    }
}

fn intersection_observer_supported() -> bool {
    js_sys::Reflect::has(&window(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Whether the element is already on screen, grown by `margin` pixels.
fn in_view_at_mount(el: &web_sys::Element, margin: f64) -> bool {
    let height = match window().inner_height().ok().and_then(|h| h.as_f64()) {
        Some(h) => h,
        None => return false,
    };
    let bounds = el.get_bounding_client_rect();
    let rect = Rect {
        top: bounds.top(),
        bottom: bounds.bottom(),
    };
    rect.intersects(Viewport { top: 0.0, height }, margin)
}

/// Flips to true the first time `target` scrolls into view, then never
/// again. The observer is stopped as soon as it fires, and on cleanup.
pub fn use_reveal(target: NodeRef<html::Div>, options: RevealOptions) -> Signal<bool> {
    let machine = StoredValue::new(Reveal::<ObserverHandle>::new());
    let (revealed, set_revealed) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let hit = entries.iter().any(|entry| entry.is_intersecting());
            if machine.try_update_value(|m| m.observe(hit)) == Some(true) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(options.root_margin()),
    );

    Effect::new(move |_| {
        let watch = if intersection_observer_supported() {
            Some(ObserverHandle(Arc::new(stop.clone())))
        } else {
            log::debug!("IntersectionObserver unavailable, revealing immediately");
            None
        };
        let mut phase = machine.try_update_value(|m| m.mount(watch));
        if phase == Some(Phase::Watching) {
            let visible = target
                .get_untracked()
                .is_some_and(|el| in_view_at_mount(&el, options.margin_px as f64));
            if visible && machine.try_update_value(|m| m.observe(true)) == Some(true) {
                phase = Some(Phase::Revealed);
            }
        }
        if phase == Some(Phase::Revealed) {
            set_revealed.set(true);
        }
    });

    on_cleanup(move || {
        machine.try_update_value(|m| m.unmount());
    });

    revealed.into()
}

/// Flips to true one frame after mount, so the hidden pose is painted first.
pub fn use_mount_reveal() -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || set_revealed.set(true));
    });
    revealed.into()
}

#[component]
pub fn FadeInSection(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let options = RevealOptions::section(delay_ms);
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, options);
    view! {
        <div
            node_ref=node
            class=class
            data-reveal=""
            style=move || options.tween.style(revealed.get())
        >
            {children()}
        </div>
    }
}

/// A list entry whose content slides in on its own, staggered by `index`.
#[component]
pub fn RevealItem(children: Children, index: usize) -> impl IntoView {
    let options = RevealOptions::list_item(index);
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, options);
    view! {
        <li>
            <div
                node_ref=node
                class="flex gap-2"
                data-reveal=""
                style=move || options.tween.style(revealed.get())
            >
                {children()}
            </div>
        </li>
    }
}

/// Animates on mount instead of on scroll, for above-the-fold content.
#[component]
pub fn MountReveal(
    children: Children,
    tween: Tween,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let revealed = use_mount_reveal();
    view! {
        <div class=class data-reveal="" style=move || tween.style(revealed.get())>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeading(children: Children) -> impl IntoView {
    let options = RevealOptions::heading();
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, options);
    view! {
        <div node_ref=node data-reveal="" style=move || options.tween.style(revealed.get())>
            <h2 class="font-heading text-4xl sm:text-5xl font-bold text-white mb-2">
                {children()}
            </h2>
        </div>
    }
}

/// Accent bar under a section heading, grows from the left.
#[component]
pub fn SectionSubline() -> impl IntoView {
    let options = RevealOptions::accent();
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, options);
    view! {
        <div
            node_ref=node
            class="h-1 w-16 bg-accent rounded-full mb-10 origin-left"
            data-reveal=""
            style=move || options.tween.style(revealed.get())
        ></div>
    }
}
