//! Leptos Toast
//!
//! A single shared notification element for Leptos pages.
//! An element already in the markup with the toast class is adopted;
//! otherwise one is mounted into `<body>` on first use. Each `show`
//! restarts the hide timer so the newest message gets the full duration.

mod slot;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::mount::mount_to;
use leptos::prelude::*;
use log::warn;
use web_sys::Element;

pub use slot::{LazySurface, TimerSlot};

/// Class toggled on while the toast is visible
pub const SHOW_CLASS: &str = "show";

/// Toast state signals
#[derive(Clone, Copy)]
pub struct ToastSignals {
    pub message: RwSignal<String>,
    pub visible: RwSignal<bool>,
}

pub fn create_toast_signals() -> ToastSignals {
    ToastSignals {
        message: RwSignal::new(String::new()),
        visible: RwSignal::new(false),
    }
}

/// Where messages are written
#[derive(Clone)]
enum Surface {
    /// Markup-provided element, driven directly
    Adopted(Element),
    /// `ToastMessage` component we mounted ourselves
    Mounted(ToastSignals),
}

impl Surface {
    fn show(&self, message: String) {
        match self {
            Surface::Adopted(element) => {
                element.set_text_content(Some(&message));
                if let Err(e) = element.class_list().add_1(SHOW_CLASS) {
                    warn!("could not show toast: {:?}", e);
                }
            }
            Surface::Mounted(signals) => {
                signals.message.set(message);
                signals.visible.set(true);
            }
        }
    }

    fn hide(&self) {
        match self {
            Surface::Adopted(element) => {
                if let Err(e) = element.class_list().remove_1(SHOW_CLASS) {
                    warn!("could not hide toast: {:?}", e);
                }
            }
            Surface::Mounted(signals) => signals.visible.set(false),
        }
    }
}

/// Handle to the page's notification element
#[derive(Clone)]
pub struct Toast {
    class: String,
    duration_ms: u32,
    surface: Rc<LazySurface<Surface>>,
    pending_hide: Rc<TimerSlot<Timeout>>,
}

impl Toast {
    pub fn new(class: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            class: class.into(),
            duration_ms,
            surface: Rc::new(LazySurface::default()),
            pending_hide: Rc::new(TimerSlot::default()),
        }
    }

    /// Set the text, make it visible and (re)start the hide timer
    pub fn show(&self, message: impl Into<String>) {
        let Some(surface) = self.surface.get_or_resolve(|| self.resolve_surface()) else {
            warn!("no document body, toast dropped");
            return;
        };
        surface.show(message.into());

        let timeout = Timeout::new(self.duration_ms, move || surface.hide());
        self.pending_hide.arm(timeout);
    }

    fn resolve_surface(&self) -> Option<Surface> {
        let document = web_sys::window()?.document()?;

        if let Ok(Some(element)) = document.query_selector(&format!(".{}", self.class)) {
            return Some(Surface::Adopted(element));
        }

        let body = document.body()?;
        let class = self.class.clone();
        let signals = create_toast_signals();
        mount_to(body, move || view! { <ToastMessage css_class=class signals=signals /> }).forget();
        Some(Surface::Mounted(signals))
    }
}

/// The notification element itself
#[component]
pub fn ToastMessage(#[prop(into)] css_class: String, signals: ToastSignals) -> impl IntoView {
    let class_name = move || {
        if signals.visible.get() {
            format!("{} {}", css_class, SHOW_CLASS)
        } else {
            css_class.clone()
        }
    };

    view! {
        <div class=class_name role="status" aria-live="polite">
            {move || signals.message.get()}
        </div>
    }
}
