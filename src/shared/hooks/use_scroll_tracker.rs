use dioxus::prelude::*;

use crate::domain::models::ScrollState;

/// Track scrolling and publish the navbar offset and active section.
///
/// In the browser a passive `scroll` listener is attached to `window`; events
/// are coalesced so the viewport is measured at most once per animation
/// frame. The listener is removed when the component unmounts.
pub fn use_scroll_tracker() -> Signal<ScrollState> {
    let state = use_signal(ScrollState::default);

    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(move || wasm::ScrollListener::attach(state));
        use_drop(move || listener.detach());
    }

    state
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::AddEventListenerOptions;

    use crate::domain::models::ScrollState;
    use crate::shared::logging::{log_active_section_change, log_dom_error, log_scroll_listener, LogOperation};
    use crate::shared::utils::dom::measure_viewport;
    use crate::shared::utils::FrameSlot;

    pub struct ScrollListener {
        on_scroll: Closure<dyn FnMut()>,
        on_frame: Rc<Closure<dyn FnMut()>>,
        slot: Rc<FrameSlot>,
    }

    fn apply_sample(mut state: Signal<ScrollState>) {
        let sample = match measure_viewport() {
            Ok(sample) => sample,
            Err(e) => {
                log_dom_error(LogOperation::ScrollTrack, &e.to_string());
                return;
            }
        };

        let previous = *state.peek();
        if let Some(next) = previous.after_scroll(&sample) {
            if next.active_section != previous.active_section {
                log_active_section_change(previous.active_section, next.active_section, sample.scroll_y);
            }
            state.set(next);
        }
    }

    fn request_frame(slot: &FrameSlot, on_frame: &Closure<dyn FnMut()>) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = slot.request_with(|| window.request_animation_frame(on_frame.as_ref().unchecked_ref())) {
            log_dom_error(LogOperation::ScrollTrack, &format!("{:?}", e));
        }
    }

    impl ScrollListener {
        pub fn attach(state: Signal<ScrollState>) -> Rc<Self> {
            let slot = Rc::new(FrameSlot::new());

            let frame_slot = slot.clone();
            let on_frame = Rc::new(Closure::wrap(Box::new(move || {
                frame_slot.complete();
                apply_sample(state);
            }) as Box<dyn FnMut()>));

            let scroll_slot = slot.clone();
            let scroll_frame = on_frame.clone();
            let on_scroll = Closure::wrap(Box::new(move || {
                request_frame(&scroll_slot, &scroll_frame);
            }) as Box<dyn FnMut()>);

            let listener = Rc::new(Self {
                on_scroll,
                on_frame,
                slot,
            });

            if let Some(window) = web_sys::window() {
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                match window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    listener.on_scroll.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(()) => log_scroll_listener(true),
                    Err(e) => log_dom_error(LogOperation::ScrollTrack, &format!("{:?}", e)),
                }
            }

            // Initial measurement, for reloads that restore a scrolled position
            request_frame(&listener.slot, &listener.on_frame);

            listener
        }

        pub fn detach(&self) {
            let Some(window) = web_sys::window() else { return };

            if let Some(id) = self.slot.cancel() {
                let _ = window.cancel_animation_frame(id);
            }
            if window
                .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref())
                .is_ok()
            {
                log_scroll_listener(false);
            }
        }
    }
}
