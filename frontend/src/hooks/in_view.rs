use js_sys::Array;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Whether an observed entry counts as "in view" for the given threshold.
pub fn meets_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Track whether `target` is visible in the viewport.
///
/// The observer is created once the node is mounted and disconnected when
/// the owning component is disposed.
pub fn use_in_view(target: NodeRef<html::Div>, threshold: f64) -> ReadSignal<bool> {
    let (in_view, set_in_view) = create_signal(false);

    create_effect(move |_| {
        let Some(element) = target.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            if let Some(entry) = entries.iter().last() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                set_in_view.set(meets_threshold(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                ));
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                on_cleanup(move || {
                    observer.disconnect();
                    drop(callback);
                });
            }
            Err(e) => {
                log::error!("Failed to create IntersectionObserver: {:?}", e);
            }
        }
    });

    in_view
}
