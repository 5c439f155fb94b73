use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

fn request_frame<F: FnOnce() + 'static>(step: F) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let step = Closure::once_into_js(step);
    if let Err(err) = window.request_animation_frame(step.unchecked_ref()) {
        warn!("requestAnimationFrame failed: {:?}", err);
    }
}

/// Emits one item of `frames` per animation frame, then `on_done`. There is
/// no cancel handle; callbacks into an unmounted component are ignored.
pub fn drive_frames<I>(mut frames: I, on_frame: Callback<I::Item>, on_done: Callback<()>)
where
    I: Iterator + 'static,
    I::Item: 'static,
{
    request_frame(move || match frames.next() {
        Some(item) => {
            on_frame.emit(item);
            drive_frames(frames, on_frame, on_done);
        }
        None => on_done.emit(()),
    });
}
