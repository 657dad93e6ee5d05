//! Modal Frame Component
//!
//! Overlay + dialog box shared by the add and edit modals.

use leptos::ev;
use leptos::prelude::*;

/// Keys that dismiss an open modal
fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Closes on overlay click, the × button, or Escape anywhere in the window.
#[component]
pub fn ModalFrame(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    // Window-level so Escape works before anything in the dialog has focus
    let handle = window_event_listener(ev::keydown, move |ev| {
        if is_open.get_untracked() && is_close_key(&ev.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{title.clone()}</h2>
                        <button class="modal-close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes() {
        assert!(is_close_key("Escape"));
        assert!(is_close_key("Esc"));
    }

    #[test]
    fn test_other_keys_do_not_close() {
        for key in ["Enter", "e", " ", "Tab"] {
            assert!(!is_close_key(key), "{:?} closed the modal", key);
        }
    }
}
