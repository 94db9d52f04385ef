use leptos::ev;
use leptos::portal::Portal;
use leptos::prelude::*;

/// Overlay rendered through a portal into an explicit mount element.
///
/// Escape or a backdrop click invokes `on_close` at most once per open
/// cycle; background scrolling is suppressed while open and restored on
/// unmount, along with the window keydown listener.
#[component]
pub fn Modal(
    mount: web_sys::Element,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let closed = StoredValue::new(false);
    let request_close = move || {
        if !closed.get_value() {
            closed.set_value(true);
            on_close.run(());
        }
    };

    let escape = StoredValue::new_local(Some(window_event_listener(
        ev::keydown,
        move |ev| {
            if ev.key() == "Escape" {
                request_close();
            }
        },
    )));
    on_cleanup(move || {
        if let Some(Some(handle)) = escape.try_update_value(Option::take) {
            handle.remove();
        }
    });

    if let Some(body) = document().body() {
        let previous = body.style().get_property_value("overflow").unwrap_or_default();
        let _ = body.style().set_property("overflow", "hidden");
        on_cleanup(move || {
            if let Some(body) = document().body() {
                let _ = body.style().set_property("overflow", &previous);
            }
        });
    }

    view! {
        <Portal mount=mount>
            <div class="modal-backdrop" on:click=move |_| request_close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Portal>
    }
}
