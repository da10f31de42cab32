//! Modal dialog for creating a zone.

use graph::model::{Point, Size, Zone};
use leptos::prelude::*;

/// Create-zone dialog. New zones get a fixed starting rectangle and are
/// dragged and resized into place on the canvas.
#[component]
pub fn AddZoneDialog(on_add: Callback<Zone>, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let color = RwSignal::new("#e0e7ff".to_owned());

    let submit = Callback::new(move |()| {
        let label = name.get();
        if label.trim().is_empty() {
            return;
        }
        let zone = Zone {
            id: uuid::Uuid::new_v4().to_string(),
            name: label.trim().to_owned(),
            position: Point { x: 100.0, y: 100.0 },
            size: Size { width: 400.0, height: 300.0 },
            color: color.get(),
        };
        on_add.run(zone);
        on_close.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Zone"</h2>

                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <label class="dialog__label">
                    "Color"
                    <input
                        class="dialog__input dialog__input--color"
                        type="color"
                        prop:value=move || color.get()
                        on:input=move |ev| color.set(event_target_value(&ev))
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
