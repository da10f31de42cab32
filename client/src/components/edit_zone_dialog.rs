//! Modal dialog for editing an existing zone.

use graph::model::Zone;
use leptos::prelude::*;

/// Edit-zone dialog. Position and size are gesture-controlled on the
/// canvas; only the name and color are edited here.
#[component]
pub fn EditZoneDialog(
    zone: Zone,
    on_update: Callback<Zone>,
    on_close: Callback<()>,
) -> impl IntoView {
    let original = StoredValue::new(zone.clone());
    let name = RwSignal::new(zone.name);
    let color = RwSignal::new(zone.color);

    let submit = Callback::new(move |()| {
        let label = name.get();
        if label.trim().is_empty() {
            return;
        }
        let mut updated = original.get_value();
        updated.name = label.trim().to_owned();
        updated.color = color.get();
        on_update.run(updated);
        on_close.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Zone"</h2>

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
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
