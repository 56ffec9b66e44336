//! Schedule-pickup modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! A valid submit flips the form to `Submitted` and shows a confirmation
//! panel. After `PICKUP_CONFIRMATION_DELAY_MS` the form resets and the modal
//! asks its owner to close. The pending close is tied to this component's
//! lifetime through a `MountGuard`: closing early (button, backdrop, Escape)
//! unmounts the modal, disarms the guard, and the delayed action is dropped.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::login_modal::{error_line, input_class};
use crate::state::forms::{PickupField, PickupFormState, TIME_SLOTS};
use crate::util::validation::{FIELD_DATE, FIELD_ITEMS, FIELD_LOCATION, FIELD_TIME};

#[component]
pub fn PickupModal(on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(PickupFormState::default());

    #[cfg(feature = "hydrate")]
    let guard = {
        let guard = crate::util::mount_guard::MountGuard::new();
        let teardown = guard.clone();
        on_cleanup(move || teardown.disarm());
        guard
    };

    let on_backdrop = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(PickupFormState::submit).unwrap_or_default() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::state::forms::PICKUP_CONFIRMATION_DELAY_MS;

            log::info!("pickup: scheduled, closing in {PICKUP_CONFIRMATION_DELAY_MS} ms");
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(PICKUP_CONFIRMATION_DELAY_MS.into())).await;
                if form.try_update(|f| f.confirmation_elapsed(&guard)).unwrap_or_default() {
                    on_close.run(());
                }
            });
        }
    });

    let submitted = Memo::new(move |_| form.with(PickupFormState::is_submitted));
    let has_error = move |field: &'static str| form.with(|f| f.errors.has(field));
    let message = move |field: &'static str| form.with(|f| f.errors.message(field));
    let on_field = move |field: PickupField| move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let success = || {
        view! {
            <div class="dialog__success">
                <div class="dialog__success-icon">"✔"</div>
                <h3>"Pickup Scheduled!"</h3>
                <p>"Your pickup has been confirmed. You'll receive a confirmation email shortly."</p>
            </div>
        }
    };

    let form_view = move || {
        view! {
            <form class="dialog__form" on:submit=move |ev| on_submit.run(ev) novalidate=true>
                <div class="field">
                    <label class="field__label">"📅 Preferred Date"</label>
                    <input
                        type="date"
                        class=move || input_class(has_error(FIELD_DATE))
                        prop:value=move || form.with(|f| f.form.date.clone())
                        on:input=on_field(PickupField::Date)
                    />
                    {move || error_line(message(FIELD_DATE))}
                </div>

                <div class="field">
                    <label class="field__label">"Preferred Time"</label>
                    <select
                        class=move || input_class(has_error(FIELD_TIME))
                        prop:value=move || form.with(|f| f.form.time_slot.clone())
                        on:change=on_field(PickupField::TimeSlot)
                    >
                        <option value="">"Select time slot"</option>
                        {TIME_SLOTS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                    {move || error_line(message(FIELD_TIME))}
                </div>

                <div class="field">
                    <label class="field__label">"📍 Location"</label>
                    <input
                        type="text"
                        class=move || input_class(has_error(FIELD_LOCATION))
                        placeholder="Enter your address"
                        prop:value=move || form.with(|f| f.form.location.clone())
                        on:input=on_field(PickupField::Location)
                    />
                    {move || error_line(message(FIELD_LOCATION))}
                </div>

                <div class="field">
                    <label class="field__label">"📦 Items to Recycle"</label>
                    <textarea
                        rows="3"
                        class=move || input_class(has_error(FIELD_ITEMS))
                        placeholder="e.g., Old laptop, mobile phones, chargers..."
                        prop:value=move || form.with(|f| f.form.items.clone())
                        on:input=on_field(PickupField::Items)
                    ></textarea>
                    {move || error_line(message(FIELD_ITEMS))}
                </div>

                <div class="field">
                    <label class="field__label">"Additional Notes"</label>
                    <textarea
                        rows="2"
                        class=input_class(false)
                        placeholder="Any special instructions..."
                        prop:value=move || form.with(|f| f.form.notes.clone())
                        on:input=on_field(PickupField::Notes)
                    ></textarea>
                </div>

                <div class="dialog__actions">
                    <button type="button" class="btn btn--outline" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Schedule Pickup"
                    </button>
                </div>
            </form>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--pickup"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <div>
                        <h2>"Schedule Pickup"</h2>
                        <p class="dialog__subtitle">"Book a free e-waste collection"</p>
                    </div>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </div>
                {move || if submitted.get() { success().into_any() } else { form_view().into_any() }}
            </div>
        </div>
    }
}
