//! Number that counts up from zero to its target after mount.
//!
//! The tick loop runs only in the browser. Server render shows the starting
//! value so hydration begins from the same text.

use leptos::prelude::*;

use crate::util::counter::{DEFAULT_COUNTER_DURATION_MS, group_thousands};

#[component]
pub fn AnimatedCounter(
    value: u64,
    #[prop(default = DEFAULT_COUNTER_DURATION_MS)] duration_ms: f64,
    #[prop(optional)] prefix: &'static str,
    #[prop(optional)] suffix: &'static str,
) -> impl IntoView {
    let display = RwSignal::new(0_u64);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::counter::{COUNTER_TICK_MS, CounterTick, counter_tick};
        use crate::util::mount_guard::MountGuard;

        let guard = MountGuard::new();
        let timer_guard = guard.clone();
        leptos::task::spawn_local(async move {
            let started = js_sys::Date::now();
            loop {
                match counter_tick(&timer_guard, value, js_sys::Date::now() - started, duration_ms) {
                    CounterTick::Cancelled => break,
                    CounterTick::Finished(shown) => {
                        display.set(shown);
                        break;
                    }
                    CounterTick::Continue(shown) => display.set(shown),
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(COUNTER_TICK_MS.into())).await;
            }
        });
        on_cleanup(move || guard.disarm());
    }

    view! {
        <span class="counter" data-target=value.to_string() data-duration-ms=duration_ms.to_string()>{prefix} {move || group_thousands(display.get())} {suffix}</span>
    }
}
