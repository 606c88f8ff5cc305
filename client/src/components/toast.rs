//! Auto-dismissing toast and the page-level toast host.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Toast` renders one notification and drives its `NotificationTimer` from a
//! hydrate-only sleep loop. `ToastHost` mounts whatever `ToastState` currently
//! holds and clears the slot when the toast closes.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::notification::{DEFAULT_TOAST_DURATION_MS, NotificationTimer, NotificationVariant};
use crate::state::toast::ToastState;

/// Fixed-position toast with a countdown progress bar.
///
/// `on_close` runs exactly once, whether the countdown expires or the user
/// clicks the close button first. A zero `duration_ms` keeps the toast open
/// until dismissed.
#[component]
pub fn Toast(
    #[prop(optional)] variant: NotificationVariant,
    #[prop(default = None, into)] title: Option<String>,
    #[prop(into)] message: String,
    #[prop(default = DEFAULT_TOAST_DURATION_MS)] duration_ms: u32,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let timer = RwSignal::new(NotificationTimer::new(duration_ms));

    let close = Callback::new(move |()| {
        let mut first_close = false;
        timer.update(|t| first_close = t.dismiss());
        if first_close {
            if let Some(cb) = on_close {
                cb.run(());
            }
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::state::notification::{PROGRESS_TICK_MS, TimerTick};

        if timer.get_untracked().auto_dismisses() {
            let alive = Arc::new(AtomicBool::new(true));
            let alive_task = alive.clone();
            let started_ms = js_sys::Date::now();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(PROGRESS_TICK_MS))).await;
                    if !alive_task.load(Ordering::Relaxed) {
                        break;
                    }
                    let mut tick = TimerTick::Running;
                    timer.update(|t| tick = t.advance(js_sys::Date::now() - started_ms));
                    if tick == TimerTick::Expired {
                        close.run(());
                        break;
                    }
                    if !timer.get_untracked().is_visible() {
                        break;
                    }
                }
            });
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }
    }

    view! {
        <Show when=move || timer.with(NotificationTimer::is_visible)>
            <div class=toast_class(variant) role="alert">
                <span class="toast__icon" aria-hidden="true">{variant.icon()}</span>
                <div class="toast__content">
                    {title.clone().map(|t| view! { <h3 class="toast__title">{t}</h3> })}
                    <p class="toast__message">{message.clone()}</p>
                </div>
                <button class="toast__close" aria-label="Close" on:click=move |_| close.run(())>
                    "✕"
                </button>
                <Show when=move || timer.with(NotificationTimer::auto_dismisses)>
                    <div class="toast__progress">
                        <div
                            class="toast__progress-bar"
                            style=move || progress_style(timer.with(NotificationTimer::remaining_fraction))
                        ></div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

/// Renders the toast currently held in `ToastState`, if any.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let current = Memo::new(move |_| toasts.with(|s| s.current().cloned()));

    move || {
        current.get().map(|n| {
            let id = n.id;
            let on_close = Callback::new(move |()| {
                toasts.update(|s| {
                    s.dismiss(id);
                });
            });
            view! {
                <Toast
                    variant=n.variant
                    title=n.title
                    message=n.message
                    duration_ms=n.duration_ms
                    on_close=on_close
                />
            }
        })
    }
}

fn toast_class(variant: NotificationVariant) -> String {
    format!("toast toast--{}", variant.modifier())
}

fn progress_style(fraction: f64) -> String {
    format!("width: {:.1}%", fraction.clamp(0.0, 1.0) * 100.0)
}
