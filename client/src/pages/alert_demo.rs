//! Showcase page for alerts, toasts and banners in every variant.

#[cfg(test)]
#[path = "alert_demo_test.rs"]
mod alert_demo_test;

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::components::notification_banner::{BannerPosition, NotificationBanner};
use crate::components::toast::ToastHost;
use crate::state::notification::{DEFAULT_TOAST_DURATION_MS, NotificationVariant};
use crate::state::toast::ToastState;

#[component]
pub fn AlertDemoPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let banner = RwSignal::new(None::<NotificationVariant>);
    let success_alert_open = RwSignal::new(true);

    let show_toast = move |variant: NotificationVariant| {
        toasts.update(|t| {
            t.show(variant, Some(toast_title(variant)), toast_message(variant));
        });
    };

    view! {
        <div class="alert-demo">
            <h1 class="alert-demo__title">"Alert Components Demo"</h1>

            <section class="alert-demo__section">
                <h2>"Alert Components"</h2>
                <Alert variant=NotificationVariant::Info title="Information">
                    "This is an informational alert. It provides general information to the user."
                </Alert>
                <Show when=move || success_alert_open.get()>
                    <Alert
                        variant=NotificationVariant::Success
                        title="Success"
                        on_close=Callback::new(move |()| success_alert_open.set(false))
                    >
                        "Operation completed successfully! Your changes have been saved."
                    </Alert>
                </Show>
                <Alert variant=NotificationVariant::Warning title="Warning">
                    "Please be careful. This action cannot be undone once completed."
                </Alert>
                <Alert variant=NotificationVariant::Error title="Error">
                    "An error occurred while processing your request. Please try again."
                </Alert>
            </section>

            <section class="alert-demo__section">
                <h2>"Toast Notifications"</h2>
                <div class="alert-demo__buttons">
                    {NotificationVariant::ALL
                        .iter()
                        .map(|&variant| {
                            view! {
                                <button class=demo_button_class(variant) on:click=move |_| show_toast(variant)>
                                    {format!("Show {} Toast", variant.label())}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="alert-demo__section">
                <h2>"Notification Banners"</h2>
                <div class="alert-demo__buttons">
                    {NotificationVariant::ALL
                        .iter()
                        .map(|&variant| {
                            view! {
                                <button class=demo_button_class(variant) on:click=move |_| banner.set(Some(variant))>
                                    {format!("Show {} Banner", variant.label())}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            {move || {
                banner
                    .get()
                    .map(|variant| {
                        view! {
                            <NotificationBanner
                                variant=variant
                                position=BannerPosition::Bottom
                                on_close=Callback::new(move |()| banner.set(None))
                            >
                                {banner_message(variant)}
                            </NotificationBanner>
                        }
                    })
            }}

            <ToastHost/>
        </div>
    }
}

fn toast_title(variant: NotificationVariant) -> String {
    format!("{} Toast", variant.label())
}

fn toast_message(variant: NotificationVariant) -> String {
    format!(
        "This is a {} toast notification that automatically disappears after {} seconds.",
        variant.modifier(),
        DEFAULT_TOAST_DURATION_MS / 1_000
    )
}

fn banner_message(variant: NotificationVariant) -> String {
    format!(
        "This is a {} notification banner that appears at the bottom of the screen.",
        variant.modifier()
    )
}

fn demo_button_class(variant: NotificationVariant) -> String {
    format!("btn btn--{}", variant.modifier())
}
