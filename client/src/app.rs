//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::profile::NAME;
use crate::pages::{alert_demo::AlertDemoPage, home::HomePage};
use crate::state::{toast::ToastState, ui::UiState};
use crate::util::theme_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and toast state, restores the stored theme once
/// running in the browser, and keeps it in sync with other tabs.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ui);
    provide_context(toasts);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let theme = theme_storage::read_preference();
        theme_storage::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            let key = ev.key();
            let value = ev.new_value();
            if let Some(theme) = theme_storage::stored_theme_changed(key.as_deref(), value.as_deref()) {
                theme_storage::apply(theme);
                ui.update(|u| u.theme = theme);
            }
        });
        on_cleanup(move || handle.remove());

        theme_storage::watch_system_scheme(move |theme| {
            theme_storage::apply(theme);
            ui.update(|u| u.theme = theme);
        });
        on_cleanup(theme_storage::unwatch_system_scheme);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=format!("{NAME} | Portfolio")/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("alert-demo") view=AlertDemoPage/>
            </Routes>
        </Router>
    }
}
