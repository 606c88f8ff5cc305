//! Page footer with the copyright line.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::content::profile::NAME;
use crate::util::clock::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__text">{copyright_line(current_year())}</p>
        </footer>
    }
}

fn copyright_line(year: i32) -> String {
    format!("© {year} {NAME}. All rights reserved.")
}
