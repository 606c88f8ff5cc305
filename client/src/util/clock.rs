//! Wall-clock helpers for rendered copy.

/// Current calendar year, for the footer copyright line.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        time::OffsetDateTime::now_utc().year()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        FALLBACK_YEAR
    }
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
const FALLBACK_YEAR: i32 = 2025;
