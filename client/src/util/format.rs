//! Display formatting for listing cards and the detail page.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder shown when a listing has no location.
pub const NO_LOCATION: &str = "—";

/// `₹500/day`, or `₹499.50/day` for fractional prices.
pub fn price_per_day(price: f64) -> String {
    format!("₹{}/day", amount(price))
}

/// `₹500 / day` variant used on the detail page.
pub fn price_per_day_spaced(price: f64) -> String {
    format!("₹{} / day", amount(price))
}

pub fn location_label(location: Option<&str>) -> &str {
    location.map(str::trim).filter(|l| !l.is_empty()).unwrap_or(NO_LOCATION)
}

fn amount(price: f64) -> String {
    if price.fract() == 0.0 && price.is_finite() {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}
