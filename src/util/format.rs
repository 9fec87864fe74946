//! Display formatting shared by cart and page components.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a unit or line price as a dollar amount.
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

/// Human label for a delivery cadence in weeks.
pub fn frequency_label(weeks: u32) -> String {
    if weeks == 1 {
        "Every week".to_owned()
    } else {
        format!("Every {weeks} weeks")
    }
}
