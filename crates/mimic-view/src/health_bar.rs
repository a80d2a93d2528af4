use crate::element::Element;

/// Formats a number the way a browser stringifies it in a style template.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // drops the sign of -0
        "0".to_string()
    } else if value.abs() < 1e-6 || value.abs() >= 1e21 {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

/// `1e-7`, `1.5e+21`: shortest digits with an explicitly signed exponent.
fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Percentage bar. Values outside [0, 100] are rendered as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBar {
    pub percentage: f64,
}

impl HealthBar {
    pub fn new(percentage: f64) -> Self {
        Self { percentage }
    }

    pub fn width(&self) -> String {
        format!("{}%", format_number(self.percentage))
    }

    pub fn render(&self) -> Element {
        Element::new("div")
            .class("health-bar-container")
            .child(
                Element::new("div")
                    .class("health-bar")
                    .style("width", self.width()),
            )
    }
}
