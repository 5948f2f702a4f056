//! Alert text formatting.

use chrono::{DateTime, Utc};

/// Timestamp format used in alert bodies.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Fields shared by both alert kinds.
#[derive(Debug, Clone)]
pub struct AlertContext<'a> {
    /// Display name of the watched service.
    pub service: &'a str,
    /// Status page link included in the alert.
    pub status_url: &'a str,
    pub at: DateTime<Utc>,
}

/// Alert sent on the operational → down transition.
pub fn down_alert(ctx: &AlertContext<'_>, phrase: &str) -> String {
    format!(
        "🔴 *{} is DOWN!*\n*Status:* {}\n*Time:* {}\n*Check:* {}",
        ctx.service,
        title_case(phrase),
        ctx.at.format(TIME_FORMAT),
        ctx.status_url
    )
}

/// Alert sent on the down → operational transition.
pub fn recovery_alert(ctx: &AlertContext<'_>) -> String {
    format!(
        "✅ *{} has RECOVERED!*\n*Status:* Operational\n*Time:* {}\n*Check:* {}",
        ctx.service,
        ctx.at.format(TIME_FORMAT),
        ctx.status_url
    )
}

/// Upper-case the first letter of each word, lower-case the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
