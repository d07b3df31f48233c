//! Snapshot presentation.
//!
//! Pure functions from the aggregated snapshot to the Telegram message
//! text (parse_mode HTML). Sources render in declared order, currencies
//! in the fixed [`Currency::ALL`] order, and sources that yielded
//! nothing get an explicit "no rates" line so operators can see which
//! ones failed.

use chrono::{DateTime, Local};

use rates_types::{Currency, RateSnapshot};

/// Escapes text that the destination renderer would read as markup.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders the aggregated snapshot as the notification message.
pub fn format_snapshot(snapshot: &RateSnapshot, generated_at: DateTime<Local>) -> String {
    let mut message = String::new();
    message.push_str("<b>💱 Exchange Rates Update</b>\n");
    message.push_str(&format!("📅 {}\n\n", generated_at.format("%Y-%m-%d %H:%M:%S")));

    for (source, quotes) in snapshot.ordered() {
        message.push_str(&format!("<b>📍 {}</b>\n", escape_html(source.as_str())));

        if quotes.is_empty() {
            message.push_str("  ⚠️ No rates available\n");
        } else {
            for currency in Currency::ALL {
                let Some(quote) = quotes.get(&currency) else {
                    continue;
                };
                let unit = match currency.unit_label() {
                    Some(label) => format!(" <i>({label})</i>"),
                    None => String::new(),
                };
                message.push_str(&format!(
                    "  {} → MYR: We Sell <b>RM {:.4}</b> / We Buy <b>RM {:.4}</b>{}\n",
                    currency, quote.sell_rate, quote.buy_rate, unit
                ));
            }
        }
        message.push('\n');
    }

    message.push_str("<i>We Sell = rate for buying foreign currency with MYR</i>");
    message
}

/// The distinct total-failure notification.
pub const FAILURE_MESSAGE: &str =
    "⚠️ Failed to fetch any exchange rates. Please check the logs.";
