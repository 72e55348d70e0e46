use std::io::{self, Write};

use colored::{Color, Colorize};

use crate::models::DisplayOrder;
use crate::services::state::BoardState;
use crate::utils::format_decimal;

const CARD_WIDTH: usize = 46;

/// Lifecycle tags outside the known set get this neutral orange.
const NEUTRAL: Color = Color::TrueColor {
    r: 255,
    g: 140,
    b: 0,
};

/// Maps a lifecycle tag to its button color, case-insensitively.
pub fn status_color(status: &str) -> Color {
    match status.to_lowercase().as_str() {
        "completed" => Color::Green,
        "in_process" => Color::Yellow,
        "ready_to_pickup" => Color::Red,
        _ => NEUTRAL,
    }
}

/// Button label: underscores to spaces, upper-cased. Total for any tag.
pub fn status_label(status: &str) -> String {
    status.replace('_', " ").to_uppercase()
}

/// One card, line by line. Layout is deterministic given the order; color is
/// only applied to whole, already-padded lines so column widths stay honest.
pub fn render_card(order: &DisplayOrder) -> Vec<String> {
    let badge: String = order.table_no.chars().take(2).collect();
    let mut lines = Vec::new();

    lines.push(format!(
        "{:<26}{:>20}",
        format!("[{}] Table No. {}", badge, order.table_no),
        format!("Time: {}", order.time),
    ));
    lines.push(format!(
        "{:<26}{:>20}",
        format!("     {}", order.order_type),
        format!("Estimate: {}", order.estimate),
    ));
    lines.push(String::new());

    lines.push(format!("{:<4} {:<30} {:>10}", "Qty", "Items", "Price"));
    for item in &order.items {
        lines.push(format!(
            "{:<4} {:<30} {:>10}",
            item.quantity,
            item.name,
            format!("${}", format_decimal(item.price)),
        ));
    }

    lines.push("-".repeat(CARD_WIDTH));
    lines.push(format!(
        "{:<35} {:>10}",
        "SubTotal",
        format!("${}", format_decimal(order.total_price)),
    ));
    lines.push(format!(
        "{:<35} {:>10}",
        "GST",
        format!("${}", format_decimal(order.gst)),
    ));

    let button = format!("{:^width$}", status_label(&order.status), width = CARD_WIDTH);
    lines.push(
        button
            .color(status_color(&order.status))
            .bold()
            .to_string(),
    );

    lines
}

/// The full screen as a string: header, then exactly one of the three
/// screens — loading, error, or the card column.
pub fn render_screen(state: &BoardState) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n",
        "KOT Orders".bold(),
        state.selected_date,
    ));
    out.push_str("[r] refresh   [d YYYY-MM-DD] date   [q] quit\n\n");

    if state.loading {
        out.push_str(&format!("{}\n", "Loading orders...".color(NEUTRAL)));
    } else if let Some(error) = &state.error {
        out.push_str(&format!("{}\n", format!("Error: {}", error).red()));
        out.push_str("Press r to retry.\n");
    } else {
        for order in &state.orders {
            for line in render_card(order) {
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out
}

/// Repaints the terminal in place: cursor home, clear, render, flush.
pub fn redraw_screen(state: &BoardState) {
    print!("\x1B[H\x1B[0J{}", render_screen(state));
    let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::orders::transform_order;
    use crate::services::state::{BoardEvent, BoardState};
    use chrono::NaiveDate;
    use serde_json::json;

    fn sample_order() -> DisplayOrder {
        let raw = serde_json::from_value(json!({
            "order_number": "12",
            "mode": null,
            "order_date": "2024-01-01T10:00:00Z",
            "status": "in_process",
            "items": [{ "quantity": 2, "name": "Tea", "price": "1.5" }],
            "total_price": "3.00",
            "gst": "0.15",
            "customers": []
        }))
        .unwrap();
        transform_order(raw)
    }

    #[test]
    fn status_color_is_case_insensitive() {
        colored::control::set_override(false);
        assert_eq!(status_color("COMPLETED"), Color::Green);
        assert_eq!(status_color("completed"), Color::Green);
        assert_eq!(status_color("Completed"), Color::Green);
        assert_eq!(status_color("In_Process"), Color::Yellow);
        assert_eq!(status_color("READY_TO_PICKUP"), Color::Red);
        assert_eq!(status_color("cancelled"), NEUTRAL);
    }

    #[test]
    fn status_label_is_total() {
        assert_eq!(status_label("ready_to_pickup"), "READY TO PICKUP");
        assert_eq!(status_label("in_process"), "IN PROCESS");
        assert_eq!(status_label("completed"), "COMPLETED");
        assert_eq!(status_label(""), "");
        assert_eq!(status_label("odd__tag"), "ODD  TAG");
    }

    #[test]
    fn card_renders_sample_order() {
        colored::control::set_override(false);
        let order = sample_order();
        let lines = render_card(&order);
        let card = lines.join("\n");

        assert!(card.contains("[12] Table No. 12"));
        assert!(card.contains("Dine-in"));
        assert!(card.contains("Time: 10:00 AM"));
        assert!(card.contains("Estimate: 15 mins"));

        let item_row = lines.iter().find(|l| l.contains("Tea")).unwrap();
        assert!(item_row.starts_with("2 "));
        assert!(item_row.ends_with("$1.50"));

        let subtotal = lines.iter().find(|l| l.contains("SubTotal")).unwrap();
        assert!(subtotal.ends_with("$3.00"));
        let gst = lines.iter().find(|l| l.contains("GST")).unwrap();
        assert!(gst.ends_with("$0.15"));

        assert_eq!(lines.last().unwrap().trim(), "IN PROCESS");
        assert_eq!(status_color(&order.status), Color::Yellow);
    }

    #[test]
    fn badge_takes_first_two_characters() {
        colored::control::set_override(false);
        let mut order = sample_order();
        order.table_no = "A113".to_string();
        assert!(render_card(&order)[0].contains("[A1] Table No. A113"));

        // Single-character and multibyte order numbers must not panic.
        order.table_no = "7".to_string();
        assert!(render_card(&order)[0].contains("[7] Table No. 7"));
        order.table_no = "Ā113".to_string();
        assert!(render_card(&order)[0].contains("[Ā1]"));
    }

    #[test]
    fn screens_are_mutually_exclusive() {
        colored::control::set_override(false);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut state = BoardState::new(date);

        let seq = state.begin_fetch();
        let screen = render_screen(&state);
        assert!(screen.contains("Loading orders..."));
        assert!(!screen.contains("Error:"));

        state.apply(BoardEvent::FetchFailed {
            seq,
            message: "500: boom".to_string(),
        });
        let screen = render_screen(&state);
        assert!(screen.contains("Error: 500: boom"));
        assert!(screen.contains("Press r to retry."));
        assert!(!screen.contains("Loading"));

        let seq = state.begin_fetch();
        state.apply(BoardEvent::FetchSucceeded {
            seq,
            orders: vec![sample_order()],
        });
        let screen = render_screen(&state);
        assert!(screen.contains("Table No. 12"));
        assert!(!screen.contains("Error:"));
        assert!(!screen.contains("Loading"));
    }
}
