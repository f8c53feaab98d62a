use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Highlight,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Highlight => style(text).yellow().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn format_money(value: f64, currency: &str) -> String {
    format!("{value:.2} {currency}")
}

/// Right-aligned amount with its currency.
pub fn money_cell(value: f64, currency: &str) -> Cell {
    Cell::new(format_money(value, currency)).set_alignment(CellAlignment::Right)
}

pub fn percent_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}%")).set_alignment(CellAlignment::Right)
}

/// Bold green cell used for totals rows.
pub fn total_cell(text: String) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
        .set_alignment(CellAlignment::Right)
}

/// Interest rates at or above `warn_at` are shown in red.
pub fn rate_cell(rate: f64, warn_at: f64) -> Cell {
    let cell = Cell::new(format!("{rate:.2}%")).set_alignment(CellAlignment::Right);
    if rate >= warn_at {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5, "USD"), "1234.50 USD");
        assert_eq!(format_money(0.0, "EUR"), "0.00 EUR");
    }

    #[test]
    fn test_cells_render_in_table() {
        let mut table = new_styled_table();
        table.set_header(vec![header_cell("Rate"), header_cell("Amount")]);
        table.add_row(vec![rate_cell(19.99, 10.0), money_cell(42.0, "USD")]);
        table.add_row(vec![percent_cell(12.5), total_cell("100.00 USD".to_string())]);

        let rendered = table.to_string();
        assert!(rendered.contains("19.99%"));
        assert!(rendered.contains("42.00 USD"));
        assert!(rendered.contains("12.50%"));
        assert!(rendered.contains("100.00 USD"));
    }
}
