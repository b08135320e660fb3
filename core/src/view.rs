//! Plain-text rendering of the medicine table and form modal.

use crate::controller::FormMode;
use crate::types::{Medicine, MedicineId};

pub const EMPTY_TABLE: &str = "No medicines available";

const HEADERS: [&str; 4] = ["Id", "Medicine Name", "Price", "Stock"];

/// One displayed table row. `index` is the 1-based row number, unrelated
/// to the record's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub index: usize,
    pub id: MedicineId,
    pub name: String,
    pub price: String,
    pub stock: String,
}

pub fn rows(medicines: &[Medicine]) -> Vec<TableRow> {
    medicines
        .iter()
        .enumerate()
        .map(|(i, m)| TableRow {
            index: i + 1,
            id: m.id.clone(),
            name: m.name.clone(),
            price: format!("₹{}", m.price),
            stock: m.stock.clone(),
        })
        .collect()
}

/// Render the table with aligned columns, or the empty-table message.
pub fn render_table(medicines: &[Medicine]) -> String {
    let cells: Vec<[String; 4]> = rows(medicines)
        .into_iter()
        .map(|r| [r.index.to_string(), r.name, r.price, r.stock])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_line(&HEADERS.map(String::from), &widths);
    out.push('\n');
    out.push_str(&widths.map(|w| "-".repeat(w)).join("-+-"));
    out.push('\n');
    if cells.is_empty() {
        out.push_str(EMPTY_TABLE);
        out.push('\n');
    }
    for row in &cells {
        out.push_str(&format_line(row, &widths));
        out.push('\n');
    }
    out
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

pub fn modal_title(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Adding => "Add Medicine Details",
        FormMode::Editing(_) => "Edit Medicine Details",
    }
}

pub fn submit_label(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Adding => "Add",
        FormMode::Editing(_) => "Update",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medicine(id: &str, name: &str, price: &str, stock: &str) -> Medicine {
        Medicine {
            id: MedicineId::new(id),
            name: name.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn row_index_is_one_based_and_ignores_id() {
        let rows = rows(&[medicine("90", "Zinc", "8", "3"), medicine("12", "Aspirin", "4", "10")]);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].id, MedicineId::new("90"));
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].name, "Aspirin");
        assert_eq!(rows[1].price, "₹4");
    }

    #[test]
    fn empty_table_shows_placeholder() {
        let text = render_table(&[]);
        assert!(text.starts_with("Id | Medicine Name | Price | Stock"));
        assert!(text.contains(EMPTY_TABLE));
    }

    #[test]
    fn table_lists_rows_in_order() {
        let text = render_table(&[
            medicine("b", "Zinc", "8", "3"),
            medicine("a", "Aspirin", "4", "10"),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("1  | Zinc"));
        assert!(lines[3].starts_with("2  | Aspirin"));
        assert!(lines[3].contains("₹4"));
        assert!(!text.contains(EMPTY_TABLE));
    }

    #[test]
    fn modal_labels_follow_mode() {
        assert_eq!(modal_title(&FormMode::Adding), "Add Medicine Details");
        assert_eq!(submit_label(&FormMode::Adding), "Add");
        let editing = FormMode::Editing(MedicineId::new("1"));
        assert_eq!(modal_title(&editing), "Edit Medicine Details");
        assert_eq!(submit_label(&editing), "Update");
    }
}
