//! Plain-text table rendering for the expense views.

use std::collections::BTreeMap;

use crate::currency::Amount;
use crate::ledger::{Category, ExpenseRecord};

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Alignment {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    alignment: Alignment,
}

const EXPENSE_COLUMNS: [Column; 5] = [
    Column {
        header: "#",
        alignment: Alignment::Right,
    },
    Column {
        header: "Description",
        alignment: Alignment::Left,
    },
    Column {
        header: "Amount",
        alignment: Alignment::Right,
    },
    Column {
        header: "Date",
        alignment: Alignment::Left,
    },
    Column {
        header: "Category",
        alignment: Alignment::Left,
    },
];

const CATEGORY_COLUMNS: [Column; 2] = [
    Column {
        header: "Category",
        alignment: Alignment::Left,
    },
    Column {
        header: "Total",
        alignment: Alignment::Right,
    },
];

/// Renders the main expense table with a trailing derived total row.
///
/// The total row is display-only; it never exists as a record, so the index
/// column stays empty for it.
pub fn render_expenses(records: &[ExpenseRecord], total: Amount) -> String {
    let mut rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            vec![
                index.to_string(),
                record.description.clone(),
                record.amount.to_string(),
                record.date.clone(),
                record.category.to_string(),
            ]
        })
        .collect();
    rows.push(vec![
        String::new(),
        "Total".to_string(),
        total.to_string(),
        String::new(),
        String::new(),
    ]);
    render(&EXPENSE_COLUMNS, &rows)
}

/// Renders the grouped per-category totals view.
pub fn render_category_totals(totals: &BTreeMap<Category, Amount>) -> String {
    let rows: Vec<Vec<String>> = totals
        .iter()
        .map(|(category, total)| vec![category.to_string(), total.to_string()])
        .collect();
    render(&CATEGORY_COLUMNS, &rows)
}

fn render(columns: &[Column], rows: &[Vec<String>]) -> String {
    let widths = compute_widths(columns, rows);

    let headers: Vec<String> = columns
        .iter()
        .map(|column| column.header.to_string())
        .collect();
    let mut out = render_row(columns, &headers, &widths);
    out.push('\n');
    out.push_str(&horizontal_rule(&widths));
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(columns, row, &widths));
    }
    out
}

fn compute_widths(columns: &[Column], rows: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let mut width = column.header.chars().count();
            for row in rows {
                if let Some(cell) = row.get(idx) {
                    width = width.max(cell.chars().count());
                }
            }
            width
        })
        .collect()
}

fn render_row(columns: &[Column], row: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(idx, (column, &width))| {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            match column.alignment {
                Alignment::Left => format!("{cell:<width$}"),
                Alignment::Right => format!("{cell:>width$}"),
            }
        })
        .collect();
    cells.join("  ").trim_end().to_string()
}

fn horizontal_rule(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ")
}
