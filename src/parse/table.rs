//! HTML table extraction for console status pages
//!
//! Both console pages render their data as a single `<table>` identified by
//! a fixed tag + class combination. The layout is an external contract the
//! exporter has no control over; when it changes upstream, extraction
//! degrades to empty results rather than failing.

use scraper::{Html, Selector};

/// CSS classes the console puts on its status tables
const STATUS_TABLE_CSS: &str = "table.list.changecolor_w";

/// Selector matching the console's status table
pub fn status_table_selector() -> Selector {
    Selector::parse(STATUS_TABLE_CSS).expect("invalid status table selector")
}

/// Extract data rows from the first table matching `table`.
///
/// The first row is assumed to be a header and skipped. Cell text is
/// whitespace-trimmed. Rows with fewer than `min_cells` cells are skipped
/// without aborting extraction of the remaining rows; a document with no
/// matching table yields an empty vec.
pub fn extract_table_rows(html: &str, table: &Selector, min_cells: usize) -> Vec<Vec<String>> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").expect("invalid row selector");
    let cell_selector = Selector::parse("td").expect("invalid cell selector");

    let Some(table) = document.select(table).next() else {
        return Vec::new();
    };

    table
        .select(&row_selector)
        .skip(1)
        .filter_map(|row| {
            let cells: Vec<String> = row
                .select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();
            (cells.len() >= min_cells).then_some(cells)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(table_body: &str) -> String {
        format!(
            "<html><body><table class=\"list changecolor_w\">{}</table></body></html>",
            table_body
        )
    }

    #[test]
    fn test_no_matching_table_is_empty() {
        let html = "<html><body><table class=\"other\"><tr><td>x</td></tr></table></body></html>";
        let rows = extract_table_rows(html, &status_table_selector(), 1);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_header_skipped_and_cells_trimmed() {
        let html = page(
            "<tr><td>ID</td><td>Name</td><td>IP</td><td>Port</td></tr>\
             <tr><td> 1 </td><td>node-a</td><td>  10.0.0.5 </td><td>8080\n</td></tr>",
        );
        let rows = extract_table_rows(&html, &status_table_selector(), 4);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["1", "node-a", "10.0.0.5", "8080"]);
    }

    #[test]
    fn test_short_rows_skipped_without_aborting() {
        let html = page(
            "<tr><td>h1</td><td>h2</td><td>h3</td><td>h4</td><td>h5</td></tr>\
             <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td></tr>\
             <tr><td>short</td><td>row</td></tr>\
             <tr><td>v</td><td>w</td><td>x</td><td>y</td><td>z</td></tr>",
        );
        let rows = extract_table_rows(&html, &status_table_selector(), 4);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "a");
        assert_eq!(rows[1][4], "z");
    }

    #[test]
    fn test_first_matching_table_wins() {
        let html = format!(
            "{}<table class=\"list changecolor_w\">\
             <tr><td>h</td></tr><tr><td>second</td></tr></table>",
            page("<tr><td>h</td></tr><tr><td>first</td></tr>")
        );
        let rows = extract_table_rows(&html, &status_table_selector(), 1);
        assert_eq!(rows, vec![vec!["first".to_string()]]);
    }

    #[test]
    fn test_nested_markup_text_is_concatenated() {
        let html = page("<tr><td>h</td></tr><tr><td><a href=\"#\">node-1</a></td></tr>");
        let rows = extract_table_rows(&html, &status_table_selector(), 1);
        assert_eq!(rows[0][0], "node-1");
    }
}
