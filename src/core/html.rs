// src/core/html.rs
// HTML table → text grid. Mirrors what a spreadsheet-style table reader
// produces: one Vec<String> per <tr>, colspan cells repeated across the
// columns they span, whitespace normalized.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Upper bound on a single cell's colspan; guards against absurd markup.
const MAX_COLSPAN: usize = 64;

/// One HTML table as text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Leading row made only of `<th>` cells, if any.
    pub headers: Option<Vec<String>>,
    /// Every other row, in document order (tfoot rows included).
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Widest row (headers included).
    pub fn width(&self) -> usize {
        self.headers
            .iter()
            .chain(self.rows.iter())
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// The first table on the page; the league pages keep their data there.
pub fn first_table(doc: &str) -> Option<RawTable> {
    let table_sel = selector("table")?;
    let html = Html::parse_document(doc);
    let table = html.select(&table_sel).next()?;
    Some(read_table(table))
}

fn read_table(table: ElementRef<'_>) -> RawTable {
    let Some(tr_sel) = selector("tr") else { return RawTable::default() };

    let mut headers = None;
    let mut rows = Vec::new();

    for tr in table.select(&tr_sel) {
        // Skip rows that belong to a table nested inside this one.
        if owning_table(tr).map(|t| t.id()) != Some(table.id()) {
            continue;
        }

        let mut cells = Vec::new();
        let mut all_th = true;
        for cell in tr.children().filter_map(ElementRef::wrap) {
            let name = cell.value().name();
            if name != "td" && name != "th" {
                continue;
            }
            all_th &= name == "th";
            let text = normalize_ws(&cell.text().collect::<String>());
            let span = cell
                .value()
                .attr("colspan")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(1)
                .clamp(1, MAX_COLSPAN);
            for _ in 0..span {
                cells.push(text.clone());
            }
        }
        if cells.is_empty() {
            continue;
        }

        if headers.is_none() && rows.is_empty() && all_th {
            headers = Some(cells);
        } else {
            rows.push(cells);
        }
    }

    RawTable { headers, rows }
}

fn owning_table(tr: ElementRef<'_>) -> Option<ElementRef<'_>> {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_body_and_footer() {
        let doc = r#"
            <html><body>
              <table class="grid">
                <thead><tr><th>Wk</th><th>Date</th><th>Gm 1</th></tr></thead>
                <tbody>
                  <tr><td>1</td><td> 9/7/2021&nbsp;</td><td>188</td></tr>
                  <tr><td>2</td><td>9/14/2021</td><td>201</td></tr>
                </tbody>
                <tfoot><tr><td colspan="2">Totals</td><td>389</td></tr></tfoot>
              </table>
              <table><tr><td>ignored</td></tr></table>
            </body></html>
        "#;

        let t = first_table(doc).unwrap();
        assert_eq!(t.headers.as_deref(), Some(&[s!("Wk"), s!("Date"), s!("Gm 1")][..]));
        assert_eq!(t.rows.len(), 3);
        assert_eq!(t.rows[0], vec!["1", "9/7/2021", "188"]);
        assert_eq!(t.rows[2], vec!["Totals", "Totals", "389"]);
        assert_eq!(t.width(), 3);
    }

    #[test]
    fn nested_table_rows_stay_with_their_table() {
        let doc = r#"
            <table>
              <tr><td>outer</td><td><table><tr><td>inner</td></tr></table></td></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0][0], "outer");
    }

    #[test]
    fn pagination_row_spans_every_column() {
        let doc = r#"<table><tr><td>1</td><td>x</td><td>y</td></tr>
                     <tr><td colspan="3">Page 1 2</td></tr></table>"#;
        let t = first_table(doc).unwrap();
        assert!(t.headers.is_none());
        assert_eq!(t.rows[1], vec!["Page 1 2"; 3]);
    }

    #[test]
    fn no_table_is_none() {
        assert!(first_table("<html><body><p>maintenance</p></body></html>").is_none());
    }
}
