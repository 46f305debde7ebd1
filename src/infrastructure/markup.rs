//! Reads the pieces of server-rendered pages the console relies on.

use crate::domain::models::{NumberId, NumberRow, PageContent};
use crate::domain::navigation::{page_kind, PageKind};
use select::document::Document;
use select::node::Node;
use select::predicate::{Attr, Descendant, Name};

/// Example commands from `[data-commands] li`, preferring the `code` inside
/// each item.
pub fn suggested_commands(document: &Document) -> Vec<String> {
    document
        .find(Descendant(Attr("data-commands", ()), Name("li")))
        .filter_map(|item| {
            let text = item
                .find(Name("code"))
                .next()
                .map_or_else(|| item.text(), |code| code.text());
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .collect()
}

/// Rows of the admin numbers tables. Rows without `data-number` are skipped.
pub fn number_rows(document: &Document) -> Vec<NumberRow> {
    document
        .find(Descendant(Name("tbody"), Name("tr")))
        .filter_map(|row| {
            let id = row.attr("data-number")?.trim().to_string();
            Some(NumberRow {
                id: NumberId(id),
                name: row_name(&row),
                approved: row.attr("data-unapproved").is_none(),
            })
        })
        .collect()
}

fn row_name(row: &Node) -> Option<String> {
    if let Some(name) = row.attr("data-name") {
        let name = name.trim();
        return (!name.is_empty()).then(|| name.to_string());
    }
    let number = row.attr("data-number").unwrap_or_default().trim();
    row.find(Name("td"))
        .map(|cell| cell.text().trim().to_string())
        .find(|text| !text.is_empty() && text != number)
}

/// Text content of `main` (or `body`), one trimmed line per source line with
/// runs of blank lines collapsed.
pub fn page_text(document: &Document) -> String {
    let raw = document
        .find(Name("main"))
        .next()
        .or_else(|| document.find(Name("body")).next())
        .map(|node| node.text())
        .unwrap_or_default();

    let mut lines: Vec<&str> = Vec::new();
    for line in raw.lines().map(str::trim) {
        if line.is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

pub fn page_title(document: &Document) -> Option<String> {
    document
        .find(Name("h1"))
        .next()
        .map(|h1| h1.text().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Interprets the markup served at `path`.
pub fn parse_page(path: &str, html: &str) -> PageContent {
    let document = Document::from(html);
    match page_kind(path) {
        PageKind::Console => PageContent::Console {
            suggestions: suggested_commands(&document),
        },
        PageKind::Numbers => PageContent::Numbers {
            rows: number_rows(&document),
        },
        PageKind::Text => PageContent::Text {
            title: page_title(&document),
            body: page_text(&document),
        },
    }
}
