//! Render targets of the admin pages: listing tables, the category select
//! and the notifier that shows alerts to the user.

use std::fmt::Write;

/// Cell of a listing row
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    /// Edit and delete buttons. They are rendered but do nothing.
    Actions,
}

impl Cell {
    pub fn text<T: ToString>(value: T) -> Self {
        Cell::Text(value.to_string())
    }
}

const ACTIONS_TEXT: &str = "[Edit] [Delete]";
const ACTIONS_HTML: &str = r#"<button class="edit">Edit</button> <button class="delete">Delete</button>"#;

/// Listing table with fixed headers
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: vec![],
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn append_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    pub fn headers(&self) -> &[&'static str] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Plain text table with columns padded to the widest value
    pub fn render_text(&self) -> String {
        let lines: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Text(text) => text.clone(),
                        Cell::Actions => ACTIONS_TEXT.to_string(),
                    })
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|header| header.chars().count()).collect();
        for line in &lines {
            for (i, value) in line.iter().enumerate() {
                let width = value.chars().count();
                match widths.get_mut(i) {
                    Some(current) if *current < width => *current = width,
                    Some(_) => {}
                    None => widths.push(width),
                }
            }
        }

        let headers: Vec<String> = self.headers.iter().map(|header| header.to_string()).collect();
        let mut out = String::new();
        for line in ::std::iter::once(&headers).chain(lines.iter()) {
            let padded: Vec<String> = line
                .iter()
                .enumerate()
                .map(|(i, value)| format!("{:width$}", value, width = widths[i]))
                .collect();
            out.push_str(padded.join("  ").trim_end());
            out.push('\n');
        }
        out
    }

    /// `<tr>` rows for a table body, text is escaped
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row {
                match cell {
                    Cell::Text(text) => {
                        let _ = write!(out, "<td>{}</td>", escape_html(text));
                    }
                    Cell::Actions => {
                        let _ = write!(out, "<td>{}</td>", ACTIONS_HTML);
                    }
                }
            }
            out.push_str("</tr>\n");
        }
        out
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Selection control of the product form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Select {
    options: Vec<SelectOption>,
}

impl Select {
    pub fn clear(&mut self) {
        self.options.clear();
    }

    pub fn add_option(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.options.push(SelectOption {
            value: value.into(),
            label: label.into(),
        });
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }
}

/// Shows a message the user has to acknowledge
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Prints alerts to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }
}
