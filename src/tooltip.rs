//! Tooltip configuration and the tooltip view target.
//!
//! The renderer treats tooltip columns as opaque configuration: each
//! column knows its header title and how to format a fact about the
//! hovered cell. The view target is a trait so the hover protocol can be
//! exercised natively against a recording double.

use serde::{Deserialize, Serialize};

use crate::cells::Cell;

/// One column of the hover tooltip: a header title plus a formatter
/// applied to the hovered cell.
pub struct TooltipColumn {
    title: String,
    evaluate: Box<dyn Fn(&Cell) -> String>,
}

impl TooltipColumn {
    /// Create a column with an arbitrary formatter.
    pub fn new(title: impl Into<String>, evaluate: impl Fn(&Cell) -> String + 'static) -> Self {
        Self {
            title: title.into(),
            evaluate: Box::new(evaluate),
        }
    }

    /// Header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Format this column's fact for `cell`.
    pub fn evaluate(&self, cell: &Cell) -> String {
        (self.evaluate)(cell)
    }

    /// The stock columns: `X` (row), `Y` (col), and `Value` formatted to
    /// two decimals.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("X", |cell| cell.row.to_string()),
            Self::new("Y", |cell| cell.col.to_string()),
            Self::new("Value", |cell| format!("{:.2}", cell.value)),
        ]
    }
}

impl std::fmt::Debug for TooltipColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TooltipColumn")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Which cell fact a serialized column spec displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipField {
    Row,
    Col,
    Value,
}

/// Serializable tooltip column configuration for the JS boundary.
///
/// JS hosts describe columns as data instead of passing closures across
/// the wasm boundary; Rust hosts can use [`TooltipColumn::new`] directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TooltipColumnSpec {
    pub title: String,
    pub field: TooltipField,
    /// Decimal places for `value` columns (default 2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl TooltipColumnSpec {
    /// Materialize the spec into a column with the matching formatter.
    pub fn into_column(self) -> TooltipColumn {
        let precision = self.precision.unwrap_or(2);
        match self.field {
            TooltipField::Row => TooltipColumn::new(self.title, |cell| cell.row.to_string()),
            TooltipField::Col => TooltipColumn::new(self.title, |cell| cell.col.to_string()),
            TooltipField::Value => TooltipColumn::new(self.title, move |cell| {
                format!("{:.*}", precision, cell.value)
            }),
        }
    }
}

/// Trait for the tooltip view target.
///
/// Hiding only toggles visibility; content is never removed from the
/// view tree, which avoids layout thrash on every pointer exit.
pub trait TooltipView {
    /// Write the header row (one entry per configured column).
    fn set_columns(&mut self, titles: &[String]);

    /// Replace the body row with the evaluated column values.
    fn set_row(&mut self, values: &[String]);

    /// Anchor the view at the given screen coordinates.
    fn set_position(&mut self, x: f32, y: f32);

    /// Show or hide the view.
    fn set_visible(&mut self, visible: bool);
}

#[cfg(target_arch = "wasm32")]
pub use html::HtmlTooltip;

#[cfg(target_arch = "wasm32")]
mod html {
    use web_sys::HtmlElement;

    use super::TooltipView;

    /// A `TooltipView` over a host-supplied DOM element.
    ///
    /// Content is written as a small table (header + one body row) and
    /// the element is positioned with a CSS transform, so showing and
    /// hiding never reflows the surrounding layout.
    pub struct HtmlTooltip {
        element: HtmlElement,
        titles: Vec<String>,
        values: Vec<String>,
    }

    impl HtmlTooltip {
        pub fn new(element: HtmlElement) -> Self {
            Self {
                element,
                titles: Vec::new(),
                values: Vec::new(),
            }
        }

        fn rewrite(&self) {
            let header: String = self
                .titles
                .iter()
                .map(|t| format!("<th>{}</th>", escape(t)))
                .collect();
            let body: String = self
                .values
                .iter()
                .map(|v| format!("<td>{}</td>", escape(v)))
                .collect();
            self.element.set_inner_html(&format!(
                "<table><thead><tr>{header}</tr></thead><tbody><tr>{body}</tr></tbody></table>"
            ));
        }
    }

    impl TooltipView for HtmlTooltip {
        fn set_columns(&mut self, titles: &[String]) {
            self.titles = titles.to_vec();
            self.rewrite();
        }

        fn set_row(&mut self, values: &[String]) {
            self.values = values.to_vec();
            self.rewrite();
        }

        fn set_position(&mut self, x: f32, y: f32) {
            let _ = self
                .element
                .style()
                .set_property("transform", &format!("translate({x}px, {y}px)"));
        }

        fn set_visible(&mut self, visible: bool) {
            let opacity = if visible { "1" } else { "0" };
            let _ = self.element.style().set_property("opacity", opacity);
        }
    }

    fn escape(s: &str) -> String {
        s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let cell = Cell {
            row: 1,
            col: 1,
            value: 4.0,
        };
        let columns = TooltipColumn::defaults();
        let rendered: Vec<String> = columns.iter().map(|c| c.evaluate(&cell)).collect();
        assert_eq!(rendered, vec!["1", "1", "4.00"]);
    }

    #[test]
    fn test_spec_precision() {
        let spec = TooltipColumnSpec {
            title: "Value".to_string(),
            field: TooltipField::Value,
            precision: Some(1),
        };
        let column = spec.into_column();
        let cell = Cell {
            row: 0,
            col: 0,
            value: 2.25,
        };
        assert_eq!(column.evaluate(&cell), "2.2");
    }

    #[test]
    fn test_spec_round_trips_through_json() {
        let json = r#"[{"title":"X","field":"row"},{"title":"Value","field":"value","precision":3}]"#;
        let specs: Vec<TooltipColumnSpec> = serde_json::from_str(json).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].precision, Some(3));
    }
}
