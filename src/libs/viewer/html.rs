//! Serializes a render tree to the viewer's HTML markup.

use super::cell::Classified;
use super::labels::{LabelColumn, LabelEntry};
use super::node::{Card, Chunk, Grid};
use super::top_index::TopIndex;

const CELL_STYLE: &str = "font-size: 1em;display:block;height:1em;line-height:1em;";
const LAST_CELL_STYLE: &str = "font-size: 1em;";

/// Browser-side sweep of all viewers on the page, for hosts that re-layout after load.
pub const SWEEP_SCRIPT: &str = r###"<script>
(function () {
  function sweep() {
    document.querySelectorAll('.sqv-body').forEach(function (body) {
      var max = -Infinity;
      body.querySelectorAll('.chunk').forEach(function (chunk) {
        var top = chunk.getBoundingClientRect().top;
        if (top > max) { chunk.firstElementChild.className = 'index'; max = top; }
        else { chunk.firstElementChild.className = 'index hidden'; }
      });
    });
  }
  window.addEventListener('resize', sweep);
  window.addEventListener('load', sweep);
})();
</script>
"###;

/// ```
/// use sqv::libs::viewer::html::escape;
/// assert_eq!(escape("<a & b>"), "&lt;a &amp; b&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Content of the container: the `root` div and everything below it.
pub fn render_html(grid: &Grid) -> String {
    let chunks: String = grid.chunks.iter().map(|c| render_chunk(grid, c)).collect();

    match &grid.one_line {
        Some(one_line) => {
            let labels = one_line
                .labels
                .as_ref()
                .map(render_column)
                .unwrap_or_default();
            format!(
                "<div class=\"root\" style=\"display: flex\"><div style=\"font-size: {};\">{}</div>\
                 <div style=\"display:inline-block;overflow-x:scroll;white-space: nowrap;width:{}\"> {}</div></div>",
                grid.font_size, labels, one_line.width, chunks
            )
        }
        None => format!("<div class=\"root\">{}</div>", chunks),
    }
}

/// A complete page with one container per grid.
pub fn render_page(grids: &[Grid], script: bool) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page += "<style>.index.hidden { visibility: hidden; } .chunk { display: inline-block; }</style>\n";
    page += "</head>\n<body>\n";
    for grid in grids {
        page += &format!(
            "<div id=\"{}\" class=\"sqv-body\">{}</div>\n",
            escape(&grid.viewer),
            render_html(grid)
        );
    }
    if script {
        page += SWEEP_SCRIPT;
    }
    page += "</body>\n</html>\n";
    page
}

fn render_chunk(grid: &Grid, chunk: &Chunk) -> String {
    let mut style = format!("font-size: {};", grid.font_size);
    if chunk.last {
        style += &format!("margin-right: {}em;", grid.space_size);
    } else {
        style += &format!("padding-right: {}em;", grid.space_size);
    }

    let class = if chunk.index.hidden { "index hidden" } else { "index" };
    let index: String = chunk.index.columns.iter().map(render_column).collect();
    let cards: String = chunk
        .cards
        .iter()
        .map(|card| render_card(card, grid.rows))
        .collect();

    format!(
        "<div class=\"chunk\" style=\"{}\"><div class=\"{}\">{}</div><div class=\"crds\">{}</div></div>",
        style, class, index, cards
    )
}

fn render_column(column: &LabelColumn) -> String {
    let mut html = String::new();
    if column.top_placeholder {
        html += "<span class=\"label-hidden\"></span>";
    }

    for entry in &column.entries {
        html += &match entry {
            LabelEntry::Blank => {
                "<span class=\"label-hidden\"><span class=\"label\"></span></span>".to_string()
            }
            LabelEntry::Label { text, tooltip } => format!(
                "<span class=\"label-hidden\"><span class=\"label\">{}{}</span></span>",
                escape(text),
                tooltip
                    .as_ref()
                    .map(|t| format!("<span class=\"tooltip\">{}</span>", escape(t)))
                    .unwrap_or_default()
            ),
            LabelEntry::Index(i) => format!(
                "<span class=\"label-hidden\" style=\"width: {}\"><span class=\"label\">{}</span></span>",
                column.width.as_deref().unwrap_or_default(),
                i
            ),
        };
    }

    format!(
        "<span class=\"labelContainer\" style=\"display: inline-block\">{}</span>",
        html
    )
}

fn render_card(card: &Card, rows: usize) -> String {
    let mut cells = match card.top {
        Some(TopIndex::Numeral(x)) => format!(
            "<span style=\"-webkit-user-select: none;direction: rtl;display:block;width:0.6em;\">{}</span>",
            x
        ),
        Some(TopIndex::Placeholder) => {
            "<span style=\"-webkit-user-select: none;display:block;visibility: hidden;\">0</span>"
                .to_string()
        }
        None => String::new(),
    };

    for (y, cell) in card.cells.iter().enumerate() {
        let mut style = if y + 1 == rows {
            LAST_CELL_STYLE.to_string()
        } else {
            CELL_STYLE.to_string()
        };

        cells += &match cell {
            Classified::Filler => format!("<span style=\"{}\"> </span>", style),
            Classified::Interactive {
                text,
                x,
                y,
                viewer,
                target,
            } => {
                style += target.as_deref().unwrap_or_default();
                format!(
                    "<span class=\"cell\" data-res-x=\"{}\" data-res-y=\"{}\" data-res-id=\"{}\" style=\"{}\">{}</span>",
                    x,
                    y,
                    escape(viewer),
                    style,
                    escape(text)
                )
            }
            Classified::NonInteractive { markup, target } => {
                style += target.as_deref().unwrap_or_default();
                style += "-webkit-user-select: none;";
                format!("<span style=\"{}\">{}</span>", style, markup)
            }
        };
    }

    format!("<div class=\"crd\">{}</div>", cells)
}
