//! Plain aligned tables for `--format table`.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const SEPARATOR: &str = "  ";

/// Render `rows` under `headers`, shrinking the widest columns until the
/// table fits `max_width`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(MIN_COLUMN)
                .max(MIN_COLUMN)
        })
        .collect::<Vec<_>>();
    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_cells = headers.iter().map(|h| (*h).to_string()).collect::<Vec<_>>();
    lines.push(render_row(&header_cells, &widths, false));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(SEPARATOR),
    );
    lines.extend(rows.iter().map(|row| render_row(row, &widths, options.color)));
    lines.join("\n")
}

fn render_row(cells: &[String], widths: &[usize], color: bool) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(column, width)| {
            let cell = cells.get(column).map_or("-", String::as_str);
            let text = clip(cell, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            let right_align = text.chars().all(|ch| ch.is_ascii_digit()) && !text.is_empty();
            let shown = if color { paint(&text) } else { text };
            if right_align {
                format!("{pad}{shown}")
            } else {
                format!("{shown}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            return;
        };
        *widest -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    let single_line = value.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let mut out = single_line.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

/// Color severities and load phases.
fn paint(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "critical" | "failed" | "error" => "31",
        "warning" | "loading" => "33",
        "info" | "succeeded" => "32",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
