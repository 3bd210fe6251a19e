//! Plain-text table rendering for terminal output.

/// Columns never shrink below this when fitting to the terminal.
const MIN_COLUMN_WIDTH: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
    /// Column whose `true`/`false` cells get coloured.
    pub flag_column: Option<usize>,
}

/// Render an aligned table. Cells of `options.flag_column` are coloured when
/// `options.color`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(widths.iter().sum::<usize>() + separator_width(widths.len())));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = pad(&truncate_text(cell, *width), *width);
                if options.color && options.flag_column == Some(index) {
                    colorize_flag(&text)
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

const fn separator_width(columns: usize) -> usize {
    columns.saturating_sub(1) * 2
}

/// Shrink the widest shrinkable column until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = separator_width(widths.len());
    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

fn colorize_flag(cell: &str) -> String {
    let code = match cell.trim_end() {
        "true" => "32",
        "false" => "33",
        _ => return cell.to_string(),
    };
    let trimmed = cell.trim_end();
    let trailing = &cell[trimmed.len()..];
    format!("\u{1b}[{code}m{trimmed}\u{1b}[0m{trailing}")
}
