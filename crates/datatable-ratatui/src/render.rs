use ratatui::buffer::Buffer;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Display width of `input` in terminal columns, with tabs counted as 4.
pub fn display_width(input: &str) -> usize {
    input
        .split('\t')
        .map(UnicodeWidthStr::width)
        .sum::<usize>()
        + input.matches('\t').count() * 4
}

/// Writes `input` at `(x, y)`, stopping before it would exceed `max_cols` columns.
///
/// Wide characters that do not fit entirely are dropped; tabs expand to 4 spaces. Returns the
/// number of columns written.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let max_cols = max_cols as usize;
    let mut out_cols = 0usize;
    let mut tmp = [0u8; 4];

    for ch in input.chars() {
        if ch == '\t' {
            for _ in 0..4 {
                if out_cols + 1 > max_cols {
                    return out_cols as u16;
                }
                if let Some(cell) = buf.cell_mut((x + out_cols as u16, y)) {
                    cell.set_style(style);
                    cell.set_symbol(" ");
                }
                out_cols += 1;
            }
            continue;
        }

        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if out_cols + w > max_cols {
            return out_cols as u16;
        }

        let s = ch.encode_utf8(&mut tmp);
        if let Some(cell) = buf.cell_mut((x + out_cols as u16, y)) {
            cell.set_style(style);
            cell.set_symbol(s);
        }
        out_cols += 1;

        if w == 2 {
            if let Some(cell) = buf.cell_mut((x + out_cols as u16, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
            out_cols += 1;
        }
    }
    out_cols as u16
}

/// Fills `width` columns starting at `(x, y)` with `symbol`.
pub fn fill_line(x: u16, y: u16, width: u16, buf: &mut Buffer, symbol: &str, style: Style) {
    for dx in 0..width {
        if let Some(cell) = buf.cell_mut((x.saturating_add(dx), y)) {
            cell.set_style(style);
            cell.set_symbol(symbol);
        }
    }
}
