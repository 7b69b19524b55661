use crate::document::Block;
use crate::elements::{filled_rect, hline, text_at, vline};
use crate::flow::{Flow, Fragment};
use crate::text::{measure_text_width, truncate_lines, wrap_text};
use serde::Serialize;
use stagerider_style::{TableStyle, TextAlign, TextStyle};
use stagerider_types::{Color, Rect};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Share of the table width, in percent.
    pub width_percent: f32,
    pub align: TextAlign,
    pub max_lines: Option<usize>,
}

impl Column {
    pub fn new(width_percent: f32) -> Self {
        Self {
            width_percent,
            align: TextAlign::Left,
            max_lines: None,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }
}

/// One page-sized fragment of a table. Every chunk repeats the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableChunk {
    pub columns: Vec<Column>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub min_row_height: f32,
    pub chunk_index: usize,
    pub chunk_count: usize,
}

/// Splits `rows` into chunks of at most `rows_per_page` rows.
///
/// # Panics
///
/// Panics when `rows_per_page` is zero or when a header or row does not have
/// one cell per column. Both are caller bugs.
pub fn render_table(
    columns: &[Column],
    header_labels: &[String],
    rows: &[Vec<String>],
    rows_per_page: usize,
    min_row_height: f32,
) -> Vec<Block> {
    assert!(rows_per_page > 0, "rows_per_page must be at least 1");
    assert_eq!(
        header_labels.len(),
        columns.len(),
        "table header has {} labels for {} columns",
        header_labels.len(),
        columns.len()
    );
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            columns.len(),
            "table row {} has {} cells for {} columns",
            i,
            row.len(),
            columns.len()
        );
    }

    let chunk_count = rows.len().div_ceil(rows_per_page);
    rows.chunks(rows_per_page)
        .enumerate()
        .map(|(chunk_index, chunk)| {
            Block::Table(TableChunk {
                columns: columns.to_vec(),
                header: header_labels.to_vec(),
                rows: chunk.to_vec(),
                min_row_height,
                chunk_index,
                chunk_count,
            })
        })
        .collect()
}

impl TableChunk {
    pub(crate) fn collect_text(&self, out: &mut Vec<String>) {
        out.extend(self.header.iter().cloned());
        for row in &self.rows {
            out.extend(row.iter().filter(|c| !c.is_empty()).cloned());
        }
    }

    /// Background of the row at `index` within this chunk.
    pub fn row_background(&self, style: &TableStyle, index: usize) -> Color {
        if index % 2 == 1 {
            style.zebra_background
        } else {
            style.body_background
        }
    }

    fn column_widths(&self, total: f32) -> Vec<f32> {
        let sum: f32 = self.columns.iter().map(|c| c.width_percent.max(0.0)).sum();
        if sum <= 0.0 {
            let even = total / self.columns.len().max(1) as f32;
            return vec![even; self.columns.len()];
        }
        self.columns
            .iter()
            .map(|c| total * c.width_percent.max(0.0) / sum)
            .collect()
    }

    pub(crate) fn layout(&self, flow: &mut Flow<'_>) {
        let styles = flow.styles;
        let style = &styles.table;
        let widths = self.column_widths(flow.width);
        let x0 = flow.x;

        let header = self.row_fragment(
            style,
            &widths,
            x0,
            &self.header,
            &style.header_text,
            style.header_background,
            None,
            0.0,
        );
        let repeated = Rc::new(header.clone());
        let mut header = header.keep_with_next();
        if self.chunk_index > 0 {
            header = header.break_before();
        }
        flow.push(header);

        for (i, row) in self.rows.iter().enumerate() {
            let fragment = self.row_fragment(
                style,
                &widths,
                x0,
                row,
                &style.body_text,
                self.row_background(style, i),
                Some(self.columns.as_slice()),
                self.min_row_height,
            );
            flow.push(fragment.with_repeat_header(Rc::clone(&repeated)));
        }
        flow.add_space(styles.block_gap);
    }

    #[allow(clippy::too_many_arguments)]
    fn row_fragment(
        &self,
        style: &TableStyle,
        widths: &[f32],
        x0: f32,
        cells: &[String],
        text_style: &TextStyle,
        background: Color,
        truncation: Option<&[Column]>,
        min_height: f32,
    ) -> Fragment {
        let (pad_x, pad_y) = (style.cell_padding_x, style.cell_padding_y);
        let cell_lines: Vec<Vec<String>> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let inner = (width - 2.0 * pad_x).max(1.0);
                let lines = wrap_text(cell, text_style, inner);
                match truncation.and_then(|cols| cols[i].max_lines) {
                    Some(max) => truncate_lines(lines, max, text_style, inner),
                    None => lines,
                }
            })
            .collect();

        let line_count = cell_lines.iter().map(Vec::len).max().unwrap_or(1);
        let height = (line_count as f32 * text_style.line_height + 2.0 * pad_y).max(min_height);
        let total_width: f32 = widths.iter().sum();

        let mut elements = vec![filled_rect(Rect::new(x0, 0.0, total_width, height), background)];
        let mut x = x0;
        for (i, (lines, width)) in cell_lines.iter().zip(widths).enumerate() {
            let inner = (width - 2.0 * pad_x).max(1.0);
            let block_height = lines.len() as f32 * text_style.line_height;
            let top = ((height - block_height) / 2.0).max(pad_y.min(height / 2.0));
            for (n, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let offset = self.columns[i].align.offset(inner, measure_text_width(line, text_style));
                let y = top + n as f32 * text_style.line_height;
                elements.push(text_at(x + pad_x + offset, y, line, *text_style));
            }
            if i > 0 {
                elements.push(vline(x, 0.0, height, style.border_color, style.border_width));
            }
            x += width;
        }
        elements.push(vline(x0, 0.0, height, style.border_color, style.border_width));
        elements.push(vline(x0 + total_width, 0.0, height, style.border_color, style.border_width));
        elements.push(hline(x0, 0.0, total_width, style.border_color, style.border_width));
        elements.push(hline(x0, height, total_width, style.border_color, style.border_width));
        Fragment::new(height, elements)
    }
}
