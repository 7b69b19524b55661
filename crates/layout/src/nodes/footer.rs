use crate::document::Block;
use crate::elements::{PositionedElement, hline, text_at};
use crate::text::measure_text_width;
use serde::Serialize;
use stagerider_i18n::interpolate;
use stagerider_style::StyleRuleSet;

/// Footer content waiting for the final page count.
///
/// The template is stored on the [`crate::Document`] and resolved by the layout
/// engine once physical pagination has finished, so `{total}` always reflects
/// the real number of output pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterTemplate {
    pub product: String,
    pub custom_text: Option<String>,
    /// Localized pattern with `{page}` and `{total}` placeholders.
    pub page_template: String,
    pub watermark: Option<String>,
}

impl FooterTemplate {
    pub fn new(product: impl Into<String>, page_template: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            custom_text: None,
            page_template: page_template.into(),
            watermark: None,
        }
    }

    /// Blank or whitespace-only text is dropped.
    pub fn with_custom_text(mut self, text: Option<&str>) -> Self {
        self.custom_text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_watermark(mut self, watermark: Option<String>) -> Self {
        self.watermark = watermark;
        self
    }

    /// `page_index` is zero-based.
    pub fn render(&self, page_index: usize, total_pages: usize) -> FooterBlock {
        let page = (page_index + 1).to_string();
        let total = total_pages.to_string();
        FooterBlock {
            left: self.product.clone(),
            center: self.custom_text.clone(),
            right: interpolate(&self.page_template, &[("page", page.as_str()), ("total", total.as_str())]),
            watermark: self.watermark.clone(),
        }
    }
}

pub fn render_footer(template: &FooterTemplate, page_index: usize, total_pages: usize) -> Block {
    Block::Footer(template.render(page_index, total_pages))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterBlock {
    pub left: String,
    pub center: Option<String>,
    pub right: String,
    pub watermark: Option<String>,
}

impl FooterBlock {
    pub(crate) fn collect_text(&self, out: &mut Vec<String>) {
        out.push(self.left.clone());
        out.extend(self.center.clone());
        out.push(self.right.clone());
        out.extend(self.watermark.clone());
    }

    /// Absolute positions inside the bottom footer band.
    pub(crate) fn place(&self, styles: &StyleRuleSet) -> Vec<PositionedElement> {
        let (page_width, page_height) = styles.page.dimensions();
        let margins = styles.page.margins;
        let style = &styles.footer;
        let text = style.text;
        let left = margins.left;
        let width = page_width - margins.horizontal();

        let band_top = page_height - margins.bottom - styles.page.footer_height;
        let text_top = page_height - style.baseline_offset - text.font_size * 0.8;

        let mut elements = vec![hline(left, band_top + 4.0, width, style.rule_color, style.rule_width)];
        elements.push(text_at(left, text_top, &self.left, text));
        if let Some(center) = &self.center {
            let w = measure_text_width(center, &text);
            elements.push(text_at(left + (width - w) / 2.0, text_top, center, text));
        }
        let right_width = measure_text_width(&self.right, &text);
        elements.push(text_at(left + width - right_width, text_top, &self.right, text));

        if let Some(mark) = &self.watermark {
            let mark_style = text.italic();
            let w = measure_text_width(mark, &mark_style);
            let y = text_top - mark_style.line_height - 2.0;
            elements.push(text_at(left + (width - w) / 2.0, y, mark, mark_style));
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_resolve_at_render_time() {
        let template = FooterTemplate::new("StageRider", "Page {page} of {total}");
        let footer = template.render(1, 4);
        assert_eq!(footer.left, "StageRider");
        assert_eq!(footer.right, "Page 2 of 4");
        assert!(footer.center.is_none());
    }

    #[test]
    fn blank_custom_text_is_omitted() {
        let template = FooterTemplate::new("p", "{page}").with_custom_text(Some("   "));
        assert!(template.custom_text.is_none());
        let template = FooterTemplate::new("p", "{page}").with_custom_text(Some("  Tour 2026 "));
        assert_eq!(template.custom_text.as_deref(), Some("Tour 2026"));
    }

    #[test]
    fn watermark_is_placed_when_present() {
        let styles = stagerider_style::build_styles(stagerider_style::resolve_theme("default"));
        let footer = FooterTemplate::new("p", "{page}/{total}")
            .with_watermark(Some("Generated with p".into()))
            .render(0, 1);
        let texts: Vec<_> = footer
            .place(&styles)
            .iter()
            .filter_map(|e| e.text().map(str::to_string))
            .collect();
        assert_eq!(texts, vec!["p", "1/1", "Generated with p"]);
    }
}
