use crate::LayoutError;
use crate::document::Block;
use crate::elements::{ImageElement, LayoutElement, PositionedElement};
use crate::flow::{Flow, Fragment};
use crate::nodes::push_wrapped;
use crate::resource::ImageData;
use image::ImageReader;
use serde::Serialize;
use stagerider_types::{Rect, Size};
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageBlock {
    pub image: ImageData,
    pub caption: Option<String>,
}

/// A centered image scaled to fit the style's image box.
pub fn render_image(image: ImageData, caption: Option<String>) -> Block {
    Block::Image(ImageBlock { image, caption })
}

/// Pixel dimensions of encoded image bytes, read from the header only.
pub fn intrinsic_size(image: &ImageData) -> Result<Size, LayoutError> {
    let failed = |e: &dyn std::fmt::Display| {
        LayoutError::Image(format!("Failed to read image '{}': {}", image.key(), e))
    };
    let (width, height) = ImageReader::new(Cursor::new(image.bytes()))
        .with_guessed_format()
        .map_err(|e| failed(&e))?
        .into_dimensions()
        .map_err(|e| failed(&e))?;
    Ok(Size::new(width as f32, height as f32))
}

/// Scales `image` into `bounds` and returns an element centered horizontally
/// in a container of `container_width` starting at `x`.
pub(crate) fn fitted_image(
    image: &ImageData,
    bounds: Size,
    x: f32,
    container_width: f32,
) -> Result<PositionedElement, LayoutError> {
    let size = intrinsic_size(image)?.contain_within(bounds);
    let left = x + ((container_width - size.width) / 2.0).max(0.0);
    Ok(PositionedElement::new(
        Rect::new(left, 0.0, size.width, size.height),
        LayoutElement::Image(ImageElement {
            image: image.clone(),
        }),
    ))
}

impl ImageBlock {
    pub(crate) fn layout(&self, flow: &mut Flow<'_>) -> Result<(), LayoutError> {
        let styles = flow.styles;
        let bounds = Size::new(
            styles.image_box.width.min(flow.width),
            styles.image_box.height.min(flow.page_height),
        );
        let element = fitted_image(&self.image, bounds, flow.x, flow.width)?;
        let height = element.height;
        let mut fragment = Fragment::new(height, vec![element]);
        if self.caption.is_some() {
            fragment = fragment.keep_with_next();
        }
        flow.push(fragment);
        if let Some(caption) = &self.caption {
            flow.add_space(styles.block_gap / 2.0);
            push_wrapped(flow, caption, &styles.muted);
        }
        flow.add_space(styles.block_gap);
        Ok(())
    }
}
