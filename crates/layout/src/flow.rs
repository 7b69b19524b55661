//! Flattening of blocks into atomic, vertically stacked fragments.

use crate::elements::PositionedElement;
use stagerider_style::{CardStyle, StyleRuleSet};
use std::rc::Rc;

/// An unbreakable slice of content. Element coordinates are relative to the
/// content-area left edge and to the fragment's own top.
#[derive(Debug, Clone)]
pub(crate) struct Fragment {
    pub height: f32,
    pub elements: Vec<PositionedElement>,
    /// Cards this fragment sits in, outermost first.
    pub groups: Vec<usize>,
    /// Vertical gap above the fragment. Dropped at the top of a page.
    pub space_before: f32,
    pub break_before: bool,
    pub keep_with_next: bool,
    /// Drawn first when this fragment opens a continuation page.
    pub repeat_header: Option<Rc<Fragment>>,
}

impl Fragment {
    pub fn new(height: f32, elements: Vec<PositionedElement>) -> Self {
        Self {
            height,
            elements,
            groups: Vec::new(),
            space_before: 0.0,
            break_before: false,
            keep_with_next: false,
            repeat_header: None,
        }
    }

    pub fn spacer(height: f32) -> Self {
        Self::new(height, Vec::new())
    }

    pub fn keep_with_next(mut self) -> Self {
        self.keep_with_next = true;
        self
    }

    pub fn break_before(mut self) -> Self {
        self.break_before = true;
        self
    }

    pub fn with_repeat_header(mut self, header: Rc<Fragment>) -> Self {
        self.repeat_header = Some(header);
        self
    }
}

/// The horizontal extent and decoration of one card.
#[derive(Debug, Clone)]
pub(crate) struct CardGroup {
    pub style: CardStyle,
    pub x: f32,
    pub width: f32,
}

pub(crate) struct Flow<'a> {
    pub styles: &'a StyleRuleSet,
    /// Left edge of the current container, relative to the content area.
    pub x: f32,
    pub width: f32,
    /// Full content height of a physical page.
    pub page_height: f32,
    fragments: Vec<Fragment>,
    groups: Vec<CardGroup>,
    open_groups: Vec<usize>,
    pending_space: f32,
}

impl<'a> Flow<'a> {
    pub fn new(styles: &'a StyleRuleSet) -> Self {
        Self {
            styles,
            x: 0.0,
            width: styles.page.content_width(),
            page_height: styles.page.content_height(),
            fragments: Vec::new(),
            groups: Vec::new(),
            open_groups: Vec::new(),
            pending_space: 0.0,
        }
    }

    pub fn push(&mut self, mut fragment: Fragment) {
        fragment.groups = self.open_groups.clone();
        fragment.space_before += std::mem::take(&mut self.pending_space);
        self.fragments.push(fragment);
    }

    pub fn keep_last_with_next(&mut self) {
        if let Some(last) = self.fragments.last_mut() {
            last.keep_with_next = true;
        }
    }

    /// Requests vertical space before the next pushed fragment.
    pub fn add_space(&mut self, space: f32) {
        self.pending_space = self.pending_space.max(space);
    }

    pub fn begin_card(&mut self, style: &CardStyle) -> usize {
        let id = self.groups.len();
        self.groups.push(CardGroup {
            style: *style,
            x: self.x,
            width: self.width,
        });
        self.open_groups.push(id);
        self.x += style.padding + style.accent_width;
        self.width = (self.width - 2.0 * style.padding - style.accent_width).max(1.0);
        self.push(Fragment::spacer(style.padding).keep_with_next());
        id
    }

    pub fn end_card(&mut self) {
        if let Some(id) = self.open_groups.last().copied() {
            let padding = self.groups[id].style.padding;
            self.pending_space = 0.0;
            self.push(Fragment::spacer(padding));
            self.open_groups.pop();
            let group = &self.groups[id];
            self.x = group.x;
            self.width = group.width;
        }
    }

    /// Runs `f` with the container shifted right by `indent`.
    pub fn indented<F: FnOnce(&mut Self)>(&mut self, indent: f32, f: F) {
        let (x, width) = (self.x, self.width);
        self.x += indent;
        self.width = (self.width - indent).max(1.0);
        f(self);
        self.x = x;
        self.width = width;
    }

    pub fn finish(self) -> (Vec<Fragment>, Vec<CardGroup>) {
        (self.fragments, self.groups)
    }
}
