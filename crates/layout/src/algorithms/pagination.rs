use crate::elements::PositionedElement;
use crate::flow::{CardGroup, Fragment};
use crate::painting::box_painter::card_decoration;
use log::warn;
use stagerider_style::StyleRuleSet;
use std::collections::{BTreeMap, BTreeSet};

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if a fragment fits in the remaining space.
///
/// * `cursor_y`: The current Y position relative to the top of the content area.
/// * `height`: The required height, including any kept-together successor.
/// * `available_height`: The content height of a page.
pub fn check_fit(cursor_y: f32, height: f32, available_height: f32) -> BreakAnalysis {
    let available = (available_height - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}

struct PageBuilder {
    elements: Vec<PositionedElement>,
    cursor: f32,
    placed: usize,
    /// Per card: (top, bottom) extent on this page, absolute.
    extents: BTreeMap<usize, (f32, f32)>,
    continued: BTreeSet<usize>,
}

impl PageBuilder {
    fn new(continued: &[usize]) -> Self {
        Self {
            elements: Vec::new(),
            cursor: 0.0,
            placed: 0,
            extents: BTreeMap::new(),
            continued: continued.iter().copied().collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.placed == 0
    }

    fn place(&mut self, fragment: Fragment, gap: f32, origin: (f32, f32)) {
        self.cursor += gap;
        let top = origin.1 + self.cursor;
        let bottom = top + fragment.height;
        for id in &fragment.groups {
            self.extents
                .entry(*id)
                .and_modify(|e| e.1 = bottom)
                .or_insert((top, bottom));
        }
        self.elements
            .extend(fragment.elements.into_iter().map(|e| e.offset(origin.0, top)));
        self.cursor += fragment.height;
        self.placed += 1;
    }

    fn finish(self, groups: &[CardGroup], continuing: &[usize], origin_x: f32) -> Vec<PositionedElement> {
        let mut out = Vec::new();
        for (id, (top, bottom)) in &self.extents {
            let Some(group) = groups.get(*id) else { continue };
            let draw_top = !self.continued.contains(id);
            let draw_bottom = !continuing.contains(id);
            out.extend(card_decoration(group, origin_x, *top, *bottom, draw_top, draw_bottom));
        }
        out.extend(self.elements);
        out
    }
}

/// Distributes the fragments of one logical page over as many physical pages
/// as needed. Always returns at least one page.
pub(crate) fn paginate(
    styles: &StyleRuleSet,
    fragments: Vec<Fragment>,
    groups: &[CardGroup],
) -> Vec<Vec<PositionedElement>> {
    let origin = (styles.page.margins.left, styles.page.margins.top);
    let available = styles.page.content_height();

    let lookahead: Vec<f32> = fragments
        .iter()
        .map(|f| f.space_before + f.height)
        .skip(1)
        .chain(std::iter::once(0.0))
        .collect();

    let mut pages = Vec::new();
    let mut current = PageBuilder::new(&[]);

    for (i, fragment) in fragments.into_iter().enumerate() {
        let mut gap = if current.is_empty() {
            0.0
        } else {
            fragment.space_before
        };
        let mut needed = gap + fragment.height;
        if fragment.keep_with_next {
            needed += lookahead[i];
        }
        let fit = check_fit(current.cursor, needed, available);

        if !current.is_empty() && (fragment.break_before || fit.should_break) {
            if fragment.elements.is_empty() && !fragment.break_before {
                // Trailing padding that would start a page on its own.
                continue;
            }
            let groups_open = fragment.groups.clone();
            let full = std::mem::replace(&mut current, PageBuilder::new(&groups_open));
            pages.push(full.finish(groups, &groups_open, origin.0));
            gap = 0.0;
            if let Some(header) = fragment.repeat_header.as_deref().filter(|_| !fragment.break_before) {
                let mut header = Fragment::new(header.height, header.elements.clone());
                header.groups = groups_open;
                current.place(header, 0.0, origin);
            }
        }

        if fragment.height > available {
            warn!(
                "[LAYOUT] Fragment of height {:.2} exceeds page content height {:.2}; it will be clipped.",
                fragment.height, available
            );
        }
        current.place(fragment, gap, origin);
    }

    pages.push(current.finish(groups, &[], origin.0));
    pages
}
