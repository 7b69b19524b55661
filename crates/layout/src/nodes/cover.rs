use crate::LayoutError;
use crate::document::Block;
use crate::elements::{LayoutElement, LinkElement, PositionedElement, filled_rect, text_at};
use crate::flow::{Flow, Fragment};
use crate::nodes::image::fitted_image;
use crate::nodes::list::BULLET;
use crate::nodes::push_wrapped;
use crate::resource::ImageData;
use crate::text::measure_text_width;
use serde::Serialize;
use stagerider_i18n::interpolate;
use stagerider_types::{Rect, Size};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// The fixed contact triple shown on the cover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverContacts {
    pub road_manager: Option<Contact>,
    pub front_of_house: Option<Contact>,
    pub monitor: Option<Contact>,
}

impl CoverContacts {
    pub fn is_empty(&self) -> bool {
        self.road_manager.is_none() && self.front_of_house.is_none() && self.monitor.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoverLabels {
    pub contacts: String,
    pub road_manager: String,
    pub front_of_house: String,
    pub monitor: String,
    pub phone: String,
    pub email: String,
    pub tour: String,
    /// Pattern with a `{version}` placeholder.
    pub version: String,
}

#[derive(Debug, Clone, Default)]
pub struct CoverContent {
    pub title: String,
    pub subtitle: Option<String>,
    pub hero: Option<ImageData>,
    pub contacts: CoverContacts,
    pub version: Option<String>,
    pub tour: Option<String>,
    pub logo: Option<ImageData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContactDetail {
    Text { text: String },
    Link { text: String, uri: String },
}

impl ContactDetail {
    fn text(&self) -> &str {
        match self {
            ContactDetail::Text { text } | ContactDetail::Link { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLine {
    pub heading: String,
    pub details: Vec<ContactDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    pub title: String,
    pub subtitle: Option<String>,
    pub meta: Vec<String>,
    pub logo: Option<ImageData>,
    pub hero: Option<ImageData>,
    pub contacts_title: Option<String>,
    pub contacts: Vec<ContactLine>,
}

/// Builds the cover block. Every field except the title is omitted when absent.
pub fn render_cover(content: CoverContent, labels: &CoverLabels) -> Block {
    let mut meta = Vec::new();
    if let Some(tour) = non_blank(content.tour.as_deref()) {
        meta.push(format!("{}: {}", labels.tour, tour));
    }
    if let Some(version) = non_blank(content.version.as_deref()) {
        meta.push(interpolate(&labels.version, &[("version", version)]));
    }

    let roles = [
        (&labels.road_manager, content.contacts.road_manager.as_ref()),
        (&labels.front_of_house, content.contacts.front_of_house.as_ref()),
        (&labels.monitor, content.contacts.monitor.as_ref()),
    ];
    let contacts: Vec<ContactLine> = roles
        .into_iter()
        .filter_map(|(role, contact)| contact.map(|c| contact_line(role, c, labels)))
        .collect();

    Block::Cover(Cover {
        title: content.title,
        subtitle: non_blank(content.subtitle.as_deref()).map(str::to_string),
        meta,
        logo: content.logo,
        hero: content.hero,
        contacts_title: (!contacts.is_empty()).then(|| labels.contacts.clone()),
        contacts,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn contact_line(role: &str, contact: &Contact, labels: &CoverLabels) -> ContactLine {
    let heading = match non_blank(Some(&contact.name)) {
        Some(name) => format!("{}: {}", role, name),
        None => role.to_string(),
    };
    let mut details = Vec::new();
    if let Some(phone) = non_blank(contact.phone.as_deref()) {
        details.push(ContactDetail::Text {
            text: format!("{}: {}", labels.phone, phone),
        });
    }
    if let Some(email) = non_blank(contact.email.as_deref()) {
        if !details.is_empty() {
            details.push(ContactDetail::Text {
                text: format!(" {} ", BULLET),
            });
        }
        details.push(ContactDetail::Text {
            text: format!("{}: ", labels.email),
        });
        details.push(ContactDetail::Link {
            text: email.to_string(),
            uri: format!("mailto:{}", email),
        });
    }
    ContactLine { heading, details }
}

impl Cover {
    pub(crate) fn collect_text(&self, out: &mut Vec<String>) {
        out.push(self.title.clone());
        out.extend(self.subtitle.clone());
        out.extend(self.meta.iter().cloned());
        out.extend(self.contacts_title.clone());
        for line in &self.contacts {
            out.push(line.heading.clone());
            if !line.details.is_empty() {
                out.push(line.details.iter().map(ContactDetail::text).collect());
            }
        }
    }

    pub fn has_link(&self, uri: &str) -> bool {
        self.contacts.iter().any(|c| {
            c.details
                .iter()
                .any(|d| matches!(d, ContactDetail::Link { uri: u, .. } if u == uri))
        })
    }

    pub(crate) fn layout(&self, flow: &mut Flow<'_>) -> Result<(), LayoutError> {
        let styles = flow.styles;
        let cover = &styles.cover;

        let band = filled_rect(Rect::new(flow.x, 0.0, flow.width, cover.band_height), cover.band_color);
        flow.push(Fragment::new(cover.band_height, vec![band]));
        flow.add_space(cover.spacing * 2.0);

        if let Some(logo) = &self.logo {
            let element = fitted_image(logo, cover.logo_box, flow.x, flow.width)?;
            flow.push(Fragment::new(element.height, vec![element]));
            flow.add_space(cover.spacing);
        }

        push_wrapped(flow, &self.title, &cover.title);
        flow.add_space(cover.spacing / 2.0);

        if let Some(subtitle) = &self.subtitle {
            push_wrapped(flow, subtitle, &cover.subtitle);
            flow.add_space(cover.spacing / 2.0);
        }
        if !self.meta.is_empty() {
            let separator = format!(" {} ", BULLET);
            push_wrapped(flow, &self.meta.join(&separator), &cover.meta);
        }
        flow.add_space(cover.spacing);

        if let Some(hero) = &self.hero {
            let bounds = Size::new(cover.hero_box.width.min(flow.width), cover.hero_box.height);
            let element = fitted_image(hero, bounds, flow.x, flow.width)?;
            flow.push(Fragment::new(element.height, vec![element]));
            flow.add_space(cover.spacing);
        }

        if let Some(title) = &self.contacts_title {
            push_wrapped(flow, title, &cover.section_label);
            flow.keep_last_with_next();
            flow.add_space(cover.spacing / 2.0);
            for line in &self.contacts {
                flow.push(self.contact_fragment(flow.x, flow.width, line, styles));
                flow.add_space(cover.spacing / 2.0);
            }
        }
        flow.add_space(styles.block_gap);
        Ok(())
    }

    /// Heading on one line, details below. Details wrap as whole units (the
    /// email label stays with its link) and a separator is dropped at a wrap.
    fn contact_fragment(
        &self,
        x: f32,
        width: f32,
        line: &ContactLine,
        styles: &stagerider_style::StyleRuleSet,
    ) -> Fragment {
        let cover = &styles.cover;
        let name_style = cover.contact_name;
        let detail_style = cover.contact_detail;
        let link_style = detail_style.color(cover.link_color);
        let mut elements = vec![text_at(x, 0.0, &line.heading, name_style)];
        if line.details.is_empty() {
            return Fragment::new(name_style.line_height, elements);
        }

        let measure = |details: &[ContactDetail]| -> f32 {
            details
                .iter()
                .map(|d| measure_text_width(d.text(), &detail_style))
                .sum()
        };

        let mut y = name_style.line_height;
        let mut cursor = x;
        let mut separator: Option<&ContactDetail> = None;
        for unit in detail_units(&line.details) {
            if unit.len() == 1 && is_separator(&unit[0]) {
                separator = Some(&unit[0]);
                continue;
            }
            let pending = separator.take();
            let separator_width = pending.map_or(0.0, |d| measure(std::slice::from_ref(d)));
            let placed = if cursor > x && cursor + separator_width + measure(unit) > x + width {
                y += detail_style.line_height;
                cursor = x;
                None
            } else {
                pending
            };
            for detail in placed.into_iter().chain(unit) {
                match detail {
                    ContactDetail::Text { text } => {
                        elements.push(text_at(cursor, y, text, detail_style));
                        cursor += measure_text_width(text, &detail_style);
                    }
                    ContactDetail::Link { text, uri } => {
                        let link_width = measure_text_width(text, &link_style);
                        elements.push(text_at(cursor, y, text, link_style));
                        elements.push(PositionedElement::new(
                            Rect::new(cursor, y, link_width, link_style.line_height),
                            LayoutElement::Link(LinkElement { uri: uri.clone() }),
                        ));
                        cursor += link_width;
                    }
                }
            }
        }
        Fragment::new(y + detail_style.line_height, elements)
    }
}

/// Groups a text label with the link that follows it.
fn detail_units(details: &[ContactDetail]) -> Vec<&[ContactDetail]> {
    let mut units = Vec::new();
    let mut start = 0;
    while start < details.len() {
        let labelled_link = matches!(
            (&details[start], details.get(start + 1)),
            (ContactDetail::Text { .. }, Some(ContactDetail::Link { .. }))
        );
        let end = if labelled_link { start + 2 } else { start + 1 };
        units.push(&details[start..end]);
        start = end;
    }
    units
}

fn is_separator(detail: &ContactDetail) -> bool {
    matches!(detail, ContactDetail::Text { text } if text.trim() == BULLET)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> CoverLabels {
        CoverLabels {
            contacts: "Contacts".into(),
            road_manager: "Road manager".into(),
            front_of_house: "FOH engineer".into(),
            monitor: "Monitor engineer".into(),
            phone: "Phone".into(),
            email: "Email".into(),
            tour: "Tour".into(),
            version: "Version {version}".into(),
        }
    }

    fn cover(block: Block) -> Cover {
        match block {
            Block::Cover(c) => c,
            other => panic!("expected a cover, got {:?}", other),
        }
    }

    #[test]
    fn title_only_cover_omits_everything_else() {
        let c = cover(render_cover(
            CoverContent {
                title: "Artist".into(),
                ..Default::default()
            },
            &labels(),
        ));
        assert_eq!(c.title, "Artist");
        assert!(c.subtitle.is_none() && c.meta.is_empty() && c.hero.is_none() && c.logo.is_none());
        assert!(c.contacts_title.is_none());
    }

    #[test]
    fn contact_renders_name_phone_and_mail_link() {
        let content = CoverContent {
            title: "Banda".into(),
            tour: Some("Summer".into()),
            version: Some("3".into()),
            contacts: CoverContacts {
                front_of_house: Some(Contact {
                    name: "Ana".into(),
                    phone: Some("+55 11 9999".into()),
                    email: Some("ana@example.com".into()),
                }),
                ..Default::default()
            },
            ..Default::default()
        };
        let c = cover(render_cover(content, &labels()));
        assert_eq!(c.meta, vec!["Tour: Summer", "Version 3"]);
        assert_eq!(c.contacts.len(), 1);
        assert_eq!(c.contacts[0].heading, "FOH engineer: Ana");
        assert!(c.has_link("mailto:ana@example.com"));

        let mut texts = Vec::new();
        c.collect_text(&mut texts);
        assert!(texts.contains(&"Phone: +55 11 9999 \u{2022} Email: ana@example.com".to_string()));
    }

    fn contact_cover(phone: &str, email: &str) -> Cover {
        cover(render_cover(
            CoverContent {
                title: "Banda".into(),
                contacts: CoverContacts {
                    road_manager: Some(Contact {
                        name: "Rui".into(),
                        phone: Some(phone.into()),
                        email: Some(email.into()),
                    }),
                    ..Default::default()
                },
                ..Default::default()
            },
            &labels(),
        ))
    }

    #[test]
    fn contact_details_share_a_line_when_they_fit() {
        let styles = stagerider_style::build_styles(stagerider_style::resolve_theme("default"));
        let c = contact_cover("+55 11 9999", "rui@example.com");
        let fragment = c.contact_fragment(0.0, styles.page.content_width(), &c.contacts[0], &styles);
        let expected = styles.cover.contact_name.line_height + styles.cover.contact_detail.line_height;
        assert_eq!(fragment.height, expected);
    }

    #[test]
    fn long_contact_details_wrap_inside_the_width() {
        let styles = stagerider_style::build_styles(stagerider_style::resolve_theme("default"));
        let c = contact_cover(
            "+55 11 99999-0000 (office)",
            "road.manager@long-domain-example.com",
        );
        let width = 300.0;
        let fragment = c.contact_fragment(0.0, width, &c.contacts[0], &styles);

        let detail = styles.cover.contact_detail;
        let second_line = styles.cover.contact_name.line_height + detail.line_height;
        assert_eq!(fragment.height, second_line + detail.line_height);

        let texts: Vec<&PositionedElement> = fragment.elements.iter().filter(|e| e.text().is_some()).collect();
        assert!(!texts.iter().any(|e| e.text().is_some_and(|t| t.trim() == BULLET)));
        for element in &texts {
            let text = element.text().unwrap_or_default();
            assert!(element.x + measure_text_width(text, &detail) <= width + 0.01, "{} overflows", text);
        }
        let link = fragment
            .elements
            .iter()
            .find(|e| matches!(e.element, LayoutElement::Link(_)))
            .expect("mail link");
        assert_eq!(link.y, second_line);
        assert_eq!(link.x, measure_text_width("Email: ", &detail));
    }

    #[test]
    fn blank_version_is_not_rendered() {
        let content = CoverContent {
            title: "X".into(),
            version: Some("  ".into()),
            ..Default::default()
        };
        assert!(cover(render_cover(content, &labels())).meta.is_empty());
    }
}
