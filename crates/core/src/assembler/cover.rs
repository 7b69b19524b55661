use super::{Context, artist_title};
use crate::rider::{Fields, decode_image};
use stagerider_layout::{Contact, CoverContacts, CoverContent, CoverLabels, Page, PageKind, render_cover};

/// The cover is always emitted. It carries the band-equipment advisory only
/// when there are no final notes to attach it to.
pub(super) fn cover_page(ctx: &Context<'_>) -> Page {
    let info = ctx.rider.general_info();
    let image = |aliases: &[&str]| info.raw(aliases).and_then(decode_image);

    let content = CoverContent {
        title: artist_title(ctx),
        subtitle: Some(ctx.t.t("common.technicalRider")),
        hero: image(&["heroImage", "imagemCapa"]),
        contacts: contacts(info.get(&["contacts", "contatos"])),
        version: info.text(&["version", "versao"]),
        tour: info.text(&["tourName", "turne", "tour"]),
        logo: image(&["logo"]),
    };

    let mut blocks = vec![render_cover(content, &labels(ctx))];
    if ctx.rider.final_notes().is_none() {
        blocks.extend(ctx.band.advisory(&ctx.t));
    }
    Page::new(PageKind::Cover, blocks)
}

fn labels(ctx: &Context<'_>) -> CoverLabels {
    let t = &ctx.t;
    CoverLabels {
        contacts: t.t("cover.contacts"),
        road_manager: t.t("cover.roadManager"),
        front_of_house: t.t("cover.foh"),
        monitor: t.t("cover.monitor"),
        phone: t.t("cover.phone"),
        email: t.t("cover.email"),
        tour: t.t("cover.tour"),
        version: t.t("cover.version"),
    }
}

fn contacts(contacts: Fields<'_>) -> CoverContacts {
    CoverContacts {
        road_manager: contact(contacts.get(&["roadManager", "roadie"])),
        front_of_house: contact(contacts.get(&["foh", "frontOfHouse"])),
        monitor: contact(contacts.get(&["monitor"])),
    }
}

/// A contact exists when any of its fields is filled.
fn contact(fields: Fields<'_>) -> Option<Contact> {
    let name = fields.text(&["name", "nome"]);
    let phone = fields.text(&["phone", "telefone"]);
    let email = fields.text(&["email"]);
    if name.is_none() && phone.is_none() && email.is_none() {
        return None;
    }
    Some(Contact {
        name: name.unwrap_or_default(),
        phone,
        email,
    })
}
