/// Grouped gallery grid
///
/// One section per group: header with title, optional description and item
/// count, a wrapping grid of clickable tiles, and the "Ver mais" toggle for
/// groups larger than their visible limit.

use iced::widget::{button, container, image, text, Column};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::gallery::grouping::Group;
use crate::media::thumbnail;
use crate::state::catalog::Catalog;
use crate::state::data::{DisplayItem, MediaType};
use crate::state::disclosure::Disclosure;
use crate::Message;

/// Tile dimensions, fixed 4:3 like the site's grid
const TILE_WIDTH: f32 = 220.0;
const TILE_HEIGHT: f32 = 165.0;

pub fn gallery_view<'a>(
    groups: &'a [Group],
    disclosure: &Disclosure,
    catalog: &Catalog,
) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(36);

    for (group_index, group) in groups.iter().enumerate() {
        let expanded = disclosure.is_expanded(&group.key);
        sections = sections.push(group_section(group_index, group, expanded, catalog));
    }

    sections.into()
}

fn group_section<'a>(
    group_index: usize,
    group: &'a Group,
    expanded: bool,
    catalog: &Catalog,
) -> Element<'a, Message> {
    let mut header = Column::new()
        .spacing(4)
        .push(text(group.title.as_str()).size(24));

    if let Some(description) = &group.description {
        header = header.push(text(description.as_str()).size(14));
    }
    header = header.push(text(format!("{} itens", group.items.len())).size(12));

    let tiles: Vec<Element<'a, Message>> = group
        .visible_items(expanded)
        .iter()
        .enumerate()
        .map(|(item_index, item)| tile(group_index, item_index, item, catalog))
        .collect();

    let grid = Wrap::with_elements(tiles).spacing(10.0).line_spacing(10.0);

    let mut section = Column::new().spacing(12).push(header).push(grid);

    if group.has_more() {
        let label = if expanded {
            "Ver menos".to_string()
        } else {
            format!("Ver mais ({})", group.hidden_count())
        };
        section = section.push(
            button(text(label).size(14)).on_press(Message::ToggleGroup(group.key.clone())),
        );
    }

    section.into()
}

/// One clickable tile. Images use the cached thumbnail when available and
/// fall back to the full asset; videos use their poster frame or a badge.
fn tile<'a>(
    group_index: usize,
    item_index: usize,
    item: &DisplayItem,
    catalog: &Catalog,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match tile_handle(item, catalog) {
        Some(handle) => image(handle)
            .width(Length::Fixed(TILE_WIDTH))
            .height(Length::Fixed(TILE_HEIGHT))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(text("vídeo").size(14))
            .center_x(Length::Fixed(TILE_WIDTH))
            .center_y(Length::Fixed(TILE_HEIGHT))
            .into(),
    };

    button(content)
        .padding(0)
        .on_press(Message::OpenLightbox {
            group: group_index,
            item: item_index,
        })
        .into()
}

fn tile_handle(item: &DisplayItem, catalog: &Catalog) -> Option<image::Handle> {
    match item.media_type {
        MediaType::Image => {
            let thumb = thumbnail::thumbnail_path(&item.file_name);
            let path = if thumb.exists() {
                thumb
            } else {
                catalog.asset_path(&item.file_name)
            };
            Some(image::Handle::from_path(path))
        }
        MediaType::Video => {
            let poster = catalog.poster_path(&item.file_name);
            poster.exists().then(|| image::Handle::from_path(poster))
        }
    }
}
