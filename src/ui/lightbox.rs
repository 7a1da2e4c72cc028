/// Lightbox viewer
///
/// Replaces the gallery while open: top bar with the "i / n" counter and a
/// close button, the media centered and zoomable, navigation arrows below.
/// Escape / ArrowLeft / ArrowRight drive the same messages via the keyboard
/// subscription in main.rs.

use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::gallery::lightbox::Lightbox;
use crate::state::catalog::Catalog;
use crate::state::data::MediaType;
use crate::Message;

pub fn lightbox_view<'a>(lightbox: &'a Lightbox, catalog: &Catalog) -> Element<'a, Message> {
    let item = lightbox.current();

    let media: Element<'a, Message> = match item.media_type {
        MediaType::Image => {
            let handle = image::Handle::from_path(catalog.asset_path(&item.file_name));
            image::viewer(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        MediaType::Video => {
            // No in-app video playback; show the poster frame when one exists
            let poster = catalog.poster_path(&item.file_name);
            if poster.exists() {
                image(image::Handle::from_path(poster))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(iced::ContentFit::Contain)
                    .into()
            } else {
                text(format!("vídeo — {}", item.file_name)).size(18).into()
            }
        }
    };

    let top_bar = row![
        text(lightbox.counter()).size(14),
        Space::with_width(Length::Fill),
        button(text("Fechar").size(14)).on_press(Message::CloseLightbox),
    ]
    .align_y(Alignment::Center);

    let nav = row![
        button(text("‹ Anterior").size(14)).on_press(Message::LightboxPrev),
        Space::with_width(Length::Fill),
        text(item.alt.as_str()).size(14),
        Space::with_width(Length::Fill),
        button(text("Próximo ›").size(14)).on_press(Message::LightboxNext),
    ]
    .align_y(Alignment::Center);

    container(
        column![top_bar, media, nav]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(24)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
