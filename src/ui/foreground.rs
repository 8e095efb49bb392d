//! The horizontally scrolling photo strip
//!
//! One fixed-size box per photo, laid out in a horizontal scrollable with a
//! hidden scrollbar. The photo inside each box is scaled and tilted by its
//! distance from the centered position; whatever spills past the box is
//! clipped rather than reflowed, so neighbors never move.

use iced::widget::{container, image, mouse_area, scrollable, Row};
use iced::{ContentFit, Degrees, Element, Length, Rotation};

use crate::motion::ItemStyle;
use crate::state::gallery::{Gallery, Photo};
use crate::state::tracker::CarouselMetrics;
use crate::Message;

/// Build the scrollable strip for the whole gallery.
///
/// The strip's edge padding equals the inter-photo gap, which is exactly what
/// makes `offset = index * stride` center the photo at `index`.
pub fn photo_strip<'a>(
    gallery: &'a Gallery,
    position: f32,
    metrics: &CarouselMetrics,
    id: scrollable::Id,
) -> Element<'a, Message> {
    let mut strip = Row::new().spacing(metrics.item_spacing);
    for photo in gallery.photos() {
        strip = strip.push(photo_box(photo, ItemStyle::at(position, photo.index), metrics));
    }

    scrollable(container(strip).padding([0.0, metrics.item_spacing]))
        .id(id)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(Message::StripScrolled)
        .width(Length::Fill)
        .height(Length::Fixed(metrics.item_height))
        .into()
}

/// One clipped photo box, transformed for the current scroll position
fn photo_box<'a>(
    photo: &'a Photo,
    style: ItemStyle,
    metrics: &CarouselMetrics,
) -> Element<'a, Message> {
    let picture = image(photo.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover)
        .rotation(Rotation::Floating(Degrees(style.rotation_degrees).into()))
        .scale(style.scale);

    mouse_area(
        container(picture)
            .width(Length::Fixed(metrics.item_extent))
            .height(Length::Fixed(metrics.item_height))
            .clip(true),
    )
    .on_press(Message::PhotoClicked(photo.index))
    .into()
}
