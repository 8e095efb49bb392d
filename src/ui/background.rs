//! The crossfading full-window backdrop
//!
//! Every photo gets a full-window copy stacked behind the strip, faded by the
//! same distance metric that drives the foreground transforms. As the scroll
//! position sweeps across an integer, one copy fades out while its neighbor
//! fades in; at most two are ever partially visible at once.

use iced::widget::{image, Stack};
use iced::{ContentFit, Element, Length};

use crate::motion::ItemStyle;
use crate::state::gallery::Gallery;
use crate::Message;

/// Stack one faded full-window copy of every photo in index order.
pub fn crossfade_stack<'a>(gallery: &'a Gallery, position: f32) -> Element<'a, Message> {
    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    for photo in gallery.photos() {
        let opacity = ItemStyle::at(position, photo.index).opacity;
        layers = layers.push(
            image(photo.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .opacity(opacity),
        );
    }

    layers.into()
}
