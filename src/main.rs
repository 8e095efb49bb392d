use iced::keyboard::{self, key::Named, Key};
use iced::widget::{container, scrollable, stack, text};
use iced::{Element, Length, Size, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::Path;
use tracing::warn;

mod motion;
mod state;
mod ui;

use state::config::AppConfig;
use state::gallery::{Gallery, GalleryError};
use state::tracker::{CarouselMetrics, ScrollTracker};

/// Initial window size. Portrait, like the phone screens this layout was
/// designed around; resizing re-derives the carousel geometry.
const WINDOW_SIZE: Size = Size {
    width: 720.0,
    height: 1080.0,
};

/// Main application state
struct ParallaxGallery {
    /// The photos currently on screen
    gallery: Gallery,
    /// Carousel geometry derived from the window size
    metrics: CarouselMetrics,
    /// Shared scroll position, written only by the scroll handler
    tracker: ScrollTracker,
    /// Persisted user configuration
    config: AppConfig,
    /// Identity of the strip scrollable, for programmatic snapping
    strip_id: scrollable::Id,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The strip reported a new scroll offset
    StripScrolled(scrollable::Viewport),
    /// The window was resized; geometry must be re-derived
    WindowResized(Size),
    /// User asked for the native folder picker
    OpenFolder,
    /// Background gallery load finished
    GalleryLoaded(Result<Gallery, GalleryError>),
    /// User clicked a photo; snap it into the center slot
    PhotoClicked(usize),
    /// Step one photo to the left
    PreviousPhoto,
    /// Step one photo to the right
    NextPhoto,
}

impl ParallaxGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();
        let gallery = Gallery::placeholder();

        // Reload the folder from the last session, if it still exists
        let task = match config.photo_folder.clone() {
            Some(folder) if folder.is_dir() => {
                Task::perform(Gallery::load_folder(folder), Message::GalleryLoaded)
            }
            _ => Task::none(),
        };

        let status = format!(
            "{} placeholder cards. Press O to open a photo folder.",
            gallery.len()
        );

        (
            ParallaxGallery {
                gallery,
                metrics: CarouselMetrics::from_viewport(WINDOW_SIZE),
                tracker: ScrollTracker::default(),
                config,
                strip_id: scrollable::Id::new("photo-strip"),
                status,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StripScrolled(viewport) => {
                self.tracker
                    .observe(viewport.absolute_offset().x, &self.metrics);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.metrics = CarouselMetrics::from_viewport(size);
                self.tracker.remeasure(&self.metrics);
                Task::none()
            }
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select a Folder with Photos")
                    .pick_folder();

                if let Some(folder) = folder {
                    self.status = format!("Loading photos from {}...", folder.display());
                    return Task::perform(Gallery::load_folder(folder), Message::GalleryLoaded);
                }

                Task::none()
            }
            Message::GalleryLoaded(Ok(gallery)) => {
                self.status = match gallery.source() {
                    Some(folder) => {
                        format!("{} photos from {}", gallery.len(), folder.display())
                    }
                    None => format!("{} placeholder cards", gallery.len()),
                };

                // Remember the folder for the next session
                self.config.photo_folder = gallery.source().map(Path::to_path_buf);
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "could not persist config");
                }

                self.gallery = gallery;
                self.tracker.reset();
                scrollable::scroll_to(
                    self.strip_id.clone(),
                    scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
                )
            }
            Message::GalleryLoaded(Err(error)) => {
                warn!(%error, "gallery load failed");
                self.status = format!("Could not load photos: {error}");
                Task::none()
            }
            Message::PhotoClicked(index) => self.snap_to(index),
            Message::PreviousPhoto => {
                let nearest = self.tracker.nearest_index(self.gallery.len());
                self.snap_to(nearest.saturating_sub(1))
            }
            Message::NextPhoto => {
                let nearest = self.tracker.nearest_index(self.gallery.len());
                self.snap_to((nearest + 1).min(self.gallery.len().saturating_sub(1)))
            }
        }
    }

    /// Scroll the strip so the photo at `index` sits centered.
    ///
    /// The tracker is updated immediately as well: programmatic `scroll_to`
    /// does not necessarily emit an `on_scroll` viewport callback.
    fn snap_to(&mut self, index: usize) -> Task<Message> {
        let offset = ScrollTracker::offset_for(index, &self.metrics);
        self.tracker.observe(offset, &self.metrics);
        scrollable::scroll_to(
            self.strip_id.clone(),
            scrollable::AbsoluteOffset { x: offset, y: 0.0 },
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let position = self.tracker.position();

        let backdrop = ui::background::crossfade_stack(&self.gallery, position);
        let strip = ui::foreground::photo_strip(
            &self.gallery,
            position,
            &self.metrics,
            self.strip_id.clone(),
        );

        stack![
            backdrop,
            container(strip).width(Length::Fill).center_y(Length::Fill),
            container(text(&self.status).size(14))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(iced::alignment::Vertical::Bottom)
                .padding(16),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Listen for window resizes and keyboard navigation
    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
            keyboard::on_key_press(handle_key_press),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Keyboard navigation: arrows step the carousel, O opens a folder
fn handle_key_press(key: Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Message::PreviousPhoto),
        Key::Named(Named::ArrowRight) => Some(Message::NextPhoto),
        Key::Character("o") | Key::Character("O") => Some(Message::OpenFolder),
        _ => None,
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(
        "Parallax Gallery",
        ParallaxGallery::update,
        ParallaxGallery::view,
    )
    .subscription(ParallaxGallery::subscription)
    .theme(ParallaxGallery::theme)
    .window_size(WINDOW_SIZE)
    .centered()
    .run_with(ParallaxGallery::new)
}
