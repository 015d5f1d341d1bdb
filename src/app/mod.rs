// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toaster inside an Iced window.
//!
//! The `App` owns the page's [`Viewport`] and translates window events into
//! toaster messages. Pointer positions come from a window-wide event
//! subscription so that a swipe keeps tracking once the cursor leaves the
//! toast it started on.

mod message;

pub use message::{Flags, Message};

use crate::toaster::{self, PointerKind, PointerTarget, ShowOptions, ToastId, ToastType, Viewport};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast as overlay;
use iced::keyboard::key::{Code, Physical};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{event, keyboard, mouse, time, touch, window, Element, Length, Point, Subscription, Task};
use std::time::{Duration, Instant};

/// Interval of the tick driving toaster timers while any are pending.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    viewport: Viewport,
    /// Last pointer position in window coordinates.
    cursor: Point,
    /// Toast currently held by the pointer.
    pressed: Option<ToastId>,
    /// Unmatched enter events from the overlay; the stack is hovered while
    /// this is non-zero.
    hover_depth: usize,
    /// Number of toasts shown so far, used to label demo toasts.
    shown: usize,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let options = flags.resolve();
    let boot = move || App::new(options);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(options: toaster::ToasterOptions) -> (Self, Task<Message>) {
        let mut app = Self {
            viewport: Viewport::new(),
            cursor: Point::ORIGIN,
            pressed: None,
            hover_depth: 0,
            shown: 0,
        };
        app.viewport.init(options, Instant::now());
        tracing::info!(position = %options.position, "toaster demo started");
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toaster")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let toaster_message = match message {
            Message::Show(kind) => {
                self.shown += 1;
                Some(toaster::Message::Show {
                    message: format!("{} #{}", label(kind), self.shown),
                    options: ShowOptions::kind(kind),
                })
            }
            Message::ShowDescribed => {
                self.shown += 1;
                Some(toaster::Message::Show {
                    message: format!("Event #{} has been created", self.shown),
                    options: ShowOptions::default()
                        .with_description("Swipe toward the edge to dismiss it."),
                })
            }
            Message::ClearAll => {
                if let Some(toaster) = self.viewport.toaster_mut() {
                    toaster.clear_at(now);
                }
                None
            }
            Message::Overlay(event) => self.overlay_event(event),
            Message::Toaster(message) => Some(message),
            Message::PointerMoved { position, kind } => {
                self.cursor = position;
                self.pressed.clone().map(|id| toaster::Message::PointerMove {
                    id,
                    x: position.x,
                    y: position.y,
                    kind,
                })
            }
            Message::PointerReleased => self.pressed.take().map(toaster::Message::PointerUp),
            Message::Tick(instant) => {
                if let Some(toaster) = self.viewport.toaster_mut() {
                    toaster.advance(instant);
                }
                None
            }
        };

        if let (Some(message), Some(toaster)) = (toaster_message, self.viewport.toaster_mut()) {
            toaster.handle_message(message, now);
        }
        Task::none()
    }

    fn overlay_event(&mut self, event: overlay::Event) -> Option<toaster::Message> {
        match event {
            overlay::Event::Entered => {
                self.hover_depth += 1;
                (self.hover_depth == 1).then_some(toaster::Message::MouseEnter)
            }
            overlay::Event::Exited => {
                let was_hovered = self.hover_depth > 0;
                self.hover_depth = self.hover_depth.saturating_sub(1);
                (was_hovered && self.hover_depth == 0).then_some(toaster::Message::MouseLeave)
            }
            overlay::Event::Pressed(id) => {
                self.pressed = Some(id.clone());
                Some(toaster::Message::PointerDown {
                    id,
                    x: self.cursor.x,
                    y: self.cursor.y,
                    target: PointerTarget::Body,
                })
            }
            overlay::Event::Close(id) => Some(toaster::Message::Dismiss(id)),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let buttons = [
            ToastType::Neutral,
            ToastType::Success,
            ToastType::Info,
            ToastType::Warning,
            ToastType::Error,
        ]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            row.push(
                button(Text::new(label(kind)).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .on_press(Message::Show(kind)),
            )
        })
        .push(
            button(Text::new("Description").size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .on_press(Message::ShowDescribed),
        )
        .push(
            button(Text::new("Clear").size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .on_press(Message::ClearAll),
        );

        let controls = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(Text::new("Toaster").size(typography::TITLE_MD))
                .push(Text::new("Hover the stack to expand it, Alt+T toggles it.").size(typography::BODY))
                .push(buttons),
        )
        .center(Length::Fill);

        let mut layers = Stack::new().push(controls);
        if let Some(toaster) = self.viewport.toaster() {
            layers = layers.push(overlay::view_overlay(toaster).map(Message::Overlay));
        }
        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticking = self
            .viewport
            .toaster()
            .is_some_and(toaster::Toaster::has_pending_timers);
        let tick = if ticking {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([tick, event::listen_with(route_event)])
    }
}

/// Maps window-wide input to app messages.
fn route_event(event: event::Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::PointerMoved {
            position,
            kind: PointerKind::Mouse,
        }),
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Touch(
            touch::Event::FingerPressed { position, .. } | touch::Event::FingerMoved { position, .. },
        ) => Some(Message::PointerMoved {
            position,
            kind: PointerKind::Touch,
        }),
        event::Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::PointerReleased)
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            physical_key: Physical::Code(Code::KeyT),
            modifiers,
            ..
        }) if modifiers.alt() => Some(Message::Toaster(toaster::Message::ToggleExpanded)),
        _ => None,
    }
}

fn label(kind: ToastType) -> &'static str {
    match kind {
        ToastType::Success => "Success",
        ToastType::Error => "Error",
        ToastType::Info => "Info",
        ToastType::Warning => "Warning",
        ToastType::Neutral => "Default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MOUNT_DELAY_MS;
    use crate::toaster::ToasterOptions;

    fn app() -> App {
        App::new(ToasterOptions::default()).0
    }

    fn toaster(app: &App) -> &toaster::Toaster {
        app.viewport.toaster().expect("initialized")
    }

    #[test]
    fn show_buttons_add_labelled_toasts() {
        let mut app = app();
        let _ = app.update(Message::Show(ToastType::Warning));
        let _ = app.update(Message::ShowDescribed);

        let toasts = toaster(&app).toasts();
        assert_eq!(toasts.len(), 2);
        assert!(toasts[0].description().is_some());
        assert_eq!(toasts[1].message(), "Warning #1");
        assert_eq!(toasts[1].kind(), ToastType::Warning);
    }

    #[test]
    fn drag_outside_the_toast_swipes_it_away() {
        let mut app = app();
        let _ = app.update(Message::Show(ToastType::Info));
        let id = toaster(&app).toasts()[0].id().clone();
        let mounted = Instant::now() + Duration::from_millis(MOUNT_DELAY_MS);
        let _ = app.update(Message::Tick(mounted));

        let _ = app.update(Message::PointerMoved {
            position: Point::new(500.0, 560.0),
            kind: PointerKind::Mouse,
        });
        let _ = app.update(Message::Overlay(overlay::Event::Pressed(id.clone())));
        let _ = app.update(Message::PointerMoved {
            position: Point::new(500.0, 600.0),
            kind: PointerKind::Mouse,
        });
        let _ = app.update(Message::PointerReleased);

        let toast = toaster(&app).get(&id).expect("still attached");
        assert!(toast.is_removed());
        assert!(toast.is_swipe_out());
        assert!(app.pressed.is_none());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::PointerReleased);
        assert!(toaster(&app).is_empty());
    }

    #[test]
    fn cursor_moves_are_routed_as_mouse_pointer() {
        let message = route_event(
            event::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(3.0, 4.0),
            }),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(
            message,
            Some(Message::PointerMoved {
                kind: PointerKind::Mouse,
                ..
            })
        ));
    }

    #[test]
    fn stack_stays_expanded_until_the_last_exit() {
        let mut app = app();
        let _ = app.update(Message::Show(ToastType::Info));
        let _ = app.update(Message::Show(ToastType::Success));
        let mounted = Instant::now() + Duration::from_millis(MOUNT_DELAY_MS);
        let _ = app.update(Message::Tick(mounted));

        let _ = app.update(Message::Overlay(overlay::Event::Entered));
        let _ = app.update(Message::Overlay(overlay::Event::Entered));
        let _ = app.update(Message::Overlay(overlay::Event::Exited));

        let toaster = toaster(&app);
        assert!(toaster.toasts().iter().all(toaster::Toast::is_expanded));
        assert!(toaster
            .toasts()
            .iter()
            .all(|toast| !toast.has_auto_remove_timer()));

        let _ = app.update(Message::Overlay(overlay::Event::Exited));
        let toaster = self::toaster(&app);
        assert!(toaster.toasts().iter().all(|toast| !toast.is_expanded()));
        assert!(toaster
            .toasts()
            .iter()
            .all(toaster::Toast::has_auto_remove_timer));
    }

    #[test]
    fn unmatched_exit_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Overlay(overlay::Event::Exited));
        assert_eq!(app.hover_depth, 0);
    }

    #[test]
    fn alt_t_toggles_the_stack() {
        let pressed = |modifiers| keyboard::Event::KeyPressed {
            key: keyboard::Key::Character("t".into()),
            modified_key: keyboard::Key::Character("t".into()),
            physical_key: Physical::Code(Code::KeyT),
            location: keyboard::Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        };

        let message = route_event(
            event::Event::Keyboard(pressed(keyboard::Modifiers::ALT)),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(
            message,
            Some(Message::Toaster(toaster::Message::ToggleExpanded))
        ));

        let plain = route_event(
            event::Event::Keyboard(pressed(keyboard::Modifiers::empty())),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(plain.is_none());
    }

    #[test]
    fn finger_events_are_routed_as_touch_pointer() {
        let moved = route_event(
            event::Event::Touch(touch::Event::FingerMoved {
                id: touch::Finger(0),
                position: Point::new(1.0, 2.0),
            }),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(
            moved,
            Some(Message::PointerMoved {
                kind: PointerKind::Touch,
                ..
            })
        ));

        let lifted = route_event(
            event::Event::Touch(touch::Event::FingerLifted {
                id: touch::Finger(0),
                position: Point::new(1.0, 2.0),
            }),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(lifted, Some(Message::PointerReleased)));
    }
}
