//! Overture - Entry point for the Iced landing experience.

use std::time::Instant;

use iced::alignment::{Horizontal, Vertical};
use iced::font;
use iced::time::{self, Duration};
use iced::widget::canvas::Canvas;
use iced::widget::{column, container, mouse_area, row, stack, text, text_input, Space};
use iced::{window, Color, Element, Font, Length, Point, Size, Subscription, Task};

use overture::animation::ease_out_cubic;
use overture::canvas::{NeuralField, ProcessDemo, ProcessDemoState};
use overture::styles::{cta_input_style, demo_card_style};
use overture::{
    app_theme, palette, EntranceSequence, NeuralFieldState, PaletteColors, Phase, Settings,
    Typewriter, CTA_MAX_WIDTH, CURSOR_BLINK_SECONDS, DEMO_CARD_HEIGHT, DEMO_CARD_WIDTH,
    FIELD_FADE_SECONDS, SUBTITLE_TEXT, TICK_INTERVAL_MS, TICK_SECONDS, TITLE_FADE_SECONDS,
};

const TITLE_FONT: Font = Font {
    family: font::Family::Serif,
    ..Font::DEFAULT
};

const TITLE_FONT_ITALIC: Font = Font {
    style: font::Style::Italic,
    ..TITLE_FONT
};

/// Application state.
struct App {
    entrance: EntranceSequence,
    typewriter: Typewriter,
    field: NeuralFieldState,
    demo: ProcessDemoState,
    /// Instant the experience left `Initializing`; drives both fades.
    revealed_at: Option<Instant>,
    /// Opacity of the particle field (0.0 while initializing, fades to 1.0)
    bg_opacity: f32,
    title_alpha: f32,
    blink_tick: f32,
    draft: String,
    /// Error message if initialization failed
    init_error: Option<String>,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    Tick,
    PointerMoved(Point),
    ViewportResized(Size),
    DraftChanged(String),
}

impl App {
    /// Initializes the application. Falls back to an error screen if
    /// initialization fails.
    fn init() -> (Self, Task<Message>) {
        match Self::try_init() {
            Ok(app) => (app, Task::none()),
            Err(err) => {
                tracing::error!("initialization error: {err:#}");
                (Self::error_state(err.to_string()), Task::none())
            }
        }
    }

    /// Attempts to initialize the application, returning errors properly.
    fn try_init() -> anyhow::Result<Self> {
        let settings = Settings::from_env()?;
        let mut app = Self::fresh();
        app.field.resize(Size::new(settings.window_width, settings.window_height));
        tracing::info!(
            "starting entrance sequence at {}x{}",
            settings.window_width,
            settings.window_height
        );
        Ok(app)
    }

    fn error_state(error: String) -> Self {
        Self {
            init_error: Some(error),
            ..Self::fresh()
        }
    }

    fn fresh() -> Self {
        let now = Instant::now();
        Self {
            entrance: EntranceSequence::new(now, SUBTITLE_TEXT),
            typewriter: Typewriter::new(SUBTITLE_TEXT),
            field: NeuralFieldState::default(),
            demo: ProcessDemoState::default(),
            revealed_at: None,
            bg_opacity: 0.0,
            title_alpha: 0.0,
            blink_tick: 0.0,
            draft: String::new(),
            init_error: None,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                let now = Instant::now();

                // Surface every overdue transition in order; each entry into a
                // typing-eligible phase replays the subtitle from scratch.
                while let Some(phase) = self.entrance.poll(now) {
                    tracing::debug!(phase = ?phase, "entrance advanced");
                    if phase.title_visible() && self.revealed_at.is_none() {
                        self.revealed_at = Some(now);
                    }
                    if phase.typing_eligible() {
                        self.typewriter.restart(now);
                    }
                }

                self.typewriter.update(now);

                // The simulation never pauses; only the pointer force is gated
                // on the terminal phase.
                self.field.step(self.entrance.phase().is_interactive());

                if self.entrance.phase().is_interactive() {
                    self.demo.update();
                }

                self.blink_tick += TICK_SECONDS;

                let since_reveal = self
                    .revealed_at
                    .map(|t| now.saturating_duration_since(t).as_secs_f32());
                self.bg_opacity = match since_reveal {
                    Some(secs) => (secs / FIELD_FADE_SECONDS).min(1.0),
                    None => 0.0,
                };
                self.title_alpha = match since_reveal {
                    Some(secs) => ease_out_cubic((secs / TITLE_FADE_SECONDS).min(1.0)),
                    None => 0.0,
                };
            }
            Message::PointerMoved(position) => {
                self.field.set_pointer(position);
            }
            Message::ViewportResized(size) => {
                tracing::debug!("viewport resized to {}x{}", size.width, size.height);
                self.field.resize(size);
            }
            Message::DraftChanged(s) => self.draft = s,
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick);
        let resizes = window::resize_events().map(|(_id, size)| Message::ViewportResized(size));
        Subscription::batch(vec![ticks, resizes])
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette();

        // Show error screen if initialization failed
        if let Some(ref error) = self.init_error {
            return self.error_view(error, pal);
        }

        let background = Canvas::new(NeuralField::<Message>::new(
            &self.field,
            pal,
            self.bg_opacity,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let layers = stack(vec![background.into(), self.content_layer(pal)]);

        mouse_area(
            container(layers)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_move(Message::PointerMoved)
        .into()
    }

    fn content_layer(&self, pal: PaletteColors) -> Element<'_, Message> {
        let phase = self.entrance.phase();
        let caret_alpha = self.caret_alpha();
        let mut items: Vec<Element<'_, Message>> = Vec::new();

        if phase == Phase::Initializing {
            // A lone blinking cursor holds the stage before the reveal.
            items.push(
                text("_")
                    .size(24)
                    .font(Font::MONOSPACE)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(Color {
                            a: caret_alpha,
                            ..pal.text
                        }),
                    })
                    .into(),
            );
        } else {
            let title_alpha = self.title_alpha;
            items.push(
                text("A super agent for")
                    .size(72)
                    .font(TITLE_FONT)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(Color {
                            a: title_alpha,
                            ..pal.text
                        }),
                    })
                    .into(),
            );
            items.push(
                text("every great mind.")
                    .size(72)
                    .font(TITLE_FONT_ITALIC)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(Color {
                            a: 0.9 * title_alpha,
                            ..pal.text
                        }),
                    })
                    .into(),
            );
        }

        if phase.typing_eligible() {
            items.push(Space::new().height(Length::Fixed(40.0)).into());
            items.push(
                row![
                    text(self.typewriter.text())
                        .size(13)
                        .font(Font::MONOSPACE)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(pal.muted)
                        }),
                    text("_")
                        .size(13)
                        .font(Font::MONOSPACE)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(Color {
                                a: caret_alpha,
                                ..pal.accent_soft
                            })
                        }),
                ]
                .align_y(iced::Alignment::Center)
                .into(),
            );
        }

        if phase.is_interactive() {
            items.push(Space::new().height(Length::Fixed(64.0)).into());
            items.push(
                container(
                    Canvas::new(ProcessDemo::<Message>::new(&self.demo, pal))
                        .width(Length::Fixed(DEMO_CARD_WIDTH))
                        .height(Length::Fixed(DEMO_CARD_HEIGHT)),
                )
                .style(demo_card_style(pal))
                .into(),
            );
            items.push(Space::new().height(Length::Fixed(64.0)).into());
            items.push(self.cta_row(pal));
        }

        container(column(items).align_x(iced::Alignment::Center))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    fn cta_row(&self, pal: PaletteColors) -> Element<'_, Message> {
        container(
            row![
                text(">")
                    .size(14)
                    .font(Font::MONOSPACE)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.dim)
                    }),
                text_input("Start collaborating...", &self.draft)
                    .on_input(Message::DraftChanged)
                    .size(14)
                    .font(Font::MONOSPACE)
                    .padding([12, 16])
                    .style(cta_input_style(pal)),
                text("\u{2192}")
                    .size(16)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.muted)
                    }),
            ]
            .spacing(12)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fixed(CTA_MAX_WIDTH))
        .into()
    }

    fn error_view(&self, error: &str, pal: PaletteColors) -> Element<'_, Message> {
        let error_text = error.to_string();
        container(
            column![
                text("Initialization Error")
                    .size(32)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.danger)
                    }),
                text(error_text)
                    .size(16)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.text)
                    }),
            ]
            .spacing(16)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
    }

    fn caret_alpha(&self) -> f32 {
        if (self.blink_tick % CURSOR_BLINK_SECONDS) < CURSOR_BLINK_SECONDS * 0.5 {
            1.0
        } else {
            0.0
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    fn get_theme(_: &App) -> iced::Theme {
        app_theme()
    }

    let settings = Settings::from_env().unwrap_or_default();

    iced::application(App::init, App::update, App::view)
        .title("Overture")
        .subscription(App::subscription)
        .theme(get_theme)
        .window_size(Size::new(settings.window_width, settings.window_height))
        .run()
}
