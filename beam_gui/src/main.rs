//! # BeamCee GUI Application
//!
//! Desktop front-end for the beam calculator, built with Iced.
//!
//! The app owns a [`CalculatorState`] and nothing else of substance: every
//! user action becomes a [`beam_core::session::Event`], the reducer returns
//! the next state, and the returned [`Effect`] is turned into an Iced task.
//! The running completion stream is kept abortable so "New Calculation" and
//! "Home" can cancel it.
//!
//! Settings come from an optional JSON file given as the first argument,
//! then `BEAMCEE_BASE_URL` / `BEAMCEE_ENDPOINT_PATH`.

mod ui;

use std::path::Path;
use std::time::Duration;

use iced::widget::{column, container, stack, Space};
use iced::{task, time, Element, Length, Subscription, Task};
use tracing::{error, info, warn};

use beam_core::beam::{BeamType, SupportType};
use beam_core::file_io::load_settings;
use beam_core::loads::LoadKind;
use beam_core::session::{Event, Page, RequestId};
use beam_core::{
    BeamError, BeamResult, CalculationEvent, CalculatorState, ClientSettings, CompletionClient,
    Effect,
};

/// Spinner frame interval while a request is streaming
const TICK_INTERVAL_MS: u64 = 16;

/// Everything the app reacts to
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(Page),

    // Beam form
    BeamTypeSelected(BeamType),
    SupportTypeSelected(SupportType),
    LengthChanged(String),
    WidthChanged(String),
    HeightChanged(String),
    YoungsModulusChanged(String),

    // Load modal
    OpenLoadModal(LoadKind),
    DraftMagnitudeChanged(String),
    DraftPositionChanged(String),
    ModalConfirm,
    ModalCancel,

    // Calculation
    Calculate,
    NewCalculation,
    Calculation(RequestId, CalculationEvent),

    // Spinner animation
    Tick,
}

impl Message {
    /// Reducer event for a user action; `None` for app-level messages.
    fn into_event(self) -> Option<Event> {
        let event = match self {
            Message::Navigate(page) => Event::Navigate(page),
            Message::BeamTypeSelected(value) => Event::SetBeamType(value),
            Message::SupportTypeSelected(value) => Event::SetSupportType(value),
            Message::LengthChanged(value) => Event::SetLength(value),
            Message::WidthChanged(value) => Event::SetWidth(value),
            Message::HeightChanged(value) => Event::SetHeight(value),
            Message::YoungsModulusChanged(value) => Event::SetYoungsModulus(value),
            Message::OpenLoadModal(kind) => Event::OpenLoadModal(kind),
            Message::DraftMagnitudeChanged(value) => Event::SetDraftMagnitude(value),
            Message::DraftPositionChanged(value) => Event::SetDraftPosition(value),
            Message::ModalConfirm => Event::ConfirmLoad,
            Message::ModalCancel => Event::CancelLoad,
            Message::Calculate => Event::Calculate,
            Message::NewCalculation => Event::Reset,
            Message::Calculation(request, CalculationEvent::Chunk(chunk)) => {
                Event::ChunkReceived { request, chunk }
            }
            Message::Calculation(request, CalculationEvent::Finished(text)) => {
                Event::StreamFinished { request, text }
            }
            Message::Calculation(request, CalculationEvent::Failed(e)) => {
                Event::StreamFailed { request, message: e.to_string() }
            }
            Message::Tick => return None,
        };
        Some(event)
    }
}

pub struct App {
    pub state: CalculatorState,
    /// Endpoint the client posts to, shown in the status bar
    pub endpoint: String,
    client: Result<CompletionClient, BeamError>,
    /// Abort handle of the running completion stream
    stream: Option<task::Handle>,
    /// Spinner rotation in radians
    pub spinner_angle: f32,
}

impl App {
    fn init() -> (Self, Task<Message>) {
        let settings = match Self::load_settings() {
            Ok(settings) => settings,
            Err(e) => {
                error!(error = %e, "Failed to load settings, using defaults");
                ClientSettings::default().with_env_overrides()
            }
        };

        info!(endpoint = %settings.endpoint_url(), "BeamCee GUI starting");

        let app = App {
            state: CalculatorState::new(settings.missing_marker_policy),
            endpoint: settings.endpoint_url(),
            client: CompletionClient::new(&settings),
            stream: None,
            spinner_angle: 0.0,
        };
        (app, Task::none())
    }

    fn load_settings() -> BeamResult<ClientSettings> {
        let settings = match std::env::args().nth(1) {
            Some(path) => load_settings(Path::new(&path))?,
            None => ClientSettings::default(),
        };
        let settings = settings.with_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    fn title(&self) -> String {
        match self.state.page {
            Page::Home => "BeamCee".to_string(),
            Page::Calculator => "BeamCee - Calculator".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Tick = message {
            self.spinner_angle = (self.spinner_angle + 0.1) % std::f32::consts::TAU;
            return Task::none();
        }

        if let Message::Calculation(request, ref event) = message {
            if event.is_terminal() && self.state.in_flight() == Some(request) {
                self.stream = None;
            }
            if let CalculationEvent::Failed(e) = event {
                warn!(%request, error = %e, "Calculation failed");
            }
        }

        match message.into_event() {
            Some(event) => self.apply(event),
            None => Task::none(),
        }
    }

    /// Run the reducer and carry out its effect.
    fn apply(&mut self, event: Event) -> Task<Message> {
        let (state, effect) = std::mem::take(&mut self.state).reduce(event);
        self.state = state;

        match effect {
            Effect::None => Task::none(),
            Effect::StartCalculation { request, prompt } => self.start_stream(request, prompt),
            Effect::CancelCalculation { request } => {
                if let Some(handle) = self.stream.take() {
                    handle.abort();
                    info!(%request, "Calculation cancelled");
                }
                Task::none()
            }
        }
    }

    fn start_stream(&mut self, request: RequestId, prompt: String) -> Task<Message> {
        let client = match &self.client {
            Ok(client) => client,
            Err(e) => {
                let failed = CalculationEvent::Failed(e.clone());
                return Task::done(Message::Calculation(request, failed));
            }
        };

        info!(%request, url = client.url(), "Starting calculation");
        let (task, handle) = Task::run(client.calculate(prompt), move |event| {
            Message::Calculation(request, event)
        })
        .abortable();
        self.stream = Some(handle);
        task
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.state.is_calculating() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match self.state.page {
            Page::Home => ui::home::view(),
            Page::Calculator => self.view_calculator(),
        };

        let content = column![
            ui::toolbar::view_header(self.state.page),
            Space::new().height(8),
            container(page).height(Length::Fill),
            ui::status_bar::view_status_bar(&self.state, &self.endpoint),
        ]
        .padding(12);

        match self.state.modal() {
            Some(kind) => stack![
                content,
                ui::modal::view_backdrop(),
                ui::modal::view_load_modal(kind, &self.state.draft),
            ]
            .into(),
            None => content.into(),
        }
    }

    fn view_calculator(&self) -> Element<'_, Message> {
        iced::widget::row![
            ui::input_panel::view_input_panel(&self.state),
            Space::new().width(12),
            ui::results_panel::view_results_panel(&self.state, self.spinner_angle),
        ]
        .height(Length::Fill)
        .into()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(App::init, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size((1100.0, 720.0))
        .run()
}
