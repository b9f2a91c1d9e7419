//! Application orchestrator: the event-driven core of sunmap.
//!
//! The [`App`] owns the map surface, the selected date, the display
//! preferences, and the last-fetched event times, and keeps them mutually
//! consistent. All mutations flow through [`App::handle_event`] on a single
//! loop; the only work off that loop is the HTTP round trip itself, which
//! runs on a short-lived worker thread and reports back over the same
//! channel the UI feeds.
//!
//! ## Stale responses
//!
//! Several fetches can be in flight at once (a zone fetch and an
//! event-times fetch from one selection, or two event-times fetches from
//! rapid date edits). Each request kind carries a generation counter: a
//! request is tagged with the generation current when it was issued, and a
//! resolution whose tag no longer matches is discarded. The display
//! therefore always ends up matching the latest input state, regardless of
//! network ordering.

use std::io::Write;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::api::{EventTimePair, SunApi};
use crate::constants::EVENT_POLL_INTERVAL_MS;
use crate::coordinates::Coordinate;
use crate::display::{
    TimeFormat, date_to_field_string, display_zone_label, format_event_time, parse_date_field,
};
use crate::map::render::{self, MAP_HEIGHT, MAP_WIDTH, ScreenView};
use crate::map::MapSurface;

/// Everything that can change orchestrator state.
#[derive(Debug)]
pub enum AppEvent {
    /// User picked a point on the map surface.
    CoordinateSelected(Coordinate),
    /// User committed new date-field text.
    DateEdited(String),
    /// User switched the 12/24-hour preference.
    FormatChanged(TimeFormat),
    /// A time-zone fetch finished.
    ZoneResolved {
        generation: u64,
        outcome: Result<String>,
    },
    /// An event-times fetch finished.
    EventTimesResolved {
        generation: u64,
        outcome: Result<EventTimePair>,
    },
}

/// Orchestrator state. Constructed once per session; lives until quit.
pub struct App {
    api: Arc<dyn SunApi>,
    map: MapSurface,
    date: NaiveDate,
    date_text: String,
    time_format: TimeFormat,
    display_zone: Tz,
    zone_identifier: Option<String>,
    event_times: Option<EventTimePair>,
    times_pending: bool,
    zone_pending: bool,
    times_generation: u64,
    zone_generation: u64,
    last_input_error: Option<String>,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
    debug_enabled: bool,
}

impl App {
    /// Build an orchestrator with constructor-injected collaborators.
    pub fn new(
        api: Arc<dyn SunApi>,
        start: Coordinate,
        date: NaiveDate,
        time_format: TimeFormat,
        debug_enabled: bool,
    ) -> Self {
        let (events_tx, events_rx) = channel();
        let mut map = MapSurface::new(start);
        map.set_on_select({
            let tx = events_tx.clone();
            move |coordinate| {
                let _ = tx.send(AppEvent::CoordinateSelected(coordinate));
            }
        });
        Self {
            api,
            map,
            date,
            date_text: date_to_field_string(date),
            time_format,
            display_zone: Tz::UTC,
            zone_identifier: None,
            event_times: None,
            times_pending: false,
            zone_pending: false,
            times_generation: 0,
            zone_generation: 0,
            last_input_error: None,
            events_tx,
            events_rx,
            debug_enabled,
        }
    }

    /// Apply one event to the state machine.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CoordinateSelected(coordinate) => {
                // Programmatic echo into the map; no notification loop.
                self.map.set_coordinate(coordinate);
                self.last_input_error = None;
                self.request_timezone();
                self.request_event_times();
            }
            AppEvent::DateEdited(text) => match parse_date_field(&text) {
                Some(date) => {
                    self.date = date;
                    self.date_text = date_to_field_string(date);
                    self.last_input_error = None;
                    self.request_event_times();
                }
                None => {
                    // User-input error: the field keeps its prior valid value.
                    self.last_input_error =
                        Some(format!("Invalid date \"{text}\", kept {}", self.date_text));
                }
            },
            AppEvent::FormatChanged(format) => {
                // Rendering-only change; event times are absolute, so no fetch.
                self.time_format = format;
            }
            AppEvent::ZoneResolved {
                generation,
                outcome,
            } => {
                if generation != self.zone_generation {
                    self.log_stale("time-zone", generation, self.zone_generation);
                    return;
                }
                self.zone_pending = false;
                match outcome {
                    Ok(identifier) => {
                        match identifier.parse::<Tz>() {
                            Ok(zone) => self.display_zone = zone,
                            Err(_) => {
                                if self.debug_enabled {
                                    log_warning!(
                                        "Unrecognized zone identifier \"{identifier}\", display zone unchanged"
                                    );
                                }
                            }
                        }
                        self.zone_identifier = Some(identifier);
                    }
                    Err(error) => {
                        // Last known zone stays on screen.
                        if self.debug_enabled {
                            log_warning!("Time-zone fetch failed: {error:#}");
                        }
                    }
                }
            }
            AppEvent::EventTimesResolved {
                generation,
                outcome,
            } => {
                if generation != self.times_generation {
                    self.log_stale("event-times", generation, self.times_generation);
                    return;
                }
                self.times_pending = false;
                match outcome {
                    Ok(pair) => self.event_times = Some(pair),
                    Err(error) => {
                        // Last known times stay on screen.
                        if self.debug_enabled {
                            log_warning!("Event-times fetch failed: {error:#}");
                        }
                    }
                }
            }
        }
    }

    fn log_stale(&self, kind: &str, got: u64, current: u64) {
        if self.debug_enabled {
            log_debug!("Discarding stale {kind} response (generation {got}, current {current})");
        }
    }

    fn request_timezone(&mut self) {
        self.zone_generation += 1;
        self.zone_pending = true;
        let generation = self.zone_generation;
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        let coordinate = self.map.coordinate();
        std::thread::spawn(move || {
            let outcome = api.fetch_timezone(coordinate);
            let _ = tx.send(AppEvent::ZoneResolved {
                generation,
                outcome,
            });
        });
    }

    fn request_event_times(&mut self) {
        self.times_generation += 1;
        self.times_pending = true;
        let generation = self.times_generation;
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        let coordinate = self.map.coordinate();
        let date = self.date;
        std::thread::spawn(move || {
            let outcome = api.fetch_event_times(coordinate, date);
            let _ = tx.send(AppEvent::EventTimesResolved {
                generation,
                outcome,
            });
        });
    }

    /// The coordinate currently displayed.
    pub fn coordinate(&self) -> Coordinate {
        self.map.coordinate()
    }

    /// The committed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Rendered sunrise field: `…` until a first result arrives, `N/A`
    /// for a date/location without a sunrise, the formatted time otherwise.
    pub fn sunrise_display(&self) -> String {
        match &self.event_times {
            None => "…".to_string(),
            Some(pair) => format_event_time(pair.sunrise, self.time_format, self.display_zone),
        }
    }

    /// Rendered sunset field; see [`App::sunrise_display`].
    pub fn sunset_display(&self) -> String {
        match &self.event_times {
            None => "…".to_string(),
            Some(pair) => format_event_time(pair.sunset, self.time_format, self.display_zone),
        }
    }

    /// Friendly label for the current display zone.
    pub fn zone_label(&self) -> String {
        match &self.zone_identifier {
            Some(identifier) => display_zone_label(identifier),
            None => "UTC".to_string(),
        }
    }

    #[cfg(any(test, feature = "testing-support"))]
    pub fn times_generation(&self) -> u64 {
        self.times_generation
    }

    #[cfg(any(test, feature = "testing-support"))]
    pub fn zone_generation(&self) -> u64 {
        self.zone_generation
    }

    #[cfg(any(test, feature = "testing-support"))]
    pub fn display_zone(&self) -> Tz {
        self.display_zone
    }

    fn view(&self, date_edit: Option<&String>) -> ScreenView {
        let status = if let Some(error) = &self.last_input_error {
            Some(error.clone())
        } else if self.times_pending || self.zone_pending {
            Some("fetching…".to_string())
        } else {
            None
        };
        ScreenView {
            marker: self.map.marker_cell(),
            coordinate: self.map.coordinate(),
            date_text: self.date_text.clone(),
            date_edit: date_edit.cloned(),
            format_label: self.time_format.label(),
            sunrise: self.sunrise_display(),
            sunset: self.sunset_display(),
            zone: self.zone_label(),
            status,
        }
    }

    /// Run the interactive map screen until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::new()?;
        self.map
            .set_bounds(f64::from(MAP_WIDTH), f64::from(MAP_HEIGHT))?;

        // The initial position behaves like a selection, mirroring the
        // original page-load flow: both fetches fire for the default point.
        let start = self.map.coordinate();
        self.handle_event(AppEvent::CoordinateSelected(start));

        let mut stdout = std::io::stdout();
        let mut date_edit: Option<String> = None;
        let mut dirty = true;

        loop {
            while let Ok(resolved) = self.events_rx.try_recv() {
                self.handle_event(resolved);
                dirty = true;
            }

            if dirty {
                render::draw_screen(&mut stdout, &self.view(date_edit.as_ref()))?;
                dirty = false;
            }

            if !event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if date_edit.is_some() {
                        match key.code {
                            KeyCode::Enter => {
                                let text = date_edit.take().unwrap_or_default();
                                self.handle_event(AppEvent::DateEdited(text));
                            }
                            KeyCode::Esc => {
                                date_edit = None;
                            }
                            KeyCode::Backspace => {
                                if let Some(buffer) = date_edit.as_mut() {
                                    buffer.pop();
                                }
                            }
                            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                                if let Some(buffer) = date_edit.as_mut() {
                                    buffer.push(c);
                                }
                            }
                            _ => {}
                        }
                        dirty = true;
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('d') => {
                            date_edit = Some(self.date_text.clone());
                        }
                        KeyCode::Char('t') => {
                            self.handle_event(AppEvent::FormatChanged(self.time_format.toggled()));
                        }
                        KeyCode::Left => self.nudge_marker(-1, 0),
                        KeyCode::Right => self.nudge_marker(1, 0),
                        KeyCode::Up => self.nudge_marker(0, -1),
                        KeyCode::Down => self.nudge_marker(0, 1),
                        _ => {}
                    }
                    dirty = true;
                }
                Event::Mouse(mouse)
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    // Map cells sit one column right and one row down of the
                    // frame origin (border column and title row).
                    let inside_x = mouse.column >= 1 && mouse.column <= MAP_WIDTH;
                    let inside_y = mouse.row >= 1 && mouse.row <= MAP_HEIGHT;
                    if inside_x && inside_y {
                        let x = f64::from(mouse.column - 1) + 0.5;
                        let y = f64::from(mouse.row - 1) + 0.5;
                        if let Err(error) = self.map.pointer_select(x, y)
                            && self.debug_enabled
                        {
                            log_warning!("Ignored map click: {error}");
                        }
                        dirty = true;
                    }
                }
                Event::Resize(..) => {
                    dirty = true;
                }
                _ => {}
            }
        }
    }

    /// Move the selection by whole map cells; selection semantics match a
    /// pointer select on the target cell's center.
    fn nudge_marker(&mut self, dx: i32, dy: i32) {
        let Some((column, row)) = self.map.marker_cell() else {
            return;
        };
        let column = (i32::from(column) + dx).clamp(0, i32::from(MAP_WIDTH) - 1);
        let row = (i32::from(row) + dy).clamp(0, i32::from(MAP_HEIGHT) - 1);
        let x = f64::from(column) + 0.5;
        let y = f64::from(row) + 0.5;
        if let Err(error) = self.map.pointer_select(x, y)
            && self.debug_enabled
        {
            log_warning!("Ignored marker move: {error}");
        }
    }
}

/// RAII guard owning the terminal for the interactive screen.
///
/// Raw mode, alternate screen, mouse capture and a hidden cursor on entry;
/// everything restored on drop, including the unwind path.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = std::io::stdout();
        let _ = execute!(
            stdout,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}
