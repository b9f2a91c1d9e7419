//! Terminal rendering for the interactive map screen.
//!
//! Draws the ASCII world map, the selection marker, and the readout panel
//! (coordinates, date field, sunrise/sunset, time zone) as one full-screen
//! frame. The renderer is a pure function of a [`ScreenView`]; all state
//! lives in the orchestrator.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::coordinates::Coordinate;

/// Width of the map surface in character cells.
pub const MAP_WIDTH: u16 = 64;
/// Height of the map surface in character cells.
pub const MAP_HEIGHT: u16 = 16;

/// Equirectangular world map, one row per latitude band.
///
/// Row 0 is the 90°N edge, the last row the 90°S edge; column 0 is 180°W.
/// Rows shorter than [`MAP_WIDTH`] are padded with ocean when drawn.
const WORLD_MAP: [&str; MAP_HEIGHT as usize] = [
    "                        ##                                      ",
    "      ######           ####   .####    ######################  ",
    "   ###########          ##   ######################## #######  ",
    "    ############            ###############################    ",
    "     ##########             #############################      ",
    "      #######              #######  ########### ####           ",
    "        ####               ########   #######    ##            ",
    "         ##  ###           #########   #####      # #          ",
    "            ######          ########    ###        ##          ",
    "           ########          ######      #      ######         ",
    "           #######            ####             ########        ",
    "            #####              ##              ######          ",
    "             ###                                   #            ",
    "              #                                                 ",
    "                  ....###############....                       ",
    "              ##############################################    ",
];

const PANEL_TOP: u16 = MAP_HEIGHT + 2;

/// Everything one frame of the interactive screen displays.
#[derive(Debug)]
pub struct ScreenView {
    /// Marker cell within the map grid, if layout is known.
    pub marker: Option<(u16, u16)>,
    pub coordinate: Coordinate,
    /// Committed date field text.
    pub date_text: String,
    /// In-progress date edit buffer, when the field has focus.
    pub date_edit: Option<String>,
    pub format_label: &'static str,
    pub sunrise: String,
    pub sunset: String,
    pub zone: String,
    /// Transient line for pending fetches or non-fatal input errors.
    pub status: Option<String>,
}

/// Draw one complete frame.
pub fn draw_screen(out: &mut impl Write, view: &ScreenView) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(format!("┏ sunmap v{} ━━╸", env!("CARGO_PKG_VERSION"))),
        SetAttribute(Attribute::Reset),
    )?;

    for (row, line) in WORLD_MAP.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16 + 1), Print("┃"))?;
        let mut padded: String = line.chars().take(MAP_WIDTH as usize).collect();
        while padded.chars().count() < MAP_WIDTH as usize {
            padded.push(' ');
        }
        queue!(out, Print(padded))?;
    }

    if let Some((column, row)) = view.marker {
        queue!(
            out,
            MoveTo(column + 1, row + 1),
            SetForegroundColor(Color::Red),
            SetAttribute(Attribute::Bold),
            Print("✖"),
            SetAttribute(Attribute::Reset),
            ResetColor,
        )?;
    }

    queue!(
        out,
        MoveTo(0, MAP_HEIGHT + 1),
        Print(format!(
            "┣ Latitude: {:>9.4}   Longitude: {:>9.4}",
            view.coordinate.latitude(),
            view.coordinate.longitude()
        )),
    )?;

    let date_line = match &view.date_edit {
        Some(buffer) => format!("┣ Date: {buffer}▏ (Enter to apply, Esc to cancel)"),
        None => format!(
            "┣ Date: {}   Format: {}   Time Zone: {}",
            view.date_text, view.format_label, view.zone
        ),
    };
    queue!(out, MoveTo(0, PANEL_TOP), Print(date_line))?;

    queue!(
        out,
        MoveTo(0, PANEL_TOP + 1),
        Print(format!(
            "┣ Sunrise: {:<12} Sunset: {:<12}",
            view.sunrise, view.sunset
        )),
    )?;

    if let Some(status) = &view.status {
        queue!(
            out,
            MoveTo(0, PANEL_TOP + 2),
            SetForegroundColor(Color::Yellow),
            Print(format!("┣ {status}")),
            ResetColor,
        )?;
    }

    queue!(
        out,
        MoveTo(0, PANEL_TOP + 3),
        SetAttribute(Attribute::Dim),
        Print("╹ arrows/click: pick point · d: edit date · t: 12/24h · q: quit"),
        SetAttribute(Attribute::Reset),
    )?;

    out.flush()?;
    Ok(())
}
