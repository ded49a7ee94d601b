//! UI rendering for the Boiled Corn beach minigame.

use boiled_corn::assets::BitmapId;
use boiled_corn::beach::types::{BeachGame, RoundPhase, MAX_POWER, SCENE_HEIGHT, SCENE_WIDTH};
use boiled_corn::beach::{compose, DrawCommand, Rgb, TextAlign};
use boiled_corn::character::{Animation, Character};
use boiled_corn::settings::Settings;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One terminal cell of the rasterized scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for SceneCell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
        }
    }
}

/// Glyph and colour a bitmap is painted with. `None` for bitmaps that only
/// carry alpha in the full-colour host.
fn bitmap_glyph(bitmap: BitmapId) -> Option<(char, Rgb)> {
    match bitmap {
        BitmapId::Boy => Some(('☻', Rgb(40, 80, 200))),
        BitmapId::Girl => Some(('☻', Rgb(220, 60, 140))),
        BitmapId::Cloud => Some(('◌', Rgb(90, 90, 90))),
        BitmapId::Lost => Some(('✗', Rgb(130, 90, 40))),
        BitmapId::Off => Some(('░', Rgb(80, 80, 80))),
        BitmapId::On => Some(('█', Rgb(250, 200, 40))),
        BitmapId::Overlay => None,
        BitmapId::Sand => Some(('▒', Rgb(200, 160, 100))),
        BitmapId::Sea => Some(('≈', Rgb(40, 120, 200))),
        BitmapId::Towel1 => Some(('▓', Rgb(200, 40, 40))),
        BitmapId::Towel2 => Some(('▓', Rgb(40, 160, 80))),
        BitmapId::Corn => Some(('●', Rgb(250, 220, 60))),
    }
}

fn sprite_glyph(animation: Animation, frame: u32) -> char {
    match animation {
        Animation::Stand => '☺',
        Animation::Walk if frame % 2 == 0 => '☺',
        Animation::Walk => '☻',
    }
}

/// Character sprite footprint in scene pixels.
const SPRITE_SIZE: (i32, i32) = (8, 12);

fn blend(over: Rgb, under: Rgb, alpha: u8) -> Rgb {
    let alpha = alpha as u32;
    let mix = |o: u8, u: u8| ((o as u32 * alpha + u as u32 * (255 - alpha)) / 255) as u8;
    Rgb(mix(over.0, under.0), mix(over.1, under.1), mix(over.2, under.2))
}

/// Draw list rasterized at terminal resolution.
#[derive(Debug, Clone)]
pub struct SceneRaster {
    width: u16,
    height: u16,
    cells: Vec<SceneCell>,
}

impl SceneRaster {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![SceneCell::default(); width as usize * height as usize],
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&SceneCell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row as usize * self.width as usize + col as usize)
    }

    fn to_col(&self, x: i32) -> i32 {
        x * self.width as i32 / SCENE_WIDTH
    }

    fn to_row(&self, y: i32) -> i32 {
        y * self.height as i32 / SCENE_HEIGHT
    }

    /// Scene rectangle to terminal cells, at least one cell in each
    /// direction so small bitmaps stay visible.
    fn cell_rect(&self, x: i32, y: i32, w: i32, h: i32) -> (i32, i32, i32, i32) {
        let col = self.to_col(x);
        let row = self.to_row(y);
        let cols = (self.to_col(x + w) - col).max(1);
        let rows = (self.to_row(y + h) - row).max(1);
        (col, row, cols, rows)
    }

    fn paint(&mut self, col: i32, row: i32, cols: i32, rows: i32, mut f: impl FnMut(&mut SceneCell)) {
        let col_end = (col + cols).min(self.width as i32);
        let row_end = (row + rows).min(self.height as i32);
        for r in row.max(0)..row_end {
            for c in col.max(0)..col_end {
                let index = r as usize * self.width as usize + c as usize;
                f(&mut self.cells[index]);
            }
        }
    }

    fn put_text(&mut self, text: &str, x: i32, y: i32, color: Rgb, align: TextAlign) {
        let len = text.chars().count() as i32;
        let anchor = self.to_col(x);
        let start = match align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - len / 2,
            TextAlign::Right => anchor - len + 1,
        };
        let row = self.to_row(y);
        for (i, ch) in text.chars().enumerate() {
            self.paint(start + i as i32, row, 1, 1, |cell| {
                cell.symbol = ch;
                cell.fg = color;
            });
        }
    }

    pub fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Fill { color } => {
                let color = *color;
                self.paint(0, 0, self.width as i32, self.height as i32, |cell| {
                    *cell = SceneCell {
                        symbol: ' ',
                        fg: color,
                        bg: color,
                    };
                });
            }
            DrawCommand::Bitmap {
                bitmap,
                x,
                y,
                alpha,
                clip_width,
            } => {
                let Some((symbol, color)) = bitmap_glyph(*bitmap) else {
                    return;
                };
                let (w, h) = bitmap.size();
                let w = clip_width.map_or(w, |clip| clip.clamp(0, w));
                if w == 0 || *alpha == 0 {
                    return;
                }
                let alpha = *alpha;
                let (col, row, cols, rows) = self.cell_rect(*x, *y, w, h);
                self.paint(col, row, cols, rows, |cell| {
                    cell.symbol = symbol;
                    cell.fg = blend(color, cell.bg, alpha);
                });
            }
            DrawCommand::Sprite {
                animation,
                frame,
                x,
                y,
            } => {
                let symbol = sprite_glyph(*animation, *frame);
                let (col, row, cols, rows) = self.cell_rect(*x, *y, SPRITE_SIZE.0, SPRITE_SIZE.1);
                self.paint(col, row, cols, rows, |cell| {
                    cell.symbol = symbol;
                    cell.fg = Rgb(250, 120, 30);
                });
            }
            DrawCommand::Text {
                text,
                x,
                y,
                color,
                align,
            } => self.put_text(text, *x, *y, *color, *align),
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        (0..self.height)
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .filter_map(|col| self.cell(col, row))
                    .map(|cell| {
                        Span::styled(
                            cell.symbol.to_string(),
                            Style::default().fg(to_color(cell.fg)).bg(to_color(cell.bg)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Rasterize a whole draw list into a `width` x `height` cell grid.
pub fn rasterize(commands: &[DrawCommand], width: u16, height: u16) -> SceneRaster {
    let mut raster = SceneRaster::new(width, height);
    for command in commands {
        raster.draw(command);
    }
    raster
}

const INFO_WIDTH: u16 = 22;
const STATUS_HEIGHT: u16 = 2;

const CONTROLS: [(&str, &str); 4] = [
    ("[Space]", "Throw"),
    ("[M]", "Mute"),
    ("[F]", "Fullscreen"),
    ("[Esc]", "Quit"),
];

/// Screen areas of the windowed beach view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BeachLayout {
    scene: Rect,
    status: Rect,
    info: Rect,
}

/// Split the inside of the outer border into scene, status strip and info
/// panel. The scene keeps the beach's aspect ratio within its column.
fn beach_layout(inner: Rect) -> BeachLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(columns[0]);
    BeachLayout {
        scene: fit_scene(rows[0]),
        status: rows[1],
        info: columns[1],
    }
}

/// Largest centred rectangle inside `area` with the 160x90 scene aspect.
/// A terminal cell is about twice as tall as it is wide, so 9 rows pair
/// with 32 columns.
fn fit_scene(area: Rect) -> Rect {
    let (aspect_w, aspect_h) = (2 * SCENE_WIDTH as u32, SCENE_HEIGHT as u32);
    let width = (area.width as u32).min(area.height as u32 * aspect_w / aspect_h);
    let height = (area.height as u32).min(width * aspect_h / aspect_w);
    let (width, height) = (width as u16, height as u16);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the beach scene.
pub fn render_beach<C: Character>(
    frame: &mut Frame,
    area: Rect,
    game: &BeachGame,
    guy: &C,
    settings: &Settings,
) {
    frame.render_widget(Clear, area);
    if settings.fullscreen {
        render_play_area(frame, fit_scene(area), game, guy);
        return;
    }

    let block = Block::default()
        .title(" Boiled Corn ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let layout = beach_layout(block.inner(area));
    frame.render_widget(block, area);

    render_play_area(frame, layout.scene, game, guy);
    render_status(frame, layout.status, game.phase);
    render_info_panel(frame, layout.info, game, settings);
}

fn render_play_area<C: Character>(frame: &mut Frame, area: Rect, game: &BeachGame, guy: &C) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let raster = rasterize(&compose(game, guy), area.width, area.height);
    frame.render_widget(Paragraph::new(raster.lines()), area);
}

/// Prompt for the status strip, by round phase.
fn status_message(phase: RoundPhase) -> (&'static str, Color) {
    match phase {
        RoundPhase::Idle => ("Press Space to start!", Color::Yellow),
        RoundPhase::Cooldown => ("Hold Space to wind up", Color::Green),
        RoundPhase::Charging { power } if power == MAX_POWER => ("Full power!", Color::Red),
        RoundPhase::Charging { .. } => ("Release to throw!", Color::Cyan),
        RoundPhase::Flying(_) => ("Corn in the air...", Color::White),
    }
}

fn controls_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in CONTROLS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn render_status(frame: &mut Frame, area: Rect, phase: RoundPhase) {
    if area.height == 0 {
        return;
    }
    let (message, color) = status_message(phase);
    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(color))),
        controls_line(),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &BeachGame, settings: &Settings) {
    let block = Block::default()
        .title(format!(" {} ", game.variant.name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let score = if game.has_started_once {
        game.score.to_string()
    } else {
        "-".to_string()
    };
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                score,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Throws: ", label),
            Span::styled(
                game.throws_remaining.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Power: ", label),
            Span::styled(
                format!("{}/{}", game.charge().power, MAX_POWER),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Towels: ", label),
            Span::styled(
                game.targets.unsatisfied().count().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Sound: ", label),
            Span::styled(
                if settings.mute { "off" } else { "on" },
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
