use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{Enemy, Player, Projectile, Wave};
use crate::game::{GAME_HEIGHT, GAME_WIDTH};

/// Ship body with one exhaust line per jet frame (left / neutral /
/// right).
const PLAYER_SPRITE: [&str; 2] = ["  /^\\  ", " <|||> "];
const JET_SPRITES: [&str; 3] = ["  //   ", "  ||   ", "  \\\\   "];

/// Beetlemorph art variants, indexed by the enemy's `frame_y` row.
const BEETLEMORPH_SPRITES: [[&str; 3]; 4] = [
    ["  _._  ", " (o o) ", " /|^|\\ "],
    [" \\._./ ", " (q p) ", "  |=|  "],
    ["  .=.  ", " {o.o} ", " ~|||~ "],
    [" <._.> ", " [0 0] ", "  /~\\  "],
];

/// Death animation, indexed by `frame_x - 1`.
const BEETLEMORPH_DEATH: [[&str; 3]; 2] = [
    [" \\ | / ", "--(*)--", " / | \\ "],
    ["  .  ' ", " '  .  ", "  '  . "],
];

const VARIANT_COLORS: [Color; 4] = [Color::Red, Color::Magenta, Color::Yellow, Color::Green];

/// View struct that holds all game state needed for rendering.
pub struct RenderView<'a> {
    pub player: &'a Player,
    pub projectiles: &'a [Projectile],
    pub waves: &'a [Wave],
    pub score: u32,
    pub wave_count: u32,
    pub is_game_over: bool,
    pub area: Rect,
    pub fps: u32,
}

/// Handles all rendering responsibilities for the game: projects logical
/// playfield coordinates onto the terminal area and draws sprites, HUD
/// and overlays.
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_projectiles(frame, view);
        self.render_player(frame, view);
        self.render_enemies(frame, view);
        self.render_hud(frame, view);
        if view.is_game_over {
            self.render_game_over(frame, view);
        }
    }

    fn render_player(&self, frame: &mut Frame, view: &RenderView) {
        let jets = JET_SPRITES[view.player.jets_frame.min(JET_SPRITES.len() - 1)];
        let lines = [PLAYER_SPRITE[0], PLAYER_SPRITE[1], jets];
        let style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        draw_sprite(frame, view.area, view.player.x, view.player.y, &lines, style);
    }

    fn render_enemies(&self, frame: &mut Frame, view: &RenderView) {
        for wave in view.waves {
            for enemy in &wave.enemies {
                let (lines, color) = enemy_art(enemy);
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                draw_sprite(frame, view.area, enemy.x, enemy.y, &lines, style);
            }
        }
    }

    fn render_projectiles(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let buffer = frame.buffer_mut();
        for projectile in view.projectiles.iter().filter(|p| !p.free) {
            if let Some((x, y)) = project(area, projectile.x, projectile.y) {
                buffer.set_string(x, y, "|", Style::default().fg(Color::Yellow));
            }
        }
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let lives = usize::from(view.player.lives);
        let max_lives = usize::from(view.player.max_lives);
        let life_boxes = format!(
            "{}{}",
            "▮".repeat(lives),
            "▯".repeat(max_lives.saturating_sub(lives))
        );

        let stats = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Wave: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.wave_count),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                life_boxes,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(stats), stats_area);

        let controls = Line::from(vec![Span::styled(
            "[←/→: Move] [1: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Bordered overlay on top of the still-running playfield.
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let text = vec![
            Line::from(""),
            Line::from("GAME OVER!").centered().red().bold(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from("Press R to restart!").centered().white(),
        ];

        let overlay_area = Rect {
            x: (area.width / 2).saturating_sub(15),
            y: (area.height / 2).saturating_sub(3),
            width: 30.min(area.width),
            height: 7.min(area.height),
        };

        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .alignment(Alignment::Center),
            overlay_area,
        );
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn enemy_art(enemy: &Enemy) -> ([&'static str; 3], Color) {
    if enemy.is_alive() {
        let variant = enemy.frame_y as usize % BEETLEMORPH_SPRITES.len();
        (BEETLEMORPH_SPRITES[variant], VARIANT_COLORS[variant])
    } else {
        // frame 0 is the alive art; death frames start at 1
        let frame = (enemy.frame_x as usize)
            .saturating_sub(1)
            .min(BEETLEMORPH_DEATH.len() - 1);
        let color = if frame == 0 { Color::LightRed } else { Color::DarkGray };
        (BEETLEMORPH_DEATH[frame], color)
    }
}

/// Maps a logical playfield coordinate to a terminal cell, if visible.
fn project(area: Rect, x: f32, y: f32) -> Option<(u16, u16)> {
    let cell_x = (x / GAME_WIDTH * f32::from(area.width)).floor() as i32;
    let cell_y = (y / GAME_HEIGHT * f32::from(area.height)).floor() as i32;
    if cell_x < 0
        || cell_y < 0
        || cell_x >= i32::from(area.width)
        || cell_y >= i32::from(area.height)
    {
        return None;
    }
    Some((area.x + cell_x as u16, area.y + cell_y as u16))
}

fn draw_sprite(frame: &mut Frame, area: Rect, x: f32, y: f32, lines: &[&str], style: Style) {
    let Some((cell_x, cell_y)) = project(area, x, y) else {
        return;
    };
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;

    // only draw sprites that fit entirely inside the area
    if cell_x + width > area.x + area.width || cell_y + height > area.y + area.height {
        return;
    }

    let text: Vec<Line> = lines.iter().map(|line| Line::from(*line).style(style)).collect();
    let sprite_area = Rect {
        x: cell_x,
        y: cell_y,
        width,
        height,
    };
    frame.render_widget(Paragraph::new(text), sprite_area);
}
