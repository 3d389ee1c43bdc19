//! Scaled rendering of the world into a terminal area.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::{Bounds, Obstacle, Player, World};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

pub const BACKGROUND_COLOR: Color = Color::Cyan;
pub const PLAYER_COLOR: Color = Color::Yellow;
pub const OBSTACLE_COLOR: Color = Color::Green;

/// A terminal area standing in for the 800×600 logical canvas.
pub struct Surface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> Surface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    /// Cells covered by `bounds`, clipped to the visible area. A rectangle
    /// that is visible at all covers at least one cell.
    pub fn cells_for(&self, bounds: Bounds) -> Option<Rect> {
        let x0 = bounds.x.clamp(0, WORLD_WIDTH);
        let x1 = bounds.right().clamp(0, WORLD_WIDTH);
        let y0 = bounds.y.clamp(0, WORLD_HEIGHT);
        let y1 = bounds.bottom().clamp(0, WORLD_HEIGHT);
        if x1 <= x0 || y1 <= y0 || self.area.width == 0 || self.area.height == 0 {
            return None;
        }

        let col0 = scale_floor(x0, self.area.width, WORLD_WIDTH);
        let col1 = scale_ceil(x1, self.area.width, WORLD_WIDTH);
        let row0 = scale_floor(y0, self.area.height, WORLD_HEIGHT);
        let row1 = scale_ceil(y1, self.area.height, WORLD_HEIGHT);

        Some(Rect::new(
            self.area.x + col0,
            self.area.y + row0,
            col1 - col0,
            row1 - row0,
        ))
    }

    pub fn fill(&mut self, bounds: Bounds, color: Color) {
        if let Some(cells) = self.cells_for(bounds) {
            self.buf.set_style(cells, Style::default().bg(color));
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.buf.set_style(self.area, Style::default().bg(color));
    }
}

fn scale_floor(value: i32, cells: u16, span: i32) -> u16 {
    (i64::from(value) * i64::from(cells) / i64::from(span)) as u16
}

fn scale_ceil(value: i32, cells: u16, span: i32) -> u16 {
    let span = i64::from(span);
    ((i64::from(value) * i64::from(cells) + span - 1) / span) as u16
}

/// Something that paints itself onto a [`Surface`].
pub trait Sprite {
    fn draw(&self, surface: &mut Surface);
}

impl Sprite for Player {
    fn draw(&self, surface: &mut Surface) {
        surface.fill(self.bounds(), PLAYER_COLOR);
    }
}

impl Sprite for Obstacle {
    fn draw(&self, surface: &mut Surface) {
        surface.fill(self.top_bounds(), OBSTACLE_COLOR);
        surface.fill(self.bottom_bounds(), OBSTACLE_COLOR);
    }
}

/// Largest rect inside `area` with the world's proportions, centered.
/// Terminal cells are about twice as tall as wide.
pub fn fit_world(area: Rect) -> Rect {
    let (world_w, world_h) = (WORLD_WIDTH as u32, WORLD_HEIGHT as u32 / 2);
    let by_height = u32::from(area.height) * world_w / world_h;
    let (width, height) = if by_height <= u32::from(area.width) {
        (by_height as u16, area.height)
    } else {
        let height = u32::from(area.width) * world_h / world_w;
        (area.width, height as u16)
    };
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Renders the whole world: background, obstacles, then the player.
pub struct Playfield<'a> {
    world: &'a World,
}

impl<'a> Playfield<'a> {
    pub fn new(world: &'a World) -> Self {
        Self { world }
    }
}

impl Widget for Playfield<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = Surface::new(buf, area);
        surface.clear(BACKGROUND_COLOR);
        for obstacle in &self.world.obstacles {
            obstacle.draw(&mut surface);
        }
        self.world.player.draw(&mut surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(world: &World, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Playfield::new(world).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_player_painted_at_scaled_position() {
        let world = World::with_obstacles(Player::default(), vec![]);
        let buf = render(&world, 80, 30);
        // (100, 300, 40, 30) -> columns 10..14, rows 15..17
        assert_eq!(buf.get(10, 15).bg, PLAYER_COLOR);
        assert_eq!(buf.get(13, 16).bg, PLAYER_COLOR);
        assert_eq!(buf.get(14, 15).bg, BACKGROUND_COLOR);
        assert_eq!(buf.get(9, 15).bg, BACKGROUND_COLOR);
        assert_eq!(buf.get(0, 0).bg, BACKGROUND_COLOR);
    }

    #[test]
    fn test_obstacle_gap_left_open() {
        let world = World::with_obstacles(
            Player::new(100, 300),
            vec![Obstacle::new(400, 200)],
        );
        let buf = render(&world, 80, 30);
        // Top segment rows 0..10, gap rows 10..17, bottom from row 17
        assert_eq!(buf.get(44, 5).bg, OBSTACLE_COLOR);
        assert_eq!(buf.get(44, 12).bg, BACKGROUND_COLOR);
        assert_eq!(buf.get(44, 20).bg, OBSTACLE_COLOR);
        assert_eq!(buf.get(44, 29).bg, OBSTACLE_COLOR);
    }

    #[test]
    fn test_offscreen_parts_are_clipped() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        let surface = Surface::new(&mut buf, area);
        assert_eq!(surface.cells_for(Bounds::new(800, 0, 80, 600)), None);
        assert_eq!(surface.cells_for(Bounds::new(-80, 0, 80, 600)), None);
        assert_eq!(
            surface.cells_for(Bounds::new(-40, 0, 80, 600)),
            Some(Rect::new(0, 0, 4, 30))
        );
        assert_eq!(
            surface.cells_for(Bounds::new(100, -20, 40, 30)),
            Some(Rect::new(10, 0, 4, 1))
        );
    }

    #[test]
    fn test_tiny_rect_covers_a_cell() {
        let area = Rect::new(3, 2, 80, 30);
        let mut buf = Buffer::empty(area);
        let surface = Surface::new(&mut buf, area);
        let cells = surface.cells_for(Bounds::new(1, 1, 1, 1));
        assert_eq!(cells, Some(Rect::new(3, 2, 1, 1)));
    }

    #[test]
    fn test_fit_world_keeps_proportions() {
        // Wide terminal: height limits
        let fitted = fit_world(Rect::new(0, 0, 200, 30));
        assert_eq!(fitted, Rect::new(60, 0, 80, 30));
        // Tall terminal: width limits
        let fitted = fit_world(Rect::new(0, 0, 80, 60));
        assert_eq!(fitted, Rect::new(0, 15, 80, 30));
    }
}
