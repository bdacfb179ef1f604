use crate::config::Glyphs;
use crate::consts;
use crate::game::{Ending, GameState, Position, Status};
use crate::util::{center_rect, screen_layout};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Widget showing the status bar and the bordered playing field
#[derive(Clone, Copy, Debug)]
pub(crate) struct GameView<'a> {
    state: &'a GameState,
    glyphs: Glyphs,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(state: &'a GameState, glyphs: Glyphs) -> Self {
        GameView { state, glyphs }
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [status_area, field_area, _, _] = screen_layout(area);
        let snake = self.state.snake();
        let world = self.state.world();
        Line::styled(
            format!(
                " Length: {}  Food eaten: {}",
                snake.len(),
                self.state.food_eaten()
            ),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);

        let block_area = center_rect(
            field_area,
            Size {
                width: world.width().saturating_add(2),
                height: world.height().saturating_add(2),
            },
        );
        Block::bordered().render(block_area, buf);

        let mut field = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &p in snake.segments().iter().skip(1) {
            field.draw_cell(p, self.glyphs.snake, consts::SNAKE_STYLE);
        }
        if let Some(pos) = world.food() {
            field.draw_cell(pos, self.glyphs.food, consts::FOOD_STYLE);
        }
        // Draw the head last so that a collision marker sits on top of
        // whatever the head ran into
        match self.state.status() {
            Status::GameOver(Ending::WallCollision | Ending::SelfCollision) => field.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            ),
            Status::Running | Status::GameOver(Ending::BoardFilled) => {
                field.draw_cell(snake.head(), self.glyphs.head, consts::SNAKE_STYLE);
            }
        }
    }
}

/// Widget showing the end-of-game summary and choices on the bottom two lines
/// of the screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOverBanner {
    pub(crate) length: usize,
    pub(crate) food_eaten: u32,
}

impl Widget for GameOverBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, _, msg1_area, msg2_area] = screen_layout(area);
        Line::from(format!(
            " GAME OVER! Final length: {}, food eaten: {}",
            self.length, self.food_eaten
        ))
        .render(msg1_area, buf);
        Line::from_iter([
            Span::raw(" Restart ("),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(") or Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(msg2_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw a single cell of the playing field.  Positions outside the field
    /// are skipped.
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let (Ok(col), Ok(row)) = (u16::try_from(pos.col), u16::try_from(pos.row)) else {
            return;
        };
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(col) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake, World};

    fn state(segments: [Position; 3], food: Position, status: Status) -> GameState {
        let snake = Snake::from_segments(segments, Direction::Right).unwrap();
        let mut world = World::new(6, 3).unwrap();
        world.set_food(food);
        GameState::from_parts(snake, world, status)
    }

    #[test]
    fn running() {
        let state = state(
            [Position::new(1, 2), Position::new(1, 1), Position::new(1, 0)],
            Position::new(0, 4),
            Status::Running,
        );
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);
        GameView::new(&state, Glyphs::default()).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Length: 3  Food eaten: 0",
            "",
            "                ┌──────┐                ",
            "                │    * │                ",
            "                │oo@   │                ",
            "                │      │                ",
            "                └──────┘                ",
            "",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 40, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(17, 4, 2, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(19, 4, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(21, 3, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn custom_glyphs() {
        let state = state(
            [Position::new(2, 5), Position::new(2, 4), Position::new(2, 3)],
            Position::new(0, 0),
            Status::Running,
        );
        let glyphs = Glyphs {
            food: '$',
            snake: '#',
            head: 'O',
        };
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);
        GameView::new(&state, glyphs).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Length: 3  Food eaten: 0",
            "",
            "                ┌──────┐                ",
            "                │$     │                ",
            "                │      │                ",
            "                │   ##O│                ",
            "                └──────┘                ",
            "",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 40, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(17, 3, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(20, 5, 3, 1), consts::SNAKE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn wall_collision() {
        let state = state(
            [Position::new(1, 5), Position::new(1, 4), Position::new(1, 3)],
            Position::new(0, 0),
            Status::GameOver(Ending::WallCollision),
        );
        let area = Rect::new(0, 0, 44, 10);
        let mut buffer = Buffer::empty(area);
        GameView::new(&state, Glyphs::default()).render(area, &mut buffer);
        GameOverBanner {
            length: 3,
            food_eaten: 0,
        }
        .render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Length: 3  Food eaten: 0",
            "",
            "                  ┌──────┐                  ",
            "                  │*     │                  ",
            "                  │   oo×│                  ",
            "                  │      │                  ",
            "                  └──────┘                  ",
            "",
            " GAME OVER! Final length: 3, food eaten: 0",
            " Restart (r) or Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 44, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(19, 3, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(22, 4, 2, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(24, 4, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(10, 9, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(22, 9, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn out_of_field_cells_are_skipped() {
        let area = Rect::new(0, 0, 4, 4);
        let mut buffer = Buffer::empty(area);
        let mut canvas = Canvas {
            area: Rect::new(1, 1, 2, 2),
            buf: &mut buffer,
        };
        canvas.draw_cell(Position::new(-1, 0), 'x', Style::new());
        canvas.draw_cell(Position::new(0, 2), 'x', Style::new());
        canvas.draw_cell(Position::new(1, 1), 'x', Style::new());
        assert_eq!(buffer, Buffer::with_lines(["    ", "    ", "  x ", "    "]));
    }
}
