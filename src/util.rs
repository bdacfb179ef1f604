use ratatui::layout::{Constraint, Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`, clipped to
/// `area` if it does not fit
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Split the screen into the status bar, the area for the playing field, and
/// two message lines at the bottom
pub(crate) fn screen_layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}
