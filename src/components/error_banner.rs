use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use super::Component;
use crate::action::Action;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Transient failure message drawn over the top of `area`
pub struct ErrorBanner;

pub struct ErrorBannerProps<'a> {
    pub message: &'a str,
}

const BANNER_WIDTH: u16 = 50;

impl Component<Action> for ErrorBanner {
    type Props<'a> = ErrorBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [row] = Layout::vertical([Constraint::Length(3)]).areas(area);
        let [banner] = Layout::horizontal([Constraint::Max(BANNER_WIDTH)])
            .flex(Flex::Center)
            .areas(row);

        let text = Line::from(vec![
            Span::raw(format!("{ERROR_ICON} ")),
            Span::styled(
                props.message.to_string(),
                Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .centered();

        frame.render_widget(Clear, banner);
        frame.render_widget(
            Paragraph::new(vec![Line::default(), text])
                .block(Block::default().style(Style::default().bg(Color::White))),
            banner,
        );
    }
}
