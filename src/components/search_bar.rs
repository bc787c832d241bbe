use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Search by city";

/// City search field. Enter submits whatever the field holds.
#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
}

pub struct SearchBarProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
    pub is_fetching: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props(value: &str, is_focused: bool, bg: Option<Color>) -> TextInputProps<'_, Action> {
        TextInputProps {
            value,
            placeholder: PLACEHOLDER,
            is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: Action::SearchInputChange,
            on_submit: |_| Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        self.input
            .handle_event(event, Self::input_props(props.value, true, None))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        // Expects three rows: padding, text, padding
        let chunks = Layout::horizontal([
            Constraint::Min(10),    // Input
            Constraint::Length(14), // Search button
        ])
        .split(area);

        let input_props =
            Self::input_props(props.value, props.is_focused, Some(Color::Rgb(60, 66, 80)));
        self.input.render(frame, chunks[0], input_props);

        let label = if props.is_fetching {
            "searching…"
        } else {
            "⏎ search"
        };
        let button = Line::from(vec![Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(148, 163, 184))
                .add_modifier(Modifier::BOLD),
        )])
        .centered();
        let button_area = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .split(chunks[1])[0];
        frame.render_widget(Paragraph::new(button), button_area);
    }
}
