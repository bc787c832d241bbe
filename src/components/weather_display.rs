use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, ErrorBanner, ErrorBannerProps, SearchBar, SearchBarProps, WeatherBody,
    WeatherBodyProps,
};
use crate::action::Action;
use crate::state::AppState;
use crate::view::Projection;

pub const TITLE: &str = "CelestaClima.";
pub const PROFILE_LINK: &str = "github.com/Ryu7ken";

const SEARCH_WIDTH: u16 = 56;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    /// Today's date, already formatted
    pub date: &'a str,
    pub is_focused: bool,
}

/// The whole screen: title, search field, conditions, banner, hints
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            let ctrl_c =
                key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        // Everything else is typing
        self.search
            .handle_event(
                event,
                SearchBarProps {
                    value: &props.state.input,
                    is_focused: true,
                    is_fetching: props.state.is_fetching(),
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let projection = Projection::from_state(props.state);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title bar
            Constraint::Length(1),
            Constraint::Length(3), // Search
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        render_title(frame, chunks[0]);

        let [search_area] = Layout::horizontal([Constraint::Max(SEARCH_WIDTH)])
            .flex(Flex::Center)
            .areas(chunks[2]);
        self.search.render(
            frame,
            search_area,
            SearchBarProps {
                value: &props.state.input,
                is_focused: props.is_focused,
                is_fetching: projection.fetching,
            },
        );

        let mut body = WeatherBody;
        body.render(
            frame,
            chunks[3],
            WeatherBodyProps {
                projection: &projection,
                date: props.date,
            },
        );

        if let Some(message) = projection.banner.as_deref() {
            let mut banner = ErrorBanner;
            banner.render(frame, chunks[3], ErrorBannerProps { message });
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[4],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {TITLE}"),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        left,
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                format!("{PROFILE_LINK} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ))
            .right_aligned(),
        ),
        right,
    );
}
