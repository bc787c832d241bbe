//! Condition icons as layered ASCII art
//!
//! Each condition is one or more layers of the same size; spaces are
//! transparent, so a rain layer can sit on top of a cloud layer.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

// ============================================================================
// Sprite data
// ============================================================================

mod art {
    pub const SUN: &str = r"   \ | /
 -- ( ) --
   / | \
         ";

    pub const CLOUD: &str = r"   .--.
 .(    ).
(___.__)_)
          ";

    pub const CLOUD_BACK: &str = r"      .-.
   .-(   ).

          ";

    pub const HAZE: &str = r"
 ~~~~~~~~
  ~~~~~~~
 ~~~~~~~~";

    pub const DRIZZLE: &str = r"


  ' ' ' ' ";

    pub const RAIN: &str = r"


 / / / / /";

    pub const SNOW: &str = r"


  * * * * ";

    pub const BOLT: &str = r"


    /_/   ";
}

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);
    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);
        for col_idx in 0..max_width {
            // Last layer is the foreground
            let top = layers
                .iter()
                .zip(&layer_lines)
                .rev()
                .find_map(|(layer, lines)| {
                    lines
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                });
            let (ch, color) = top.unwrap_or((' ', Color::Reset));
            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }
        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Types
// ============================================================================

/// Height of every sprite, in rows
pub const SPRITE_HEIGHT: u16 = 4;

/// Condition categories with an icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Haze,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherCondition {
    /// Map the API's `weather[0].main` category; unknown categories get no icon
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "Clear" => Some(WeatherCondition::Clear),
            "Clouds" => Some(WeatherCondition::Clouds),
            "Haze" => Some(WeatherCondition::Haze),
            "Drizzle" => Some(WeatherCondition::Drizzle),
            "Rain" => Some(WeatherCondition::Rain),
            "Snow" => Some(WeatherCondition::Snow),
            "Thunderstorm" => Some(WeatherCondition::Thunderstorm),
            _ => None,
        }
    }

    /// Emoji representation for when sprites don't fit
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "\u{2600}\u{fe0f}",
            WeatherCondition::Clouds => "\u{2601}\u{fe0f}",
            WeatherCondition::Haze => "\u{1f32b}\u{fe0f}",
            WeatherCondition::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

const GRAY: Color = Color::Rgb(160, 160, 175);
const DARK_GRAY: Color = Color::Rgb(120, 120, 140);
const SKY_BLUE: Color = Color::Rgb(49, 202, 251);

/// Sprite for `condition` if it fits in `available_height` rows.
pub fn weather_sprite(condition: WeatherCondition, available_height: u16) -> Option<Text<'static>> {
    (available_height >= SPRITE_HEIGHT).then(|| get_sprite(condition))
}

/// Get weather art for the given condition
pub fn get_sprite(condition: WeatherCondition) -> Text<'static> {
    let cloud = |color| SpriteLayer {
        content: art::CLOUD,
        color,
    };
    let layers = match condition {
        WeatherCondition::Clear => vec![SpriteLayer {
            content: art::SUN,
            color: Color::Yellow,
        }],
        WeatherCondition::Clouds => vec![
            SpriteLayer {
                content: art::CLOUD_BACK,
                color: DARK_GRAY,
            },
            cloud(GRAY),
        ],
        WeatherCondition::Haze => vec![
            SpriteLayer {
                content: art::CLOUD_BACK,
                color: DARK_GRAY,
            },
            SpriteLayer {
                content: art::HAZE,
                color: GRAY,
            },
        ],
        WeatherCondition::Drizzle => vec![
            cloud(GRAY),
            SpriteLayer {
                content: art::DRIZZLE,
                color: SKY_BLUE,
            },
        ],
        WeatherCondition::Rain => vec![
            cloud(GRAY),
            SpriteLayer {
                content: art::RAIN,
                color: SKY_BLUE,
            },
        ],
        WeatherCondition::Snow => vec![
            cloud(GRAY),
            SpriteLayer {
                content: art::SNOW,
                color: Color::Rgb(200, 220, 255),
            },
        ],
        WeatherCondition::Thunderstorm => vec![
            cloud(DARK_GRAY),
            SpriteLayer {
                content: art::BOLT,
                color: Color::Yellow,
            },
        ],
    };

    composite_layers(&layers)
}
