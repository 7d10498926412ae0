use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic color roles every palette must define.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Background,
    Text,
    Primary,
    Secondary,
    Accent,
    Surface,
    Border,
}

impl ColorRole {
    pub const ALL: [ColorRole; 7] = [
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Surface,
        ColorRole::Border,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Surface => "surface",
            ColorRole::Border => "border",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#ffffff",
        text: "#1a1a1a",
        primary: "#007AFF",
        secondary: "#5856D6",
        accent: "#FF2D55",
        surface: "#f5f5f5",
        border: "#e0e0e0",
    };

    pub const DARK: Palette = Palette {
        background: "#1a1a1a",
        text: "#ffffff",
        primary: "#0A84FF",
        secondary: "#5E5CE6",
        accent: "#FF375F",
        surface: "#2c2c2c",
        border: "#404040",
    };

    pub fn color(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Text => self.text,
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::Surface => self.surface,
            ColorRole::Border => self.border,
        }
    }

    /// Every role paired with its color, in `ColorRole::ALL` order.
    pub fn entries(&self) -> impl Iterator<Item = (ColorRole, &'static str)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.color(role)))
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &Palette::LIGHT,
            ThemeMode::Dark => &Palette::DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Collector number printed on a card. Sets use either plain integers or
/// prefixed tokens such as `SV-025`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CardNumber {
    Int(u32),
    Text(String),
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardNumber::Int(n) => write!(f, "{}", n),
            CardNumber::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub number: Option<CardNumber>,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
}

impl Card {
    pub fn new(id: &str, name: &str, number: Option<CardNumber>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            number,
            set_name: None,
            rarity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_cover_every_role() {
        assert_eq!(Palette::LIGHT.entries().count(), 7);
        assert_eq!(Palette::DARK.color(ColorRole::Surface), "#2c2c2c");
        assert_eq!(Palette::LIGHT.color(ColorRole::Accent), "#FF2D55");
    }

    #[test]
    fn theme_mode_toggles_and_parses() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn card_number_accepts_numbers_and_strings() {
        let card: Card = serde_json::from_str(r#"{"id":"a","name":"Pikachu","number":25}"#).unwrap();
        assert_eq!(card.number, Some(CardNumber::Int(25)));
        assert_eq!(card.number.unwrap().to_string(), "25");

        let card: Card = serde_json::from_str(r#"{"id":"b","name":"Mew","number":"SV-151"}"#).unwrap();
        assert_eq!(card.number.unwrap().to_string(), "SV-151");

        let card: Card = serde_json::from_str(r#"{"id":"c","name":"Ditto"}"#).unwrap();
        assert!(card.number.is_none());
    }
}
