use serde::{Deserialize, Serialize};

/// Colour theme of a card; affects styling only.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Wine,
    Blue,
    Gold,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wine => "wine",
            Self::Blue => "blue",
            Self::Gold => "gold",
        }
    }
}

impl std::fmt::Display for CardVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CardVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wine" => Ok(Self::Wine),
            "blue" => Ok(Self::Blue),
            "gold" => Ok(Self::Gold),
            _ => Err(format!("invalid card variant: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ContentCard {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: CardVariant,
}

impl ContentCard {
    pub const fn new(title: &'static str, description: &'static str, variant: CardVariant) -> Self {
        Self {
            title,
            description,
            variant,
        }
    }
}
