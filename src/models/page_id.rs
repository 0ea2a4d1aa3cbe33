use serde::{Deserialize, Serialize};

/// One of the five views the site can show.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    About,
    Services,
    Wellness,
    Contact,
}

impl PageId {
    /// Every page, in navigation order.
    pub const ALL: [PageId; 5] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Wellness,
        Self::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Wellness => "wellness",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Wellness => "Wellness",
            Self::Contact => "Contact",
        }
    }

    /// Lenient parse for external input: anything unknown lands on `Home`.
    pub fn parse_or_home(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            "services" => Ok(Self::Services),
            "wellness" => Ok(Self::Wellness),
            "contact" => Ok(Self::Contact),
            _ => Err(format!("invalid page id: {}", s)),
        }
    }
}
