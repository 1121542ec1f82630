use std::fmt::{self, Display};

use crate::error::FailureKind;
use crate::models::MovieId;
use crate::ui::action::Action;

/// Independently loaded region of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Recommendations,
    Interests,
    Trending,
    History,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Recommendations,
        Section::Interests,
        Section::Trending,
        Section::History,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Recommendations => "recommendations",
            Section::Interests => "interests",
            Section::Trending => "trending",
            Section::History => "history",
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            Section::Recommendations => "Loading recommendations...",
            Section::Interests => "Loading interests...",
            Section::Trending => "Loading trending...",
            Section::History => "Loading history...",
        }
    }

    /// Placeholder shown when this section fails
    pub fn failure_message(&self, kind: FailureKind) -> &'static str {
        match (self, kind) {
            (Section::Recommendations, FailureKind::Unavailable) => {
                "Failed to load recommendations."
            }
            (Section::Recommendations, FailureKind::Unreachable) => {
                "Available after you watch (5m+) some content."
            }
            (Section::Interests, FailureKind::Unavailable) => "Could not load interests.",
            (Section::Interests, FailureKind::Unreachable) => "Could not reach the server.",
            (Section::Trending, FailureKind::Unavailable) => "Failed to load trending content.",
            (Section::Trending, FailureKind::Unreachable) => "Could not reach the server.",
            (Section::History, FailureKind::Unavailable) => "No history yet.",
            (Section::History, FailureKind::Unreachable) => "Could not reach the server.",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Contents of one list/grid region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region<T> {
    Loading(String),
    Ready(Vec<T>),
    /// Loaded successfully but nothing to show
    Empty(String),
    /// Section-scoped error placeholder
    Failed(String),
}

impl<T> Region<T> {
    pub fn loading(message: &str) -> Self {
        Region::Loading(message.to_string())
    }

    pub fn items(&self) -> &[T] {
        match self {
            Region::Ready(items) => items.as_slice(),
            _ => &[],
        }
    }

    /// Placeholder text, for every state except `Ready`
    pub fn message(&self) -> Option<&str> {
        match self {
            Region::Loading(msg) | Region::Empty(msg) | Region::Failed(msg) => Some(msg.as_str()),
            Region::Ready(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Region::Failed(_))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Region::Ready(_))
    }
}

/// One rendered movie card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub movie_id: MovieId,
    pub title: String,
    pub image_url: Option<String>,
    pub year: String,
    pub rating: String,
    /// `"{score}% Match"`, recommendations only
    pub match_label: Option<String>,
    pub match_reason: Option<String>,
    /// Activated by clicking the card body
    pub open: Action,
    pub play: Action,
    pub like: Action,
    pub info: Action,
}

/// Clickable interest tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    pub action: Action,
}

/// Promotional banner for one trending movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub movie_id: MovieId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub play: Action,
}

/// Secondary view listing every movie of one genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenrePanel {
    pub genre: String,
    pub title: String,
    pub list: Region<Card>,
}

impl GenrePanel {
    pub fn loading(genre: &str) -> Self {
        Self {
            genre: genre.to_string(),
            title: format!("{} Movies", genre),
            list: Region::loading("Loading..."),
        }
    }
}

/// Everything the dashboard currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub welcome: String,
    pub hero: Option<Hero>,
    pub recommendations: Region<Card>,
    pub interests: Region<Tag>,
    pub trending: Region<Card>,
    pub history: Region<Card>,
    pub genre: Option<GenrePanel>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            welcome: String::new(),
            hero: None,
            recommendations: Region::loading(Section::Recommendations.loading_message()),
            interests: Region::loading(Section::Interests.loading_message()),
            trending: Region::loading(Section::Trending.loading_message()),
            history: Region::loading(Section::History.loading_message()),
            genre: None,
        }
    }
}

impl Screen {
    /// Resets every section to its loading placeholder
    ///
    /// The hero keeps showing the previous pick until trending answers.
    pub fn show_loading(&mut self) {
        self.recommendations = Region::loading(Section::Recommendations.loading_message());
        self.interests = Region::loading(Section::Interests.loading_message());
        self.trending = Region::loading(Section::Trending.loading_message());
        self.history = Region::loading(Section::History.loading_message());
    }

    /// Placeholder text of a section, if it is not showing items
    pub fn section_message(&self, section: Section) -> Option<&str> {
        match section {
            Section::Recommendations => self.recommendations.message(),
            Section::Interests => self.interests.message(),
            Section::Trending => self.trending.message(),
            Section::History => self.history.message(),
        }
    }

    pub fn section_failed(&self, section: Section) -> bool {
        match section {
            Section::Recommendations => self.recommendations.is_failed(),
            Section::Interests => self.interests.is_failed(),
            Section::Trending => self.trending.is_failed(),
            Section::History => self.history.is_failed(),
        }
    }

    /// Every card currently rendered in the dashboard and drill-down
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.recommendations
            .items()
            .iter()
            .chain(self.trending.items())
            .chain(self.history.items())
            .chain(self.genre.iter().flat_map(|panel| panel.list.items()))
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, heading: &str, region: &Region<Card>) -> fmt::Result {
    writeln!(f, "== {} ==", heading)?;
    match region {
        Region::Ready(cards) => {
            for card in cards {
                write!(f, "  [{}] {} ({}, {})", card.movie_id, card.title, card.year, card.rating)?;
                if let Some(label) = &card.match_label {
                    write!(f, " {}", label)?;
                }
                writeln!(f)?;
            }
            Ok(())
        }
        other => writeln!(f, "  {}", other.message().unwrap_or_default()),
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.welcome)?;
        if let Some(hero) = &self.hero {
            writeln!(f, "** {} **", hero.title)?;
            writeln!(f, "{}", hero.description)?;
        }

        writeln!(f, "== Interests ==")?;
        match &self.interests {
            Region::Ready(tags) => {
                let labels: Vec<&str> = tags.iter().map(|t| t.label.as_str()).collect();
                writeln!(f, "  {}", labels.join(" | "))?;
            }
            other => writeln!(f, "  {}", other.message().unwrap_or_default())?,
        }

        write_cards(f, "Recommended for you", &self.recommendations)?;
        write_cards(f, "Trending now", &self.trending)?;
        write_cards(f, "Watch history", &self.history)?;

        if let Some(panel) = &self.genre {
            write_cards(f, &panel.title, &panel.list)?;
        }
        Ok(())
    }
}
