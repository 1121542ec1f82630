use std::fmt::Display;

/// Base view shown underneath the modal overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Dashboard,
    GenreDrilldown {
        genre: String,
    },
}

impl ViewState {
    pub fn is_dashboard(&self) -> bool {
        matches!(self, ViewState::Dashboard)
    }

    pub fn genre(&self) -> Option<&str> {
        match self {
            ViewState::GenreDrilldown { genre } => Some(genre.as_str()),
            ViewState::Dashboard => None,
        }
    }

    /// `Dashboard -> GenreDrilldown(genre)`; refused from inside a drill-down
    pub fn drill_into(&mut self, genre: &str) -> bool {
        match self {
            ViewState::Dashboard => {
                *self = ViewState::GenreDrilldown {
                    genre: genre.to_string(),
                };
                true
            }
            ViewState::GenreDrilldown { .. } => false,
        }
    }

    /// `GenreDrilldown -> Dashboard`
    pub fn close_drilldown(&mut self) -> bool {
        match self {
            ViewState::GenreDrilldown { .. } => {
                *self = ViewState::Dashboard;
                true
            }
            ViewState::Dashboard => false,
        }
    }
}

impl Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewState::Dashboard => write!(f, "dashboard"),
            ViewState::GenreDrilldown { genre } => write!(f, "genre:{}", genre),
        }
    }
}
