use crate::models::{InteractionKind, MovieId};

/// What an affordance does when activated
///
/// Every card, hero, tag and modal button carries one of these, built from the
/// movie it was rendered for. Re-rendering builds fresh values, so an
/// affordance can never point at a movie other than the one it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Report a watch of `watch_time` seconds
    Play {
        movie_id: MovieId,
        title: String,
        watch_time: u32,
    },
    Like {
        movie_id: MovieId,
        title: String,
    },
    /// Open the detail overlay for a cached movie
    Inspect { movie_id: MovieId },
    /// Drill down into one genre
    OpenGenre { genre: String },
}

impl Action {
    pub fn play(movie_id: MovieId, title: &str, watch_time: u32) -> Self {
        Action::Play {
            movie_id,
            title: title.to_string(),
            watch_time,
        }
    }

    pub fn like(movie_id: MovieId, title: &str) -> Self {
        Action::Like {
            movie_id,
            title: title.to_string(),
        }
    }

    /// Interaction this action reports, if any, with its watch time
    pub fn interaction(&self) -> Option<(MovieId, InteractionKind, u32)> {
        match self {
            Action::Play {
                movie_id,
                watch_time,
                ..
            } => Some((*movie_id, InteractionKind::Watch, *watch_time)),
            Action::Like { movie_id, .. } => Some((*movie_id, InteractionKind::Like, 0)),
            Action::Inspect { .. } | Action::OpenGenre { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_reports_watch() {
        let action = Action::play(MovieId(3), "Heat", 600);
        assert_eq!(
            action.interaction(),
            Some((MovieId(3), InteractionKind::Watch, 600))
        );
    }

    #[test]
    fn test_like_reports_zero_watch_time() {
        let action = Action::like(MovieId(3), "Heat");
        assert_eq!(
            action.interaction(),
            Some((MovieId(3), InteractionKind::Like, 0))
        );
    }

    #[test]
    fn test_navigation_reports_nothing() {
        assert_eq!(Action::Inspect { movie_id: MovieId(3) }.interaction(), None);
        assert_eq!(
            Action::OpenGenre {
                genre: "Drama".to_string()
            }
            .interaction(),
            None
        );
    }
}
