use crate::models::{Movie, MovieId};
use crate::ui::action::Action;
use crate::ui::render::{rating_label, year_label};

/// Genre tag shown when a movie has no genre string
pub const FALLBACK_GENRE_TAG: &str = "Movie";

/// Where a dismissal click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog
    Backdrop,
    /// Anywhere inside the dialog
    Content,
}

/// Detail overlay contents for one movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub movie_id: MovieId,
    pub image_url: Option<String>,
    pub title: String,
    pub description: String,
    pub year: String,
    pub rating: String,
    pub genre_tag: String,
    pub play: Action,
}

impl ModalView {
    pub fn new(movie: &Movie, play_watch_time: u32) -> Self {
        Self {
            movie_id: movie.id,
            image_url: movie.image_url.clone(),
            title: movie.title.clone(),
            description: movie.description.clone().unwrap_or_default(),
            year: year_label(movie),
            rating: rating_label(movie),
            genre_tag: movie
                .primary_genre()
                .unwrap_or(FALLBACK_GENRE_TAG)
                .to_string(),
            play: Action::play(movie.id, &movie.title, play_watch_time),
        }
    }
}

/// Overlay state, orthogonal to the base view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    current: Option<ModalView>,
}

impl ModalController {
    pub fn open(&mut self, movie: &Movie, play_watch_time: u32) {
        self.current = Some(ModalView::new(movie, play_watch_time));
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Closes only when the click targeted the backdrop itself
    pub fn dismiss(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop if self.current.is_some() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Movie currently inspected
    pub fn inspected(&self) -> Option<MovieId> {
        self.current.as_ref().map(|view| view.movie_id)
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(genre: &str) -> Movie {
        Movie {
            id: MovieId(11),
            title: "Se7en".to_string(),
            description: Some("Two detectives".to_string()),
            year: Some(1995),
            rating: Some(8.6),
            genre: genre.to_string(),
            image_url: Some("https://img.example/se7en.jpg".to_string()),
            match_score: None,
            match_reason: None,
        }
    }

    #[test]
    fn test_open_populates_view() {
        let mut modal = ModalController::default();
        modal.open(&movie("Crime|Thriller"), 600);

        let view = modal.view().unwrap();
        assert_eq!(view.title, "Se7en");
        assert_eq!(view.year, "1995");
        assert_eq!(view.rating, "8.6 ★");
        assert_eq!(view.genre_tag, "Crime");
        assert_eq!(view.play, Action::play(MovieId(11), "Se7en", 600));
        assert_eq!(modal.inspected(), Some(MovieId(11)));
    }

    #[test]
    fn test_genre_tag_fallback() {
        let view = ModalView::new(&movie(""), 600);
        assert_eq!(view.genre_tag, "Movie");
    }

    #[test]
    fn test_content_click_keeps_modal_open() {
        let mut modal = ModalController::default();
        modal.open(&movie("Crime"), 600);

        assert!(!modal.dismiss(ClickTarget::Content));
        assert!(modal.is_open());
    }

    #[test]
    fn test_backdrop_click_closes_modal() {
        let mut modal = ModalController::default();
        modal.open(&movie("Crime"), 600);

        assert!(modal.dismiss(ClickTarget::Backdrop));
        assert!(!modal.is_open());
        assert_eq!(modal.inspected(), None);
        // Already closed
        assert!(!modal.dismiss(ClickTarget::Backdrop));
    }
}
