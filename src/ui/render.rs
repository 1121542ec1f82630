use crate::models::Movie;
use crate::store::EntityCache;
use crate::ui::action::Action;
use crate::ui::screen::{Card, Hero, Region, Tag};

pub const EMPTY_LIST_MESSAGE: &str = "No movies found.";
pub const EMPTY_INTERESTS_MESSAGE: &str = "No interests yet";

/// Builds cards, tags and the hero from backend records
///
/// Every movie that reaches a card is written to the entity cache first, so
/// any identifier a rendered affordance refers to can be resolved.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Seconds reported by card play buttons
    pub play_watch_time: u32,
    /// Seconds reported by the hero play button
    pub hero_watch_time: u32,
}

impl Renderer {
    pub fn new(play_watch_time: u32, hero_watch_time: u32) -> Self {
        Self {
            play_watch_time,
            hero_watch_time,
        }
    }

    pub fn card(&self, movie: &Movie) -> Card {
        Card {
            movie_id: movie.id,
            title: movie.title.clone(),
            image_url: movie.image_url.clone(),
            year: year_label(movie),
            rating: rating_label(movie),
            match_label: movie
                .match_score
                .filter(|score| *score > 0)
                .map(|score| format!("{}% Match", score)),
            match_reason: movie.match_reason.clone().filter(|r| !r.is_empty()),
            open: Action::Inspect { movie_id: movie.id },
            play: Action::play(movie.id, &movie.title, self.play_watch_time),
            like: Action::like(movie.id, &movie.title),
            info: Action::Inspect { movie_id: movie.id },
        }
    }

    /// Caches and renders a list, replacing whatever the region held
    pub fn list(&self, cache: &mut EntityCache, movies: Vec<Movie>) -> Region<Card> {
        self.list_or(cache, movies, EMPTY_LIST_MESSAGE)
    }

    pub fn list_or(
        &self,
        cache: &mut EntityCache,
        movies: Vec<Movie>,
        empty_message: &str,
    ) -> Region<Card> {
        if movies.is_empty() {
            return Region::Empty(empty_message.to_string());
        }

        let cards = movies
            .into_iter()
            .map(|movie| {
                let card = self.card(&movie);
                cache.put(movie);
                card
            })
            .collect();

        Region::Ready(cards)
    }

    pub fn interests(&self, interests: Vec<String>) -> Region<Tag> {
        if interests.is_empty() {
            return Region::Empty(EMPTY_INTERESTS_MESSAGE.to_string());
        }

        let tags = interests
            .into_iter()
            .map(|genre| Tag {
                label: genre.clone(),
                action: Action::OpenGenre { genre },
            })
            .collect();

        Region::Ready(tags)
    }

    pub fn hero(&self, movie: &Movie) -> Hero {
        Hero {
            movie_id: movie.id,
            title: movie.title.clone(),
            description: movie.description.clone().unwrap_or_default(),
            image_url: movie.image_url.clone(),
            play: Action::play(movie.id, &movie.title, self.hero_watch_time),
        }
    }
}

pub fn year_label(movie: &Movie) -> String {
    movie.year.map(|y| y.to_string()).unwrap_or_default()
}

pub fn rating_label(movie: &Movie) -> String {
    match movie.rating {
        Some(rating) => format!("{} ★", rating),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id: MovieId(id),
            title: title.to_string(),
            description: Some(format!("About {}", title)),
            year: Some(1999),
            rating: Some(8.7),
            genre: "Action|Sci-Fi".to_string(),
            image_url: Some(format!("https://img.example/{}.jpg", id)),
            match_score: None,
            match_reason: None,
        }
    }

    fn renderer() -> Renderer {
        Renderer::new(600, 300)
    }

    #[test]
    fn test_card_labels_and_actions() {
        let card = renderer().card(&movie(1, "The Matrix"));

        assert_eq!(card.title, "The Matrix");
        assert_eq!(card.year, "1999");
        assert_eq!(card.rating, "8.7 ★");
        assert_eq!(card.match_label, None);
        assert_eq!(card.open, Action::Inspect { movie_id: MovieId(1) });
        assert_eq!(card.play, Action::play(MovieId(1), "The Matrix", 600));
        assert_eq!(card.like, Action::like(MovieId(1), "The Matrix"));
    }

    #[test]
    fn test_card_match_label() {
        let mut rec = movie(2, "Dark City");
        rec.match_score = Some(87);
        rec.match_reason = Some("Because you watch Sci-Fi".to_string());

        let card = renderer().card(&rec);
        assert_eq!(card.match_label.as_deref(), Some("87% Match"));
        assert_eq!(card.match_reason.as_deref(), Some("Because you watch Sci-Fi"));
    }

    #[test]
    fn test_list_caches_every_rendered_movie() {
        let mut cache = EntityCache::new();
        let movies = vec![movie(1, "The Matrix"), movie(2, "Dark City")];

        let region = renderer().list(&mut cache, movies.clone());

        assert_eq!(region.items().len(), 2);
        for (card, original) in region.items().iter().zip(&movies) {
            assert_eq!(cache.get(card.movie_id), Some(original));
        }
    }

    #[test]
    fn test_empty_list_placeholder() {
        let mut cache = EntityCache::new();
        let region = renderer().list(&mut cache, vec![]);
        assert_eq!(region, Region::Empty("No movies found.".to_string()));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_interest_tags_open_genre() {
        let region = renderer().interests(vec!["Drama".to_string(), "Crime".to_string()]);
        let tags = region.items();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].label, "Drama");
        assert_eq!(
            tags[1].action,
            Action::OpenGenre {
                genre: "Crime".to_string()
            }
        );
    }

    #[test]
    fn test_no_interests_placeholder() {
        let region = renderer().interests(vec![]);
        assert_eq!(region.message(), Some("No interests yet"));
    }

    #[test]
    fn test_hero_uses_hero_watch_time() {
        let hero = renderer().hero(&movie(5, "Alien"));
        assert_eq!(hero.play, Action::play(MovieId(5), "Alien", 300));
        assert_eq!(hero.description, "About Alien");
    }

    #[test]
    fn test_rating_label_whole_number() {
        let mut m = movie(1, "Heat");
        m.rating = Some(9.0);
        assert_eq!(rating_label(&m), "9 ★");
        m.rating = None;
        assert_eq!(rating_label(&m), "-");
    }
}
