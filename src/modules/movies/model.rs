use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Store-assigned identifier (24-character hex ObjectId)
    pub id: String,
    pub title: String,
    pub genre: String,
    pub rating: f64,
    pub streaming_link: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: String,
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: f64,
    #[validate(length(min = 1, message = "streamingLink must not be empty"))]
    pub streaming_link: String,
}

/// Partial update. Only the four catalog fields are accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMovieDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: Option<String>,
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: Option<f64>,
    #[validate(length(min = 1, message = "streamingLink must not be empty"))]
    pub streaming_link: Option<String>,
}

impl UpdateMovieDto {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
            && self.streaming_link.is_none()
    }

    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(streaming_link) = &self.streaming_link {
            movie.streaming_link = streaming_link.clone();
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive text matched against title and genre. Empty matches every movie.
    pub q: Option<String>,
}
