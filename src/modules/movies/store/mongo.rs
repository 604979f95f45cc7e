//! MongoDB backend.
//!
//! Movies live in a single collection, one document per movie:
//!
//! ```text
//! { _id: ObjectId, title: String, genre: String, rating: Double, streamingLink: String }
//! ```
//!
//! The `_id` is rendered to clients as its hex string. A path id that is
//! not a valid ObjectId cannot match any document and is reported as
//! missing rather than as a driver error.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::{MovieRepository, contains_pattern};
use crate::modules::movies::model::{CreateMovieDto, Movie, UpdateMovieDto};

#[derive(Debug, Serialize, Deserialize)]
struct MovieDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    genre: String,
    rating: f64,
    #[serde(rename = "streamingLink")]
    streaming_link: String,
}

impl From<MovieDocument> for Movie {
    fn from(doc: MovieDocument) -> Self {
        Movie {
            id: doc.id.to_hex(),
            title: doc.title,
            genre: doc.genre,
            rating: doc.rating,
            streaming_link: doc.streaming_link,
        }
    }
}

/// `$set` body carrying only the fields present in `changes`.
fn set_document(changes: &UpdateMovieDto) -> Document {
    let mut set = Document::new();
    if let Some(title) = &changes.title {
        set.insert("title", title.as_str());
    }
    if let Some(genre) = &changes.genre {
        set.insert("genre", genre.as_str());
    }
    if let Some(rating) = changes.rating {
        set.insert("rating", rating);
    }
    if let Some(streaming_link) = &changes.streaming_link {
        set.insert("streamingLink", streaming_link.as_str());
    }
    set
}

fn search_filter(text: &str) -> Document {
    let pattern = contains_pattern(text);
    doc! {
        "$or": [
            { "title": { "$regex": pattern.as_str(), "$options": "i" } },
            { "genre": { "$regex": pattern.as_str(), "$options": "i" } },
        ]
    }
}

#[derive(Clone, Debug)]
pub struct MongoMovieRepository {
    database: Database,
    collection: Collection<MovieDocument>,
}

impl MongoMovieRepository {
    pub fn new(database: Database, collection_name: &str) -> Self {
        let collection = database.collection(collection_name);
        Self {
            database,
            collection,
        }
    }

    async fn collect(&self, filter: Document) -> Result<Vec<Movie>> {
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| anyhow!("Failed to query movies: {}", e))?;

        let documents: Vec<MovieDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to read movies: {}", e))?;

        Ok(documents.into_iter().map(Movie::from).collect())
    }
}

#[async_trait]
impl MovieRepository for MongoMovieRepository {
    async fn insert(&self, movie: &CreateMovieDto) -> Result<Movie> {
        let document = MovieDocument {
            id: ObjectId::new(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            rating: movie.rating,
            streaming_link: movie.streaming_link.clone(),
        };

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| anyhow!("Failed to create movie: {}", e))?;

        Ok(document.into())
    }

    async fn find_all(&self) -> Result<Vec<Movie>> {
        self.collect(doc! {}).await
    }

    async fn find_matching(&self, text: &str) -> Result<Vec<Movie>> {
        self.collect(search_filter(text)).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| anyhow!("Failed to get movie: {}", e))?;

        Ok(document.map(Movie::from))
    }

    async fn update_by_id(&self, id: &str, changes: &UpdateMovieDto) -> Result<Option<Movie>> {
        if changes.is_empty() {
            // MongoDB rejects an empty `$set`
            return self.find_by_id(id).await;
        }

        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set_document(changes) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| anyhow!("Failed to update movie: {}", e))?;

        Ok(document.map(Movie::from))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| anyhow!("Failed to delete movie: {}", e))?;

        Ok(document.map(Movie::from))
    }

    async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| anyhow!("MongoDB ping failed: {}", e))?;
        Ok(())
    }
}
