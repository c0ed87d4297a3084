//! Request and response bodies of the form endpoints.
//!
//! Text fields default to empty so a missing field is reported as required
//! by the validator instead of failing deserialization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::{GalleryImage, Review};

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub name: String,
    pub rating: Option<f64>,
    #[serde(default)]
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct AdmissionForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub course: String,
    pub message: Option<String>,
}

/// Review as shown on the public site
#[derive(Debug, Serialize)]
pub struct PublicReview {
    pub id: Uuid,
    pub name: String,
    pub rating: f64,
    pub body: String,
}

impl From<Review> for PublicReview {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            name: review.name,
            rating: review.rating,
            body: review.body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
}

impl From<GalleryImage> for GalleryItem {
    fn from(image: GalleryImage) -> Self {
        Self {
            image_url: image.display_url(),
            id: image.id,
            title: image.title,
        }
    }
}
