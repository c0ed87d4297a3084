//! Document store for form submissions and page copy.
//!
//! All collections live in one YAML file, rewritten after every change.
//! Values reaching this module have already been validated and sanitized.

use std::{
    collections::HashMap,
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
    sync::RwLock,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_yaml::to_writer;
use uuid::Uuid;

use crate::utils::image_fallback::resolve_image;

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Message sent through the public contact form
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: u64,
}

impl ContactMessage {
    pub fn new(name: String, email: String, phone: Option<String>, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            message,
            created_at: unix_now(),
        }
    }
}

/// Testimonial; hidden from the public list until approved
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub rating: f64,
    pub body: String,
    pub approved: bool,
    pub created_at: u64,
}

impl Review {
    pub fn new(name: String, rating: f64, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            rating,
            body,
            approved: false,
            created_at: unix_now(),
        }
    }
}

/// Application for a course
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Admission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub message: Option<String>,
    pub created_at: u64,
}

impl Admission {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        course: String,
        message: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            course,
            message,
            created_at: unix_now(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub created_at: u64,
}

impl GalleryImage {
    pub fn new(title: String, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            image_url,
            created_at: unix_now(),
        }
    }

    /// The image to show: the stored URL, or a stable placeholder
    pub fn display_url(&self) -> String {
        resolve_image(&self.id.to_string(), self.image_url.as_deref()).to_string()
    }
}

/// Editable copy of one public page (home, about, courses, ...)
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PageCopy {
    pub title: String,
    pub body: String,
    pub updated_at: u64,
}

#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(default)]
struct Collections {
    contacts: Vec<ContactMessage>,
    reviews: Vec<Review>,
    admissions: Vec<Admission>,
    gallery: Vec<GalleryImage>,
    pages: HashMap<String, PageCopy>,
}

pub struct Database {
    path: Option<PathBuf>,
    collections: RwLock<Collections>,
}

impl Database {
    /// Opens the store backed by `path`, starting empty if the file is absent
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let collections = load(&path)?;
        info!("Document store opened at {}", path.display());

        Ok(Self {
            path: Some(path),
            collections: RwLock::new(collections),
        })
    }

    /// Store that never touches the disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            collections: RwLock::new(Collections::default()),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> Result<R> {
        let collections = self.collections.read().or(Err(anyhow!("DB poisoned")))?;
        Ok(f(&collections))
    }

    /// Applies `f` to a copy of the collections and keeps the copy only once
    /// it is saved
    fn write<R>(&self, f: impl FnOnce(&mut Collections) -> R) -> Result<R> {
        let mut collections = self.collections.write().or(Err(anyhow!("DB poisoned")))?;
        let mut updated = collections.clone();
        let result = f(&mut updated);
        if let Some(path) = &self.path {
            save(&updated, path)?;
        }
        *collections = updated;
        Ok(result)
    }

    pub fn add_contact(&self, contact: ContactMessage) -> Result<Uuid> {
        let id = contact.id;
        self.write(|db| db.contacts.push(contact))?;
        debug!("Stored contact message {id}");
        Ok(id)
    }

    pub fn list_contacts(&self) -> Result<Vec<ContactMessage>> {
        self.read(|db| db.contacts.clone())
    }

    pub fn add_review(&self, review: Review) -> Result<Uuid> {
        let id = review.id;
        self.write(|db| db.reviews.push(review))?;
        debug!("Stored review {id}");
        Ok(id)
    }

    /// Marks a review as publishable; false if no review has this id
    pub fn approve_review(&self, id: Uuid) -> Result<bool> {
        self.write(|db| match db.reviews.iter_mut().find(|r| r.id == id) {
            Some(review) => {
                review.approved = true;
                true
            }
            None => false,
        })
    }

    pub fn list_reviews(&self, approved_only: bool) -> Result<Vec<Review>> {
        self.read(|db| {
            db.reviews
                .iter()
                .filter(|r| r.approved || !approved_only)
                .cloned()
                .collect()
        })
    }

    pub fn add_admission(&self, admission: Admission) -> Result<Uuid> {
        let id = admission.id;
        self.write(|db| db.admissions.push(admission))?;
        debug!("Stored admission {id}");
        Ok(id)
    }

    pub fn list_admissions(&self) -> Result<Vec<Admission>> {
        self.read(|db| db.admissions.clone())
    }

    pub fn add_gallery_image(&self, image: GalleryImage) -> Result<Uuid> {
        let id = image.id;
        self.write(|db| db.gallery.push(image))?;
        Ok(id)
    }

    pub fn list_gallery(&self) -> Result<Vec<GalleryImage>> {
        self.read(|db| db.gallery.clone())
    }

    pub fn set_page_copy(&self, page: &str, title: String, body: String) -> Result<()> {
        let copy = PageCopy {
            title,
            body,
            updated_at: unix_now(),
        };
        self.write(|db| {
            db.pages.insert(page.to_string(), copy);
        })
    }

    pub fn page_copy(&self, page: &str) -> Result<Option<PageCopy>> {
        self.read(|db| db.pages.get(page).cloned())
    }
}

/// Writes the collections to YAML, creating the parent directory if needed
fn save(db: &Collections, path: &Path) -> Result<()> {
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            create_dir_all(parent_dir).context("Failed to create data directory")?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    to_writer(file, db).context("Failed to serialize DB")?;
    Ok(())
}

fn load(path: &Path) -> Result<Collections> {
    match File::open(path) {
        Ok(file) => serde_yaml::from_reader(file)
            .with_context(|| format!("Corrupt document store at {}", path.display())),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Collections::default()),
        Err(error) => {
            Err(error).with_context(|| format!("Failed to open {}", path.display()))
        }
    }
}
