//! Static recommendation catalog behind a substitutable repository interface.
//!
//! Tables are built in memory at process start and shared read-only. The
//! [`Catalog`] trait is the seam a real product store would plug into: the
//! selection logic upstream only sees owned buckets coming out of async,
//! fallible lookups.
//!
//! Lookups are total. A raw profile value that falls outside the known
//! vocabulary resolves to a designated default bucket (see [`keys`]) instead
//! of producing an error, so no request can fail because of what a profile
//! contains.

use async_trait::async_trait;
use styleguru_core::catalog::{CareAdvice, CatalogItem, Meal};
use thiserror::Error;

mod accessories;
mod care;
mod clothing;
mod eyewear;
pub mod keys;
mod meals;
mod products;
pub mod retail;
mod workouts;

pub use clothing::ClothingRack;
pub use keys::{FaceShape, Gender, ProductKind};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),
}

/// Read-only recommendation data provider.
///
/// Implementations take raw profile strings as lookup keys and resolve them
/// to a bucket themselves, so callers never pre-validate vocabulary. The
/// static implementation never fails; the error channel exists for backends
/// with real I/O.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Tops, bottoms, and shoes for a gender.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the backing store cannot be
    /// reached.
    async fn clothing_rack(&self, gender: &str) -> Result<ClothingRack, CatalogError>;

    /// Accessory shelf for a gender.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the backing store cannot be
    /// reached.
    async fn accessories(&self, gender: &str) -> Result<Vec<CatalogItem>, CatalogError>;

    /// Frames suited to a face shape.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the backing store cannot be
    /// reached.
    async fn eyewear(&self, face_shape: &str) -> Result<Vec<CatalogItem>, CatalogError>;

    /// The full tagged meal table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the backing store cannot be
    /// reached.
    async fn meals(&self) -> Result<Vec<Meal>, CatalogError>;

    /// Skin and hair advice for a gender and skin type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the backing store cannot be
    /// reached.
    async fn care_advice(&self, gender: &str, skin_type: &str)
        -> Result<CareAdvice, CatalogError>;

    /// Care products of a kind for a gender, keyed by skin or hair type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the backing store cannot be
    /// reached.
    async fn care_products(
        &self,
        kind: ProductKind,
        gender: &str,
        type_key: &str,
    ) -> Result<Vec<CatalogItem>, CatalogError>;

    /// Exercise list for a gender, goal, and experience level.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the backing store cannot be
    /// reached.
    async fn workout_exercises(
        &self,
        gender: &str,
        goal: &str,
        level: &str,
    ) -> Result<Vec<String>, CatalogError>;
}

/// In-memory catalog with the full table set.
#[derive(Debug)]
pub struct StaticCatalog {
    clothing: clothing::ClothingTable,
    accessories: accessories::AccessoryTable,
    eyewear: eyewear::EyewearTable,
    meals: Vec<Meal>,
    care: care::CareTable,
    products: products::ProductTable,
    workouts: workouts::WorkoutTable,
}

impl StaticCatalog {
    /// Build the full catalog. Display prices for styled items are drawn
    /// from their ranges once, here.
    #[must_use]
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            clothing: clothing::ClothingTable::build(&mut rng),
            accessories: accessories::AccessoryTable::build(&mut rng),
            eyewear: eyewear::EyewearTable::build(&mut rng),
            meals: meals::meal_table(),
            care: care::CareTable::build(),
            products: products::ProductTable::build(),
            workouts: workouts::WorkoutTable::build(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn clothing_rack(&self, gender: &str) -> Result<ClothingRack, CatalogError> {
        Ok(self.clothing.rack(Gender::from_key(gender)).clone())
    }

    async fn accessories(&self, gender: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self.accessories.shelf(Gender::from_key(gender)).to_vec())
    }

    async fn eyewear(&self, face_shape: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self.eyewear.frames(FaceShape::from_key(face_shape)).to_vec())
    }

    async fn meals(&self) -> Result<Vec<Meal>, CatalogError> {
        Ok(self.meals.clone())
    }

    async fn care_advice(
        &self,
        gender: &str,
        skin_type: &str,
    ) -> Result<CareAdvice, CatalogError> {
        Ok(self.care.advice(Gender::from_key(gender), skin_type).clone())
    }

    async fn care_products(
        &self,
        kind: ProductKind,
        gender: &str,
        type_key: &str,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self
            .products
            .items(kind, Gender::from_key(gender), type_key)
            .to_vec())
    }

    async fn workout_exercises(
        &self,
        gender: &str,
        goal: &str,
        level: &str,
    ) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .workouts
            .exercises(Gender::from_key(gender), goal, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_face_shape_resolves_to_the_oval_bucket() {
        let catalog = StaticCatalog::new();
        let unknown = catalog.eyewear("Triangle").await.unwrap();
        let oval = catalog.eyewear("Oval").await.unwrap();
        assert_eq!(unknown, oval);
    }

    #[tokio::test]
    async fn same_face_shape_always_returns_the_same_bucket() {
        let catalog = StaticCatalog::new();
        let first = catalog.eyewear("Heart").await.unwrap();
        let second = catalog.eyewear("Heart").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_gender_resolves_to_the_neutral_rack() {
        let catalog = StaticCatalog::new();
        let rack = catalog.clothing_rack("Nonbinary").await.unwrap();
        assert_eq!(rack.tops[0].name, "H&M Oversized Graphic Tee");
    }

    #[tokio::test]
    async fn meal_table_is_fully_populated() {
        let catalog = StaticCatalog::new();
        let meals = catalog.meals().await.unwrap();
        assert_eq!(meals.len(), 19);
    }
}
