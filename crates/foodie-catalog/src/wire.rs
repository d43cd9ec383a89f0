//! Wire types for the TheMealDB JSON endpoints.
//!
//! ```text
//! GET list.php?a=list     → {"meals":[{"strArea":"Indian"}, ...]}
//! GET filter.php?a=Indian → {"meals":[{"idMeal":"52772","strMeal":"...","strMealThumb":"..."}]}
//!                           {"meals":null}  when the area has no meals
//! ```

use serde::Deserialize;

use foodie_core::{CatalogItem, Category};

/// Envelope shared by every endpoint. A `null` list means "no results".
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct AreaRecord {
    #[serde(rename = "strArea")]
    pub area: String,
}

#[derive(Debug, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumb: Option<String>,
}

impl From<AreaRecord> for Category {
    fn from(record: AreaRecord) -> Self {
        Category::new(record.area)
    }
}

impl MealSummary {
    pub fn into_item(self, category: &str) -> CatalogItem {
        CatalogItem::new(self.id, self.name, self.thumb.unwrap_or_default(), category)
    }
}
