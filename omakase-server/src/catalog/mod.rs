//! Menu catalog: ingestion and in-memory views
//!
//! The catalog is loaded once at startup from a published CSV sheet
//! (see [`source::CatalogFetcher`]) and kept immutable in memory.
//! Rows are triaged individually: a bad row is skipped with a warning,
//! never fatal for the whole load.

pub mod csv;
mod source;

pub use source::CatalogFetcher;

use csv::Record;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CourseCategory, MenuItem};
use shared::types::{MealAvailability, MealPeriod, ServingStyle};
use std::str::FromStr;

/// Shown when a row has no usable image URL
const PLACEHOLDER_IMAGE: &str = "https://placehold.co/250x250/eeeeee/cccccc?text=No+Image";

/// Immutable menu data, grouped by category with mains pre-split by
/// serving style
#[derive(Debug, Default)]
pub struct MenuCatalog {
    soups: Vec<MenuItem>,
    starters: Vec<MenuItem>,
    mains_individual: Vec<MenuItem>,
    mains_sharing: Vec<MenuItem>,
    desserts: Vec<MenuItem>,
    addons: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build an empty catalog (used when every retrieval source failed)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ingest CSV text into a catalog
    pub fn from_csv(text: &str) -> AppResult<Self> {
        let records = csv::parse_records(text)?;
        let mut catalog = Self::default();
        for record in &records {
            if let Some((category, item)) = parse_row(record) {
                catalog.insert(category, item);
            }
        }
        if catalog.len() == 0 {
            return Err(AppError::new(ErrorCode::CatalogEmpty));
        }
        tracing::info!(
            items = catalog.len(),
            rows = records.len(),
            "Menu catalog loaded"
        );
        Ok(catalog)
    }

    fn insert(&mut self, category: CourseCategory, item: MenuItem) {
        match category {
            CourseCategory::Soups => self.soups.push(item),
            CourseCategory::Starters => self.starters.push(item),
            CourseCategory::Mains => match item.serving_style {
                ServingStyle::Sharing => self.mains_sharing.push(item),
                ServingStyle::Individual => self.mains_individual.push(item),
            },
            CourseCategory::Desserts => self.desserts.push(item),
            CourseCategory::Addons => self.addons.push(item),
        }
    }

    /// Items of a category; mains are restricted to the given serving
    /// style (other categories ignore it).
    pub fn items(&self, category: CourseCategory, style: ServingStyle) -> &[MenuItem] {
        match category {
            CourseCategory::Soups => &self.soups,
            CourseCategory::Starters => &self.starters,
            CourseCategory::Mains => match style {
                ServingStyle::Individual => &self.mains_individual,
                ServingStyle::Sharing => &self.mains_sharing,
            },
            CourseCategory::Desserts => &self.desserts,
            CourseCategory::Addons => &self.addons,
        }
    }

    /// Find an item by id within a category/style subset
    pub fn find(
        &self,
        category: CourseCategory,
        style: ServingStyle,
        id: &str,
    ) -> Option<&MenuItem> {
        self.items(category, style).iter().find(|i| i.id == id)
    }

    /// Total number of items
    pub fn len(&self) -> usize {
        self.soups.len()
            + self.starters.len()
            + self.mains_individual.len()
            + self.mains_sharing.len()
            + self.desserts.len()
            + self.addons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Meal-filtered view for clients (the readonly display and the
    /// item grids)
    pub fn view_for(&self, meal: MealPeriod) -> CatalogView {
        let filter = |items: &[MenuItem]| -> Vec<MenuItem> {
            items
                .iter()
                .filter(|i| i.meal_availability.includes(meal))
                .cloned()
                .collect()
        };
        CatalogView {
            meal,
            soups: filter(&self.soups),
            starters: filter(&self.starters),
            mains_individual: filter(&self.mains_individual),
            mains_sharing: filter(&self.mains_sharing),
            desserts: filter(&self.desserts),
            addons: filter(&self.addons),
        }
    }
}

/// Serializable per-meal catalog snapshot
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub meal: MealPeriod,
    pub soups: Vec<MenuItem>,
    pub starters: Vec<MenuItem>,
    pub mains_individual: Vec<MenuItem>,
    pub mains_sharing: Vec<MenuItem>,
    pub desserts: Vec<MenuItem>,
    pub addons: Vec<MenuItem>,
}

/// Triage one catalog row; `None` means the row was skipped
fn parse_row(record: &Record) -> Option<(CourseCategory, MenuItem)> {
    let field = |name: &str| record.get(name).map(|s| s.trim()).unwrap_or_default();

    let category_raw = field("Category");
    let id = field("ID");
    let name = field("Name");
    if category_raw.is_empty() || id.is_empty() || name.is_empty() {
        tracing::warn!(
            category = category_raw,
            id,
            name,
            "Skipping catalog row with missing Category, ID, or Name"
        );
        return None;
    }

    if !truthy(field("IsActive")) {
        tracing::debug!(id, name, "Skipping inactive item");
        return None;
    }

    let category = match CourseCategory::from_str(category_raw) {
        Ok(c) => c,
        Err(_) => {
            tracing::warn!(category = category_raw, name, "Unknown category for item");
            return None;
        }
    };

    let item = MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: field("Description").to_string(),
        image: resolve_image_url(field("Image URL")),
        upgrade_price: Decimal::from_str(field("Upgrade Price")).unwrap_or_default(),
        upgrade_caption: field("Upgrade Caption").to_string(),
        remarks: field("AdditionalRemarks").to_string(),
        remarks_color: match field("RemarksColor") {
            "" => None,
            color => Some(color.to_string()),
        },
        serving_style: ServingStyle::parse(field("ServingStyle")),
        is_signature: truthy(field("IsSignature")),
        meal_availability: MealAvailability::parse(field("MealAvailability")),
    };
    Some((category, item))
}

/// TRUE / 1 / YES, case-insensitive
fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_uppercase().as_str(),
        "TRUE" | "1" | "YES"
    )
}

/// Turn Google Drive share links into direct thumbnail URLs; empty
/// input gets the placeholder.
fn resolve_image_url(url: &str) -> String {
    if url.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if !url.contains("drive.google.com") {
        return url.to_string();
    }
    match drive_file_id(url) {
        Some(id) => format!("https://drive.google.com/thumbnail?id={}&sz=w1000", id),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// First run of 25+ id characters in a Drive URL
fn drive_file_id(url: &str) -> Option<&str> {
    let is_id_char = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
    let mut start: Option<usize> = None;
    for (pos, c) in url.char_indices() {
        if is_id_char(c) {
            start.get_or_insert(pos);
        } else if let Some(s) = start.take()
            && pos - s >= 25
        {
            return Some(&url[s..pos]);
        }
    }
    if let Some(s) = start
        && url.len() - s >= 25
    {
        return Some(&url[s..]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Category,ID,Name,Description,Image URL,Upgrade Price,Upgrade Caption,AdditionalRemarks,ServingStyle,IsSignature,MealAvailability,RemarksColor,IsActive
Soups,s1,Lobster Bisque,Rich broth,,0,,,,TRUE,both,,TRUE
Soups,s2,Old Soup,Retired,,0,,,,FALSE,both,,FALSE
Starters,st1,Scallop Carpaccio,,,40,for premium cut,,individual,YES,dinner,,yes
Mains,m1,Ribeye,,,0,,,individual,TRUE,both,,1
Mains,m2,Whole Fish,,,0,,Chef pick,sharing,FALSE,both,#aa3311,TRUE
Desserts,d1,Tart,,,0,,,,,both,,TRUE
Add-ons,a1,Truffle Fries,,,68,per portion,,,FALSE,both,,TRUE
,x1,No Category,,,0,,,,,both,,TRUE
Sides,x2,Unknown Category,,,0,,,,,both,,TRUE
";

    #[test]
    fn test_ingest_and_grouping() {
        let catalog = MenuCatalog::from_csv(SHEET).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog
                .items(CourseCategory::Soups, ServingStyle::Individual)
                .len(),
            1
        );
        assert_eq!(
            catalog
                .items(CourseCategory::Mains, ServingStyle::Individual)
                .len(),
            1
        );
        assert_eq!(
            catalog
                .items(CourseCategory::Mains, ServingStyle::Sharing)
                .len(),
            1
        );
        assert_eq!(
            catalog
                .items(CourseCategory::Addons, ServingStyle::Individual)
                .len(),
            1
        );
    }

    #[test]
    fn test_inactive_row_dropped() {
        let catalog = MenuCatalog::from_csv(SHEET).unwrap();
        assert!(
            catalog
                .find(CourseCategory::Soups, ServingStyle::Individual, "s2")
                .is_none()
        );
    }

    #[test]
    fn test_lenient_flags() {
        let catalog = MenuCatalog::from_csv(SHEET).unwrap();
        let starter = catalog
            .find(CourseCategory::Starters, ServingStyle::Individual, "st1")
            .unwrap();
        // IsActive=yes, IsSignature=YES both count as true
        assert!(starter.is_signature);
        assert_eq!(starter.upgrade_price, Decimal::from(40));
        let main = catalog
            .find(CourseCategory::Mains, ServingStyle::Individual, "m1")
            .unwrap();
        assert!(main.is_signature);
    }

    #[test]
    fn test_placeholder_image() {
        let catalog = MenuCatalog::from_csv(SHEET).unwrap();
        let soup = catalog
            .find(CourseCategory::Soups, ServingStyle::Individual, "s1")
            .unwrap();
        assert_eq!(soup.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_meal_view_filters() {
        let catalog = MenuCatalog::from_csv(SHEET).unwrap();
        let lunch = catalog.view_for(MealPeriod::Lunch);
        assert!(lunch.starters.is_empty());
        let dinner = catalog.view_for(MealPeriod::Dinner);
        assert_eq!(dinner.starters.len(), 1);
        // Both-availability items appear in every view
        assert_eq!(lunch.soups.len(), 1);
        assert_eq!(dinner.soups.len(), 1);
    }

    #[test]
    fn test_all_rows_invalid_is_empty_error() {
        let err =
            MenuCatalog::from_csv("Category,ID,Name,IsActive\nSoups,s1,Gone,FALSE\n").unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogEmpty);
    }

    #[test]
    fn test_drive_url_rewrite() {
        let url = "https://drive.google.com/file/d/1a2B3c4D5e6F7g8H9i0JkLmNoPqRsTuV/view";
        assert_eq!(
            resolve_image_url(url),
            "https://drive.google.com/thumbnail?id=1a2B3c4D5e6F7g8H9i0JkLmNoPqRsTuV&sz=w1000"
        );
        // Non-Drive URLs pass through untouched
        assert_eq!(
            resolve_image_url("https://example.com/x.jpg"),
            "https://example.com/x.jpg"
        );
        // Drive URL without a long id falls back to the placeholder
        assert_eq!(
            resolve_image_url("https://drive.google.com/short"),
            PLACEHOLDER_IMAGE
        );
    }
}
