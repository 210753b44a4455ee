//! Category Hierarchy Resolver
//!
//! Derives the legal options at each of the three selection levels of the
//! product form (main → primary → secondary) from a flat category list,
//! and keeps child selections consistent when an ancestor changes.
//!
//! Everything here is pure, synchronous view-model derivation over
//! already-loaded data; it never raises and never touches the network.
//! An empty category list simply yields empty option lists.

use crate::db::models::{Category, CategoryLevel, CategoryType};

/// Rows with a level or type outside the recognized enumeration are
/// treated as invalid data and silently dropped from every option list.
fn is_valid(category: &Category) -> bool {
    !matches!(category.level, Some(CategoryLevel::Unknown))
        && !matches!(category.category_type, Some(CategoryType::Unknown))
}

/// All main-level categories. No type filtering: both edible and
/// non-edible mains are shown (grouping by type is display-only).
pub fn main_options(categories: &[Category]) -> Vec<&Category> {
    categories
        .iter()
        .filter(|c| is_valid(c) && c.level == Some(CategoryLevel::Main))
        .collect()
}

/// Primary-level children of the selected main; empty when nothing is
/// selected yet.
pub fn primary_options<'a>(
    categories: &'a [Category],
    selected_main: Option<&str>,
) -> Vec<&'a Category> {
    let Some(main_id) = selected_main else {
        return Vec::new();
    };
    categories
        .iter()
        .filter(|c| {
            is_valid(c)
                && c.level == Some(CategoryLevel::Primary)
                && c.parent_id.as_deref() == Some(main_id)
        })
        .collect()
}

/// Secondary-level children of the selected primary; empty when nothing
/// is selected yet.
pub fn secondary_options<'a>(
    categories: &'a [Category],
    selected_primary: Option<&str>,
) -> Vec<&'a Category> {
    let Some(primary_id) = selected_primary else {
        return Vec::new();
    };
    categories
        .iter()
        .filter(|c| {
            is_valid(c)
                && c.level == Some(CategoryLevel::Secondary)
                && c.parent_id.as_deref() == Some(primary_id)
        })
        .collect()
}

/// The `type` tag of the selected main category. Display annotation only;
/// it has no effect on option filtering.
pub fn category_type(categories: &[Category], selected_main: Option<&str>) -> Option<CategoryType> {
    let main_id = selected_main?;
    categories
        .iter()
        .find(|c| c.id == main_id && c.level == Some(CategoryLevel::Main))
        .and_then(|c| c.category_type)
        .filter(|t| *t != CategoryType::Unknown)
}

/// The three category fields of a product draft, with the cascade rules
/// applied as explicit state transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub main: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

impl CategorySelection {
    pub fn new(
        main: Option<String>,
        primary: Option<String>,
        secondary: Option<String>,
    ) -> Self {
        Self {
            main,
            primary,
            secondary,
        }
    }

    /// Selecting a main unconditionally invalidates primary and secondary:
    /// a previous child may belong to a different branch. An empty
    /// sentinel behaves exactly like `None`.
    pub fn set_main(&mut self, new_main: Option<String>) {
        self.main = normalize(new_main);
        self.primary = None;
        self.secondary = None;
    }

    /// Selecting a primary invalidates only the secondary.
    pub fn set_primary(&mut self, new_primary: Option<String>) {
        self.primary = normalize(new_primary);
        self.secondary = None;
    }

    /// No further cascade below secondary.
    pub fn set_secondary(&mut self, new_secondary: Option<String>) {
        self.secondary = normalize(new_secondary);
    }

    /// Check the selected chain against the category list: a selected
    /// primary must be a primary-level child of the selected main, and a
    /// selected secondary a secondary-level child of the selected primary.
    pub fn validate_chain(&self, categories: &[Category]) -> Result<(), String> {
        if let Some(primary_id) = self.primary.as_deref() {
            let Some(main_id) = self.main.as_deref() else {
                return Err("Primary category selected without a main category".to_string());
            };
            let legal = primary_options(categories, Some(main_id))
                .iter()
                .any(|c| c.id == primary_id);
            if !legal {
                return Err(format!(
                    "Category {} is not a primary child of {}",
                    primary_id, main_id
                ));
            }
        }
        if let Some(secondary_id) = self.secondary.as_deref() {
            let Some(primary_id) = self.primary.as_deref() else {
                return Err("Secondary category selected without a primary category".to_string());
            };
            let legal = secondary_options(categories, Some(primary_id))
                .iter()
                .any(|c| c.id == secondary_id);
            if !legal {
                return Err(format!(
                    "Category {} is not a secondary child of {}",
                    secondary_id, primary_id
                ));
            }
        }
        Ok(())
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(
        id: &str,
        level: CategoryLevel,
        parent: Option<&str>,
        category_type: Option<CategoryType>,
    ) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            slug: id.to_string(),
            description: None,
            image_url: None,
            parent_id: parent.map(str::to_string),
            level: Some(level),
            category_type,
            created_at: None,
        }
    }

    fn fixture() -> Vec<Category> {
        vec![
            cat("m1", CategoryLevel::Main, None, Some(CategoryType::Edible)),
            cat("p1", CategoryLevel::Primary, Some("m1"), None),
            cat("s1", CategoryLevel::Secondary, Some("p1"), None),
            cat("p2", CategoryLevel::Primary, Some("m2"), None),
        ]
    }

    #[test]
    fn options_follow_the_parent_chain() {
        let categories = fixture();
        let mut selection = CategorySelection::default();
        selection.set_main(Some("m1".to_string()));

        let primaries = primary_options(&categories, selection.main.as_deref());
        assert_eq!(primaries.len(), 1);
        assert_eq!(primaries[0].id, "p1"); // p2 excluded, wrong parent

        // No secondary options until a primary is picked
        assert!(secondary_options(&categories, selection.primary.as_deref()).is_empty());

        selection.set_primary(Some("p1".to_string()));
        let secondaries = secondary_options(&categories, selection.primary.as_deref());
        assert_eq!(secondaries.len(), 1);
        assert_eq!(secondaries[0].id, "s1");
    }

    #[test]
    fn main_change_resets_descendants() {
        let mut selection = CategorySelection::new(
            Some("m1".into()),
            Some("p1".into()),
            Some("s1".into()),
        );
        selection.set_main(Some("m2".to_string()));
        assert_eq!(selection.main.as_deref(), Some("m2"));
        assert_eq!(selection.primary, None);
        assert_eq!(selection.secondary, None);
    }

    #[test]
    fn primary_change_resets_secondary_only() {
        let mut selection = CategorySelection::new(
            Some("m1".into()),
            Some("p1".into()),
            Some("s1".into()),
        );
        selection.set_primary(Some("p9".to_string()));
        assert_eq!(selection.main.as_deref(), Some("m1"));
        assert_eq!(selection.primary.as_deref(), Some("p9"));
        assert_eq!(selection.secondary, None);
    }

    #[test]
    fn empty_sentinel_clears_like_none() {
        let mut selection = CategorySelection::new(
            Some("m1".into()),
            Some("p1".into()),
            Some("s1".into()),
        );
        selection.set_main(Some(String::new()));
        assert_eq!(selection, CategorySelection::default());
    }

    #[test]
    fn cascade_invariant_holds_over_arbitrary_sequences() {
        let categories = fixture();
        let mut selection = CategorySelection::default();

        let steps: Vec<(&str, Option<&str>)> = vec![
            ("main", Some("m1")),
            ("primary", Some("p1")),
            ("secondary", Some("s1")),
            ("main", Some("m2")),
            ("primary", Some("p2")),
            ("main", None),
            ("main", Some("m1")),
            ("primary", Some("p1")),
        ];

        for (field, value) in steps {
            let value = value.map(str::to_string);
            match field {
                "main" => selection.set_main(value),
                "primary" => selection.set_primary(value),
                _ => selection.set_secondary(value),
            }
            // secondary non-null implies valid primary parent chain
            if selection.secondary.is_some() {
                assert!(selection.primary.is_some());
            }
            if selection.primary.is_some() {
                assert!(selection.main.is_some());
            }
            if selection.validate_chain(&categories).is_ok() && selection.primary.is_some() {
                let legal = primary_options(&categories, selection.main.as_deref());
                assert!(legal.iter().any(|c| Some(c.id.as_str()) == selection.primary.as_deref()));
            }
        }
    }

    #[test]
    fn invalid_rows_are_dropped_from_all_lists() {
        let mut categories = fixture();
        categories.push(Category {
            level: Some(CategoryLevel::Unknown),
            ..cat("weird", CategoryLevel::Main, None, None)
        });
        categories.push(cat(
            "m3",
            CategoryLevel::Main,
            None,
            Some(CategoryType::Unknown),
        ));

        let mains = main_options(&categories);
        assert!(mains.iter().all(|c| c.id != "weird" && c.id != "m3"));
    }

    #[test]
    fn type_annotation_is_display_only() {
        let categories = fixture();
        assert_eq!(
            category_type(&categories, Some("m1")),
            Some(CategoryType::Edible)
        );
        assert_eq!(category_type(&categories, Some("p1")), None);
        assert_eq!(category_type(&categories, None), None);
        assert_eq!(
            CategoryType::Edible.label(),
            Some("Edible Gifts")
        );
    }

    #[test]
    fn chain_validation_rejects_cross_branch_children() {
        let categories = fixture();
        let selection = CategorySelection::new(Some("m1".into()), Some("p2".into()), None);
        assert!(selection.validate_chain(&categories).is_err());

        let selection = CategorySelection::new(Some("m1".into()), Some("p1".into()), Some("s1".into()));
        assert!(selection.validate_chain(&categories).is_ok());
    }
}
