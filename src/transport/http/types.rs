use crate::domain::Category;
use crate::storage::InventoryStore;
use crate::transport::http::render::TemplateRenderer;
use serde::Serialize;
use std::sync::Arc;

/// Shared state handed to every handler. Collaborators are injected at
/// construction; handlers never reach for process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
    pub renderer: Arc<dyn TemplateRenderer>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>, renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }
}

/// Form-rendering view of a category plus its selection state.
///
/// Selection is presentation state, so it lives in this view type instead of
/// a transient flag on the domain entity.
#[derive(Serialize, Debug, Clone)]
pub struct CategoryChoice {
    #[serde(flatten)]
    pub category: Category,
    pub checked: bool,
}

/// Pairs every category with whether its id appears in `selected`.
pub fn category_choices(categories: Vec<Category>, selected: &[i64]) -> Vec<CategoryChoice> {
    categories
        .into_iter()
        .map(|category| {
            let checked = selected.contains(&category.id);
            CategoryChoice { category, checked }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_mark_only_selected_ids() {
        let categories = vec![
            Category {
                id: 1,
                name: "Tools".to_string(),
            },
            Category {
                id: 2,
                name: "Garden".to_string(),
            },
        ];
        let choices = category_choices(categories, &[2]);
        assert!(!choices[0].checked);
        assert!(choices[1].checked);
    }

    #[test]
    fn choice_serializes_flat() {
        let choice = CategoryChoice {
            category: Category {
                id: 4,
                name: "Tools".to_string(),
            },
            checked: true,
        };
        let value = serde_json::to_value(&choice).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["name"], "Tools");
        assert_eq!(value["checked"], true);
    }
}
