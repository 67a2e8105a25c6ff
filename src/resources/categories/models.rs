//! Category Models

use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, pagination::PaginatedResponse, resources::products::Product};

/// Category Id
pub type CategoryId = TypedId<Category>;

/// Catalog category. `children` is only filled by tree-shaped listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id.
    pub id: CategoryId,
    /// Localized name.
    pub name: String,
    /// URL slug.
    pub link_rewrite: Option<String>,
    /// Parent category; absent for the root.
    pub id_parent: Option<CategoryId>,
    /// Depth in the tree, root included.
    pub level_depth: Option<u32>,

    /// Active products in this category.
    #[serde(default, alias = "nb_products")]
    pub product_count: u64,

    /// HTML.
    pub description: Option<String>,
    /// Category image URL.
    pub image: Option<String>,

    /// Subcategories, in display order.
    #[serde(default)]
    pub children: Vec<Category>,
}

impl Category {
    /// Whether no subcategories were returned.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first search of this category and its descendants.
    pub fn find(&self, id: CategoryId) -> Option<&Category> {
        if self.id == id {
            return Some(self);
        }

        self.children.iter().find_map(|child| child.find(id))
    }

    /// This category followed by all of its descendants, depth first.
    pub fn flatten(&self) -> Vec<&Category> {
        let mut stack = vec![self];
        let mut flat = Vec::new();

        while let Some(category) = stack.pop() {
            flat.push(category);
            stack.extend(category.children.iter().rev());
        }

        flat
    }
}

/// A category with one page of its products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProducts {
    /// The category itself.
    pub category: Category,
    /// One page of its products.
    pub products: PaginatedResponse<Product>,
}
