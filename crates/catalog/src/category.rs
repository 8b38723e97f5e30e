use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use stockwise_core::{CategoryId, DomainError, DomainResult, Entity, index_by_id};

/// Category node.
///
/// The parent link is a plain id reference: a category does not own its parent
/// or children, and the tree is only navigable through [`CategoryTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    pub slug: String,
    /// Cached product count, maintained by the store.
    #[serde(default)]
    pub count: u32,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            slug: slugify(&name),
            name,
            description: None,
            parent_id: None,
            count: 0,
        }
    }

    pub fn with_parent(mut self, parent_id: CategoryId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.parent_id == Some(self.id) {
            return Err(DomainError::invariant("category cannot be its own parent"));
        }
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// URL-safe slug: lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Read-only index over a category snapshot.
#[derive(Debug)]
pub struct CategoryTree<'a> {
    categories: &'a [Category],
    by_id: HashMap<&'a CategoryId, &'a Category>,
}

impl<'a> CategoryTree<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        Self {
            categories,
            by_id: index_by_id(categories),
        }
    }

    pub fn get(&self, id: &CategoryId) -> Option<&'a Category> {
        self.by_id.get(id).copied()
    }

    /// Parent of `id`, if both exist in the snapshot.
    pub fn parent(&self, id: &CategoryId) -> Option<&'a Category> {
        let parent_id = self.get(id)?.parent_id.as_ref()?;
        self.get(parent_id)
    }

    /// Direct children of `id`, in snapshot order.
    pub fn children(&self, id: &CategoryId) -> Vec<&'a Category> {
        self.categories
            .iter()
            .filter(|c| c.parent_id.as_ref() == Some(id))
            .collect()
    }

    /// Categories with no parent, or whose parent is missing from the snapshot.
    pub fn roots(&self) -> Vec<&'a Category> {
        self.categories
            .iter()
            .filter(|c| match &c.parent_id {
                None => true,
                Some(p) => !self.by_id.contains_key(p),
            })
            .collect()
    }

    /// Names from the outermost ancestor down to `id`.
    ///
    /// Walking stops at a dangling parent or the first repeated id, so a
    /// malformed (cyclic) snapshot still yields a finite path. Unknown ids give
    /// an empty path.
    pub fn path(&self, id: &CategoryId) -> Vec<&'a str> {
        let mut names = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = self.get(id);

        while let Some(category) = cursor {
            if !seen.insert(category.id) {
                break;
            }
            names.push(category.name.as_str());
            cursor = category.parent_id.as_ref().and_then(|p| self.get(p));
        }

        names.reverse();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> CategoryId {
        CategoryId::from_u128(n)
    }

    fn sample() -> Vec<Category> {
        vec![
            Category::new(id(1), "Electronics"),
            Category::new(id(2), "Office Supplies"),
            Category::new(id(3), "Keyboards & Mice").with_parent(id(1)),
            Category::new(id(4), "Monitors").with_parent(id(1)),
            Category::new(id(5), "Wireless").with_parent(id(3)),
        ]
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Office Supplies"), "office-supplies");
        assert_eq!(slugify("  Keyboards & Mice!! "), "keyboards-mice");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn navigation_by_id() {
        let categories = sample();
        let tree = CategoryTree::new(&categories);

        assert_eq!(tree.parent(&id(5)).map(|c| c.id), Some(id(3)));
        assert!(tree.parent(&id(1)).is_none());

        let children: Vec<_> = tree.children(&id(1)).iter().map(|c| c.id).collect();
        assert_eq!(children, vec![id(3), id(4)]);

        let roots: Vec<_> = tree.roots().iter().map(|c| c.id).collect();
        assert_eq!(roots, vec![id(1), id(2)]);
    }

    #[test]
    fn path_runs_root_to_leaf() {
        let categories = sample();
        let tree = CategoryTree::new(&categories);
        assert_eq!(tree.path(&id(5)), vec!["Electronics", "Keyboards & Mice", "Wireless"]);
        assert!(tree.path(&id(99)).is_empty());
    }

    #[test]
    fn path_terminates_on_cycles() {
        let categories = vec![
            Category::new(id(1), "A").with_parent(id(2)),
            Category::new(id(2), "B").with_parent(id(1)),
        ];
        let tree = CategoryTree::new(&categories);
        assert_eq!(tree.path(&id(1)), vec!["B", "A"]);
        assert!(tree.roots().is_empty());
    }

    #[test]
    fn dangling_parent_counts_as_root() {
        let categories = vec![Category::new(id(1), "Orphan").with_parent(id(42))];
        let tree = CategoryTree::new(&categories);
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.path(&id(1)), vec!["Orphan"]);
    }

    #[test]
    fn validate_rejects_self_parent() {
        let c = Category::new(id(1), "Loop").with_parent(id(1));
        assert!(matches!(c.validate(), Err(DomainError::InvariantViolation(_))));
        assert!(Category::new(id(1), " ").validate().is_err());
    }
}
