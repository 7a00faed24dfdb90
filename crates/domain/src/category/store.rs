use super::{Category, CategoryIdentifier, NewCategory};
use crate::common::BoardError;

/// Categories in insertion order.
///
/// Removing a category never touches tasks that reference it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn list_all(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn contains(&self, id: &CategoryIdentifier) -> bool {
        self.position(id).is_some()
    }

    pub fn insert(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// # Errors
    ///
    /// [`BoardError::MissingField`] if the name is absent or empty.
    pub fn create(
        &mut self,
        draft: NewCategory,
        id: CategoryIdentifier,
    ) -> Result<Category, BoardError> {
        let category = Category::create(draft, id)?;
        self.categories.push(category.clone());
        Ok(category)
    }

    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no category has this id.
    pub fn delete(&mut self, id: &CategoryIdentifier) -> Result<Category, BoardError> {
        let index = self
            .position(id)
            .ok_or_else(BoardError::category_not_found)?;
        Ok(self.categories.remove(index))
    }

    fn position(&self, id: &CategoryIdentifier) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.id() == id)
    }
}
