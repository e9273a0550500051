//! Ordered item list type.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing an [`ItemList`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ItemListError {
    /// The list contains no items.
    #[error("an order must contain at least one item")]
    Empty,
}

/// The ordered, non-empty sequence of items on an order.
///
/// Every order carries at least one item; constructing an `ItemList`
/// enforces that, so the storage layer never has to re-check. Item order is
/// preserved exactly as the customer entered it.
///
/// ## Examples
///
/// ```
/// use orderdesk_core::ItemList;
///
/// let items = ItemList::new(vec!["Tea".into(), "Cake".into()]).unwrap();
/// assert_eq!(items.len(), 2);
///
/// assert!(ItemList::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ItemList(Vec<String>);

impl ItemList {
    /// Construct an `ItemList` from a vector of item names.
    ///
    /// # Errors
    ///
    /// Returns [`ItemListError::Empty`] if the vector contains no items.
    pub fn new(items: Vec<String>) -> Result<Self, ItemListError> {
        if items.is_empty() {
            return Err(ItemListError::Empty);
        }
        Ok(Self(items))
    }

    /// Returns the items as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of items on the order. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no items. Always false by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the `ItemList` and returns the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Iterate over the item names in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_non_empty() {
        let items = ItemList::new(vec!["Tea".into(), "Cake".into()]).unwrap();
        assert_eq!(items.as_slice(), ["Tea".to_owned(), "Cake".to_owned()]);
    }

    #[test]
    fn test_new_empty() {
        assert!(matches!(
            ItemList::new(Vec::new()),
            Err(ItemListError::Empty)
        ));
    }

    #[test]
    fn test_preserves_order() {
        let names = vec!["c".to_owned(), "a".to_owned(), "b".to_owned()];
        let items = ItemList::new(names.clone()).unwrap();
        assert_eq!(items.into_inner(), names);
    }

    #[test]
    fn test_serde_roundtrip_preserves_order() {
        let items = ItemList::new(vec!["Tea".into(), "Cake".into()]).unwrap();
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(json, "[\"Tea\",\"Cake\"]");

        let parsed: ItemList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, items);
    }

    #[test]
    fn test_iter() {
        let items = ItemList::new(vec!["Tea".into(), "Cake".into()]).unwrap();
        let collected: Vec<&str> = items.iter().map(String::as_str).collect();
        assert_eq!(collected, ["Tea", "Cake"]);
    }
}
