//! Index of items by group and type.
//!
//! Serializes as
//!
//! ```json
//! {
//!   "group-slug": { "function": [...], "mixin": [...], "variable": [...] },
//!   "another-group": { "function": [...] }
//! }
//! ```
//!
//! Groups, types, and items keep the order in which they first appear in the
//! input.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::item::Item;

/// Items of one type within a group.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeBucket {
    pub item_type: String,
    pub items: Vec<Item>,
}

/// All items of one group, bucketed by type.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBucket {
    pub slug: String,
    pub types: Vec<TypeBucket>,
}

impl GroupBucket {
    /// Items of the given type in this group.
    pub fn get(&self, item_type: &str) -> Option<&[Item]> {
        self.types
            .iter()
            .find(|t| t.item_type == item_type)
            .map(|t| t.items.as_slice())
    }
}

/// Two-level index: group slug, then item type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByGroupAndType {
    groups: Vec<GroupBucket>,
}

impl ByGroupAndType {
    /// Add an item to the bucket of its primary group and type.
    pub fn push(&mut self, item: Item) {
        let slug = item.primary_group();
        let item_type = item.item_type().to_string();

        let group = match self.groups.iter().position(|g| g.slug == slug) {
            Some(pos) => &mut self.groups[pos],
            None => {
                self.groups.push(GroupBucket {
                    slug,
                    types: Vec::new(),
                });
                let last = self.groups.len() - 1;
                &mut self.groups[last]
            }
        };

        match group.types.iter_mut().find(|t| t.item_type == item_type) {
            Some(bucket) => bucket.items.push(item),
            None => group.types.push(TypeBucket {
                item_type,
                items: vec![item],
            }),
        }
    }

    /// Groups in order of first appearance.
    pub fn groups(&self) -> &[GroupBucket] {
        &self.groups
    }

    /// Items for a group and type.
    pub fn get(&self, slug: &str, item_type: &str) -> Option<&[Item]> {
        self.groups
            .iter()
            .find(|g| g.slug == slug)
            .and_then(|g| g.get(item_type))
    }

    /// Total number of indexed items.
    pub fn len(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.types.iter())
            .map(|t| t.items.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Index a flat item sequence by group and type.
pub fn by_group_and_type(items: &[Item]) -> ByGroupAndType {
    let mut index = ByGroupAndType::default();
    for item in items {
        index.push(item.clone());
    }
    index
}

struct Types<'a>(&'a [TypeBucket]);

impl Serialize for Types<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bucket in self.0 {
            map.serialize_entry(&bucket.item_type, &bucket.items)?;
        }
        map.end()
    }
}

impl Serialize for ByGroupAndType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.slug, &Types(&group.types))?;
        }
        map.end()
    }
}
