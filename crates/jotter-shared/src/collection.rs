use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// A record that lives in a [`Collection`] and is addressed by id.
pub trait Entity {
  fn id(&self) -> Uuid;
}

/// Outcome of looking an entity up by a leading fragment of its id.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum PrefixMatch {
  Unique(Uuid),
  Ambiguous(usize),
  NoMatch
}

/// Ordered, id-keyed set of entities.
///
/// Insertion order is display order. Lookups are linear scans; the
/// collections are edited by hand one item at a time and stay small.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct Collection<T> {
  items: Vec<T>
}

impl<T> Default for Collection<T> {
  fn default() -> Self {
    Self {
      items: Vec::new()
    }
  }
}

impl<T: Entity> Collection<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends `item` after every existing entity.
  ///
  /// Callers hand in freshly created entities, so the id is new to the
  /// collection.
  pub fn push(&mut self, item: T) {
    debug_assert!(
      self.get(item.id()).is_none(),
      "duplicate id pushed into \
       collection"
    );
    self.items.push(item);
  }

  /// Removes the entity with `id`, keeping the relative order of the
  /// rest. Absent ids are a no-op.
  pub fn remove(
    &mut self,
    id: Uuid
  ) -> Option<T> {
    let pos = self
      .items
      .iter()
      .position(|item| item.id() == id)?;
    Some(self.items.remove(pos))
  }

  /// Applies `f` to the entity with `id` in place. Absent ids are a
  /// no-op and return `None`.
  pub fn update<R>(
    &mut self,
    id: Uuid,
    f: impl FnOnce(&mut T) -> R
  ) -> Option<R> {
    self
      .items
      .iter_mut()
      .find(|item| item.id() == id)
      .map(f)
  }

  pub fn get(
    &self,
    id: Uuid
  ) -> Option<&T> {
    self
      .items
      .iter()
      .find(|item| item.id() == id)
  }

  pub fn ids(
    &self
  ) -> impl Iterator<Item = Uuid> + '_ {
    self.items.iter().map(Entity::id)
  }

  pub fn resolve_prefix(
    &self,
    prefix: &str
  ) -> PrefixMatch {
    let needle =
      prefix.trim().to_ascii_lowercase();
    if needle.is_empty() {
      return PrefixMatch::NoMatch;
    }

    let mut hits = self.ids().filter(|id| {
      id.hyphenated()
        .to_string()
        .starts_with(&needle)
    });
    let Some(first) = hits.next() else {
      return PrefixMatch::NoMatch;
    };
    let rest = hits.count();
    if rest == 0 {
      PrefixMatch::Unique(first)
    } else {
      PrefixMatch::Ambiguous(rest + 1)
    }
  }
}

impl<T> Collection<T> {
  pub fn iter(
    &self
  ) -> std::slice::Iter<'_, T> {
    self.items.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<'a, T> IntoIterator
  for &'a Collection<T>
{
  type IntoIter =
    std::slice::Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}
