//! Entity trait: identity + the "initialized" check catalog records share.

use std::collections::HashMap;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier type (primary key in the backing store).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Whether a record carries enough identity to be processed further.
///
/// The check is total: it never fails, and an absent record (`None`) is
/// simply not initialized.
pub trait Initialized {
    fn initialized(&self) -> bool;
}

impl<T: Initialized + ?Sized> Initialized for &T {
    fn initialized(&self) -> bool {
        (**self).initialized()
    }
}

impl<T: Initialized> Initialized for Option<T> {
    fn initialized(&self) -> bool {
        self.as_ref().is_some_and(|v| v.initialized())
    }
}

impl<T: Initialized + ?Sized> Initialized for Box<T> {
    fn initialized(&self) -> bool {
        (**self).initialized()
    }
}

/// Ids of initialized entities that occur more than once, in order of first repeat.
///
/// Uninitialized entities carry no usable id and are skipped.
pub fn duplicate_ids<'a, E, I>(entities: I) -> Vec<&'a E::Id>
where
    E: Entity + Initialized + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut counts: HashMap<&'a E::Id, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for entity in entities.into_iter().filter(|e| e.initialized()) {
        let count = counts.entry(entity.id()).or_default();
        *count += 1;
        if *count == 2 {
            duplicates.push(entity.id());
        }
    }

    duplicates
}
