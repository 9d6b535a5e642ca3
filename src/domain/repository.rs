//! Repository Layer - Core Traits
//!
//! Panels read and mutate their records through these interfaces. The only
//! implementation is an in-memory `Vec`, seeded from mock literals and
//! dropped on reload.

use super::entity::{DomainError, DomainResult, Entity};

/// Core repository trait for CRUD operations
pub trait Repository<T: Entity> {
    /// Insert a new entity at the end
    fn create(&mut self, entity: T) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: T::Id) -> Option<&T>;

    /// All entities in insertion order
    fn list(&self) -> &[T];

    /// Replace an existing entity with the same id
    fn update(&mut self, entity: T) -> DomainResult<T>;

    /// Delete entity by ID
    fn delete(&mut self, id: T::Id) -> DomainResult<()>;

    /// Apply `f` to the stored entity in place and return the result
    fn replace_with<F>(&mut self, id: T::Id, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut T);
}

/// `Vec`-backed repository
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRepository<T> {
    items: Vec<T>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn seeded(items: Vec<T>) -> Self {
        Self { items }
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|e| e.id() == id)
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn create(&mut self, entity: T) -> DomainResult<T> {
        if self.position(entity.id()).is_some() {
            return Err(DomainError::Conflict(format!("id {} already exists", entity.id())));
        }
        self.items.push(entity.clone());
        Ok(entity)
    }

    fn find_by_id(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    fn list(&self) -> &[T] {
        &self.items
    }

    fn update(&mut self, entity: T) -> DomainResult<T> {
        let idx = self
            .position(entity.id())
            .ok_or_else(|| DomainError::NotFound(format!("id {}", entity.id())))?;
        self.items[idx] = entity.clone();
        Ok(entity)
    }

    fn delete(&mut self, id: T::Id) -> DomainResult<()> {
        let before = self.items.len();
        self.items.retain(|e| e.id() != id);
        if self.items.len() == before {
            return Err(DomainError::NotFound(format!("id {}", id)));
        }
        Ok(())
    }

    fn replace_with<F>(&mut self, id: T::Id, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut T),
    {
        let entity = self
            .items
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("id {}", id)))?;
        f(entity);
        Ok(entity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    impl Entity for Note {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn make_note(id: u32, text: &str) -> Note {
        Note { id, text: text.to_string() }
    }

    fn make_repo() -> MemoryRepository<Note> {
        MemoryRepository::seeded(vec![make_note(1, "one"), make_note(2, "two"), make_note(3, "three")])
    }

    fn ids(repo: &MemoryRepository<Note>) -> Vec<u32> {
        repo.list().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_delete_keeps_order() {
        let mut repo = make_repo();
        repo.delete(2).unwrap();
        assert_eq!(ids(&repo), vec![1, 3]);
        assert_eq!(repo.find_by_id(3).map(|n| n.text.as_str()), Some("three"));
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let mut repo = make_repo();
        assert!(matches!(repo.delete(9), Err(DomainError::NotFound(_))));
        assert_eq!(repo.list().len(), 3);
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let mut repo = make_repo();
        assert!(matches!(repo.create(make_note(1, "again")), Err(DomainError::Conflict(_))));
        repo.create(make_note(4, "four")).unwrap();
        assert_eq!(ids(&repo), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_update() {
        let mut repo = make_repo();
        repo.update(make_note(2, "deux")).unwrap();
        assert_eq!(repo.find_by_id(2).unwrap().text, "deux");
        assert!(matches!(repo.update(make_note(7, "x")), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_replace_with_touches_one_record() {
        let mut repo = make_repo();
        let changed = repo.replace_with(1, |n| n.text.push('!')).unwrap();
        assert_eq!(changed.text, "one!");
        assert_eq!(repo.find_by_id(2).unwrap().text, "two");
    }
}
