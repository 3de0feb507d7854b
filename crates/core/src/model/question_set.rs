use std::collections::HashSet;

use crate::model::defaults::default_questions;
use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionError};

/// Ordered collection of questions. Insertion order is play order.
///
/// Ids are unique within the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    items: Vec<Question>,
}

impl QuestionSet {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Fresh copies of the default set, each with a newly generated id.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            items: default_questions(),
        }
    }

    /// Build a set from persisted questions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::DuplicateId` if two entries share an id.
    pub fn from_persisted(items: Vec<Question>) -> Result<Self, QuestionError> {
        let mut seen = HashSet::with_capacity(items.len());
        for question in &items {
            if !seen.insert(question.id()) {
                return Err(QuestionError::DuplicateId(question.id().clone()));
            }
        }
        Ok(Self { items })
    }

    /// Append a question to the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::DuplicateId` if the id is already present.
    pub fn push(&mut self, question: Question) -> Result<(), QuestionError> {
        if self.contains(question.id()) {
            return Err(QuestionError::DuplicateId(question.id().clone()));
        }
        self.items.push(question);
        Ok(())
    }

    /// Remove the question with the given id, returning it if it was present.
    pub fn remove(&mut self, id: &QuestionId) -> Option<Question> {
        let position = self.items.iter().position(|q| q.id() == id)?;
        Some(self.items.remove(position))
    }

    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.items.iter().any(|q| q.id() == id)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.items
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Question> {
        self.items
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn question(prompt: &str) -> Question {
        QuestionDraft::new(prompt, "a", "").validate().unwrap()
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut set = QuestionSet::new();
        set.push(question("first")).unwrap();
        set.push(question("second")).unwrap();
        assert_eq!(set.get(0).unwrap().prompt(), "first");
        assert_eq!(set.get(1).unwrap().prompt(), "second");
    }

    #[test]
    fn push_rejects_duplicate_id() {
        let mut set = QuestionSet::new();
        let q = question("first");
        set.push(q.clone()).unwrap();
        let err = set.push(q.clone()).unwrap_err();
        assert_eq!(err, QuestionError::DuplicateId(q.id().clone()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut set = QuestionSet::defaults();
        let missing: QuestionId = "missing".parse().unwrap();
        assert!(set.remove(&missing).is_none());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn remove_shifts_later_questions_down() {
        let mut set = QuestionSet::defaults();
        let first = set.get(0).unwrap().id().clone();
        let second = set.get(1).unwrap().id().clone();
        set.remove(&first).unwrap();
        assert_eq!(set.get(0).unwrap().id(), &second);
    }

    #[test]
    fn from_persisted_rejects_duplicates() {
        let q = question("dup");
        let err = QuestionSet::from_persisted(vec![q.clone(), q]).unwrap_err();
        assert!(matches!(err, QuestionError::DuplicateId(_)));
    }

    #[test]
    fn defaults_get_new_ids_every_time() {
        let a = QuestionSet::defaults();
        let b = QuestionSet::defaults();
        for (left, right) in a.iter().zip(b.iter()) {
            assert_eq!(left.prompt(), right.prompt());
            assert_ne!(left.id(), right.id());
        }
    }
}
