use serde::Serialize;

use crate::domain::AttachedFile;
use crate::error::CapacityError;

/// Ordered set of attached files, unique by id and bounded by `max_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachedFileSet {
    files: Vec<AttachedFile>,
    max_files: usize,
}

impl AttachedFileSet {
    #[must_use]
    pub fn new(max_files: usize) -> Self {
        Self {
            files: Vec::new(),
            max_files,
        }
    }

    /// New snapshot with `file` appended.
    ///
    /// A file whose id is already attached leaves the set as it is. A full
    /// set rejects the file instead of dropping an older one.
    pub fn try_with(&self, file: AttachedFile) -> Result<Self, CapacityError> {
        if self.contains(&file.id) {
            return Ok(self.clone());
        }
        if self.is_full() {
            return Err(CapacityError {
                max_files: self.max_files,
            });
        }

        let mut files = self.files.clone();
        files.push(file);
        Ok(Self {
            files,
            max_files: self.max_files,
        })
    }

    /// New snapshot without the file with `file_id`.
    #[must_use]
    pub fn without(&self, file_id: &str) -> Self {
        Self {
            files: self
                .files
                .iter()
                .filter(|file| file.id != file_id)
                .cloned()
                .collect(),
            max_files: self.max_files,
        }
    }

    #[must_use]
    pub fn contains(&self, file_id: &str) -> bool {
        self.files.iter().any(|file| file.id == file_id)
    }

    #[must_use]
    pub fn get(&self, file_id: &str) -> Option<&AttachedFile> {
        self.files.iter().find(|file| file.id == file_id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[AttachedFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttachedFile> {
        self.files.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.id.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn max_files(&self) -> usize {
        self.max_files
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.files.len() >= self.max_files
    }

    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.max_files.saturating_sub(self.files.len())
    }

    /// Sum of attached file sizes in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|file| file.size).sum()
    }
}

impl<'a> IntoIterator for &'a AttachedFileSet {
    type Item = &'a AttachedFile;
    type IntoIter = std::slice::Iter<'a, AttachedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str) -> AttachedFile {
        AttachedFile::with_id(id, format!("{id}.bin"), 10, "application/octet-stream")
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut set = AttachedFileSet::new(3);
        for i in 0..10 {
            match set.try_with(file(&format!("f{i}"))) {
                Ok(next) => set = next,
                Err(err) => assert_eq!(err.max_files, 3),
            }
            assert!(set.len() <= set.max_files());
        }
        assert_eq!(set.ids(), vec!["f0", "f1", "f2"]);
        assert!(set.is_full());
        assert_eq!(set.remaining_capacity(), 0);
    }

    #[test]
    fn test_rejection_leaves_set_unchanged() {
        let set = AttachedFileSet::new(1).try_with(file("a")).unwrap();
        let before = set.clone();
        assert!(set.try_with(file("b")).is_err());
        assert_eq!(set, before);
    }

    #[test]
    fn test_duplicate_id_is_ignored() {
        let set = AttachedFileSet::new(2).try_with(file("a")).unwrap();
        let again = set.try_with(file("a")).unwrap();
        assert_eq!(again.ids(), vec!["a"]);
    }

    #[test]
    fn test_duplicate_id_when_full_is_not_an_error() {
        let set = AttachedFileSet::new(1).try_with(file("a")).unwrap();
        assert!(set.try_with(file("a")).is_ok());
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let set = AttachedFileSet::new(0);
        assert!(set.try_with(file("a")).is_err());
    }

    #[test]
    fn test_without_and_total_size() {
        let set = AttachedFileSet::new(5)
            .try_with(file("a"))
            .and_then(|s| s.try_with(file("b")))
            .unwrap();
        assert_eq!(set.total_size(), 20);

        let trimmed = set.without("a");
        assert_eq!(trimmed.ids(), vec!["b"]);
        assert_eq!(trimmed.max_files(), 5);
        assert!(trimmed.get("b").is_some());
        assert!(trimmed.get("a").is_none());
    }
}
