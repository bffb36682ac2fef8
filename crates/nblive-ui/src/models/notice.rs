//! Transient notices shown by the toaster

/// Identifier handed out by [`NoticeQueue::push`]
pub type NoticeId = u64;

/// A notice waiting to be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub title: String,
    pub description: String,
}

/// Visible notices, newest first, capped at `limit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeQueue {
    items: Vec<Notice>,
    limit: usize,
    next_id: NoticeId,
}

impl NoticeQueue {
    /// Creates an empty queue. A limit of zero is treated as one.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    /// Shows a new notice, evicting the oldest ones past the limit
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> NoticeId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.insert(
            0,
            Notice {
                id,
                title: title.into(),
                description: description.into(),
            },
        );
        self.items.truncate(self.limit);
        id
    }

    /// Removes a notice. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.items.len();
        self.items.retain(|notice| notice.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NoticeQueue::new(3);
        let first = queue.push("a", "1");
        let second = queue.push("b", "2");
        assert!(second > first);
        assert_eq!(queue.items().first().map(|n| n.id), Some(second));
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut queue = NoticeQueue::new(1);
        queue.push("old", "");
        let newest = queue.push("new", "");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items().first().map(|n| n.id), Some(newest));
    }

    #[test]
    fn test_zero_limit_still_shows_one() {
        let mut queue = NoticeQueue::new(0);
        queue.push("only", "");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NoticeQueue::default();
        let id = queue.push("title", "description");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }
}
