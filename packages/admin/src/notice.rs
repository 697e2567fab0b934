//! # Notices: the single channel for user-facing feedback
//!
//! Every controller reports outcomes through a [`Notifier`]: validation failures,
//! server rejections, transport errors and successes alike. Nothing is raised to a
//! global handler.
//!
//! [`NoticeBoard`] is the concrete sink the UI renders as toasts. It keeps only the
//! most recent [`MAX_NOTICES`] entries and mirrors each one to `tracing`.

use std::collections::VecDeque;

/// Maximum number of notices kept on a [`NoticeBoard`].
pub const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Sink for user-facing notices.
pub trait Notifier {
    fn notify(&mut self, level: NoticeLevel, message: &str);

    fn success(&mut self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }

    fn info(&mut self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }
}

/// Bounded list of recent notices, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: &str) -> u64 {
        match level {
            NoticeLevel::Error => tracing::warn!("{message}"),
            NoticeLevel::Success | NoticeLevel::Info => tracing::info!("{message}"),
        }

        self.next_id += 1;
        self.notices.push_back(Notice {
            id: self.next_id,
            level,
            message: message.to_string(),
        });
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Messages of the given level, oldest first.
    pub fn messages(&self, level: NoticeLevel) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.as_str())
            .collect()
    }
}

impl Notifier for NoticeBoard {
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.push(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut board = NoticeBoard::new();
        let first = board.push(NoticeLevel::Success, "Profile created");
        let second = board.push(NoticeLevel::Error, "Passwords do not match");
        assert_ne!(first, second);
        assert_eq!(board.len(), 2);
        assert_eq!(board.latest().unwrap().message, "Passwords do not match");

        board.dismiss(first);
        assert_eq!(board.messages(NoticeLevel::Success), Vec::<&str>::new());
        assert_eq!(board.messages(NoticeLevel::Error), vec!["Passwords do not match"]);
    }

    #[test]
    fn test_board_is_bounded() {
        let mut board = NoticeBoard::new();
        for i in 0..(MAX_NOTICES + 3) {
            board.info(&format!("notice {i}"));
        }
        assert_eq!(board.len(), MAX_NOTICES);
        assert_eq!(board.notices().next().unwrap().message, "notice 3");
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut board = NoticeBoard::new();
        let id = board.push(NoticeLevel::Info, "a");
        board.clear();
        assert!(board.is_empty());
        assert!(board.push(NoticeLevel::Info, "b") > id);
    }
}
