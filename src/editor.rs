use serde::Serialize;

/// Which record, if any, the edit dialog is working on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum EditSession {
    Closed,
    Adding,
    Editing { id: String },
}

impl Default for EditSession {
    fn default() -> Self {
        EditSession::Closed
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_add(&mut self) {
        *self = EditSession::Adding;
    }

    pub fn open_edit(&mut self, id: impl Into<String>) {
        *self = EditSession::Editing { id: id.into() };
    }

    /// Reset to `Closed`, returning the session that was open.
    pub fn close(&mut self) -> EditSession {
        std::mem::take(self)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    /// The id being edited. `None` for both `Adding` and `Closed`; a submit
    /// without an edit target creates a new record.
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditSession::Editing { id } => Some(id),
            EditSession::Adding | EditSession::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let mut session = EditSession::new();
        assert!(!session.is_open());

        session.open_add();
        assert!(session.is_open());
        assert_eq!(session.editing_id(), None);

        session.open_edit("abc");
        assert_eq!(session.editing_id(), Some("abc"));

        let previous = session.close();
        assert_eq!(previous, EditSession::Editing { id: "abc".into() });
        assert_eq!(session, EditSession::Closed);
    }
}
