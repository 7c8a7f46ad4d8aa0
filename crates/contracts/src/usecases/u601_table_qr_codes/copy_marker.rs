/// How long the "copied" check mark stays visible.
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// Handle returned by [`CopyMarker::mark`], needed to expire that mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Which table's URL was copied last.
///
/// Only the most recent mark can be expired; an expiry scheduled for an
/// older copy is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyMarker {
    current: Option<String>,
    generation: u64,
}

impl CopyMarker {
    pub fn mark(&mut self, table_id: impl Into<String>) -> CopyTicket {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(table_id.into());
        CopyTicket(self.generation)
    }

    /// Clears the marker if `ticket` belongs to the latest mark.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_marked(&self, table_id: &str) -> bool {
        self.current() == Some(table_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_then_expire() {
        let mut marker = CopyMarker::default();
        let ticket = marker.mark("2");
        assert!(marker.is_marked("2"));
        assert!(marker.expire(ticket));
        assert_eq!(marker.current(), None);
    }

    #[test]
    fn test_stale_expiry_keeps_newer_mark() {
        let mut marker = CopyMarker::default();
        let first = marker.mark("1");
        let second = marker.mark("2");

        assert!(!marker.expire(first));
        assert!(marker.is_marked("2"));
        assert!(!marker.is_marked("1"));

        assert!(marker.expire(second));
        assert_eq!(marker.current(), None);
    }

    #[test]
    fn test_recopy_same_table_extends_feedback() {
        let mut marker = CopyMarker::default();
        let first = marker.mark("3");
        let _second = marker.mark("3");
        assert!(!marker.expire(first));
        assert!(marker.is_marked("3"));
    }
}
