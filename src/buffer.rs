//! Pending-output buffer shared by the two transducer scans.

/// Emitted units awaiting assembly into the final string. A unit is one
/// romanized symbol ("k", "sh", "a") or one kana unit (a single kana or a
/// digraph like キャ). The transducer rules only ever rewrite history one
/// unit deep, so mutation is limited to the tail.
#[derive(Debug, Default)]
pub(crate) struct ScanBuffer {
    units: Vec<String>,
}

impl ScanBuffer {
    pub(crate) fn new() -> Self {
        Self { units: Vec::new() }
    }

    pub(crate) fn push(&mut self, unit: impl Into<String>) {
        self.units.push(unit.into());
    }

    pub(crate) fn last(&self) -> Option<&str> {
        self.units.last().map(String::as_str)
    }

    /// Replace the last unit in place. Returns false when the buffer is
    /// empty; callers turn that into a position error.
    pub(crate) fn replace_last(&mut self, unit: impl Into<String>) -> bool {
        match self.units.last_mut() {
            Some(slot) => {
                *slot = unit.into();
                true
            }
            None => false,
        }
    }

    pub(crate) fn pop(&mut self) -> Option<String> {
        self.units.pop()
    }

    pub(crate) fn concat(self) -> String {
        self.units.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_concat() {
        let mut buf = ScanBuffer::new();
        buf.push("k");
        buf.push("y");
        buf.push("a");
        assert_eq!(buf.concat(), "kya");
    }

    #[test]
    fn test_replace_last() {
        let mut buf = ScanBuffer::new();
        buf.push("k");
        buf.push("i");
        assert!(buf.replace_last("y"));
        assert_eq!(buf.last(), Some("y"));
        assert_eq!(buf.concat(), "ky");
    }

    #[test]
    fn test_replace_last_empty() {
        let mut buf = ScanBuffer::new();
        assert!(!buf.replace_last("a"));
        assert_eq!(buf.last(), None);
    }

    #[test]
    fn test_pop() {
        let mut buf = ScanBuffer::new();
        buf.push("sh");
        buf.push("i");
        assert_eq!(buf.pop(), Some("i".to_string()));
        assert_eq!(buf.last(), Some("sh"));
        assert_eq!(ScanBuffer::new().pop(), None);
    }
}
