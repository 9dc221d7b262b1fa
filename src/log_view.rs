/// Bounded buffer backing the in-app log pane. Entries are mirrored to the
/// file logger at debug level so the pane and `carbonito.log` tell the
/// same story.
#[derive(Debug, Default)]
pub struct LogView {
    pub entries: Vec<String>,
}

const MAX_ENTRIES: usize = 200;

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::debug!("{}", entry);
        self.entries.push(entry);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_entries_at_bound() {
        let mut view = LogView::new();
        for i in 0..(MAX_ENTRIES + 10) {
            view.add(format!("entry {}", i));
        }
        assert_eq!(view.entries.len(), MAX_ENTRIES);
        assert_eq!(view.entries[0], "entry 10");
    }
}
