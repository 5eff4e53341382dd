use std::collections::HashSet;

/// Liked/saved article ids for one reading session. Component-local state;
/// nothing here survives a reload and nothing is shared between instances.
#[derive(Debug, Clone, Default)]
pub struct Selections {
    liked: HashSet<String>,
    saved: HashSet<String>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the liked mark; returns the new state.
    pub fn toggle_like(&mut self, id: &str) -> bool {
        toggle(&mut self.liked, id)
    }

    /// Toggle the saved mark; returns the new state.
    pub fn toggle_save(&mut self, id: &str) -> bool {
        toggle(&mut self.saved, id)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }

    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

fn toggle(set: &mut HashSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like_round_trip() {
        let mut selections = Selections::new();

        assert!(selections.toggle_like("a"));
        assert!(selections.is_liked("a"));
        assert!(!selections.toggle_like("a"));
        assert!(!selections.is_liked("a"));
    }

    #[test]
    fn test_like_and_save_are_independent() {
        let mut selections = Selections::new();

        selections.toggle_like("a");
        selections.toggle_save("b");

        assert!(selections.is_liked("a"));
        assert!(!selections.is_saved("a"));
        assert!(selections.is_saved("b"));
        assert_eq!(selections.liked_count(), 1);
        assert_eq!(selections.saved_count(), 1);
    }
}
