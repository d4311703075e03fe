//! FAQ accordion: at most one item expanded at a time

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Option<usize>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Click on an item's question
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.is_expanded(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanding_collapses_others() {
        let mut faq = AccordionState::new();
        faq.toggle(1);
        faq.toggle(3);

        for i in 0..6 {
            assert_eq!(faq.is_expanded(i), i == 3, "item {i}");
        }
    }

    #[test]
    fn test_clicking_expanded_item_collapses_it() {
        let mut faq = AccordionState::new();
        faq.toggle(2);
        faq.toggle(2);
        assert!(!faq.is_expanded(2));
    }

    #[test]
    fn test_starts_collapsed() {
        let faq = AccordionState::new();
        assert!(!faq.is_expanded(0));
    }
}
