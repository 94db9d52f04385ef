pub const PER_PAGE: usize = 12;
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: usize,
    pub search: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl QueryState {
    // Changing the filter always puts the view back on the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }
}

/// Generation-checked idle debounce: every keystroke advances the
/// generation, and only a timer holding the current generation settles.
#[derive(Debug, Default)]
pub struct Debouncer {
    latest: String,
    generation: u64,
}

impl Debouncer {
    pub fn input(&mut self, value: &str) -> u64 {
        self.latest = value.to_string();
        self.generation += 1;
        self.generation
    }

    pub fn settle(&self, generation: u64) -> Option<String> {
        (generation == self.generation).then(|| self.latest.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_change_resets_page_to_one() {
        let mut query = QueryState::default();
        query.set_page(4, 9);
        assert_eq!(query.page, 4);

        query.set_search("milk");
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "milk");

        query.set_page(2, 9);
        query.set_search("");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn page_selection_clamps_to_the_valid_range() {
        let mut query = QueryState::default();

        query.set_page(0, 5);
        assert_eq!(query.page, 1);

        query.set_page(99, 5);
        assert_eq!(query.page, 5);

        query.set_page(3, 5);
        assert_eq!(query.page, 3);

        // No pages at all still leaves a sane current page.
        query.set_page(7, 0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn rapid_inputs_settle_once_with_the_final_value() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.input("m");
        let second = debouncer.input("mi");
        let last = debouncer.input("milk");

        assert_eq!(debouncer.settle(first), None);
        assert_eq!(debouncer.settle(second), None);
        assert_eq!(debouncer.settle(last), Some("milk".to_string()));
    }

    #[test]
    fn a_lone_input_settles_with_its_own_value() {
        let mut debouncer = Debouncer::default();
        let generation = debouncer.input("milk");
        assert_eq!(debouncer.settle(generation), Some("milk".to_string()));
    }

    #[test]
    fn settling_does_not_consume_the_generation() {
        let mut debouncer = Debouncer::default();
        let generation = debouncer.input("milk");
        assert!(debouncer.settle(generation).is_some());
        assert!(debouncer.settle(generation).is_some());
    }
}
