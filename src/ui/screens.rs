use crate::models::Book;
use crate::store::{BookStats, BookStore};

/// Entries of the main menu, in display order. The number keys `1`-`5` map to
/// the same positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MenuItem {
    NameStore,
    LoadBooks,
    Summary,
    Statistics,
    Quit,
}

impl MenuItem {
    pub(crate) const ALL: [MenuItem; 5] = [
        MenuItem::NameStore,
        MenuItem::LoadBooks,
        MenuItem::Summary,
        MenuItem::Statistics,
        MenuItem::Quit,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuItem::NameStore => "Enter the name of the book store",
            MenuItem::LoadBooks => "Read in information on the books from the CSV file",
            MenuItem::Summary => "Print a summary of the book store",
            MenuItem::Statistics => "Print statistics on books",
            MenuItem::Quit => "Quit",
        }
    }

    /// Resolve a digit key to its menu entry.
    pub(crate) fn from_key(ch: char) -> Option<MenuItem> {
        let idx = ch.to_digit(10)? as usize;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Scrollable listing of every loaded book plus the store name. A named but
/// not yet loaded store still gets a summary, just without books.
pub(crate) struct SummaryScreen {
    pub(crate) store_name: String,
    pub(crate) books: Vec<Book>,
    pub(crate) loaded: bool,
    pub(crate) selected: usize,
}

impl SummaryScreen {
    pub(crate) fn new(store: &BookStore, loaded: bool) -> Self {
        Self {
            store_name: store.name().to_string(),
            books: store.books().to_vec(),
            loaded,
            selected: 0,
        }
    }

    pub(crate) fn current_book(&self) -> Option<&Book> {
        self.books.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.books.is_empty() {
            return;
        }
        let last = self.books.len() as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.books.len().saturating_sub(1);
    }
}

/// Pre-rendered statistics for the current store.
pub(crate) struct StatsScreen {
    pub(crate) store_name: String,
    pub(crate) stats: BookStats,
}

impl StatsScreen {
    pub(crate) fn new(store_name: &str, stats: BookStats) -> Self {
        Self {
            store_name: store_name.to_string(),
            stats,
        }
    }

    /// The three report lines in display order.
    pub(crate) fn report_lines(&self) -> [String; 3] {
        let highest = &self.stats.highest_value;
        let oldest = &self.stats.oldest;
        [
            format!(
                "Highest value book: {} (published {}), £{:?}",
                highest.title(),
                highest.year_published(),
                highest.value()
            ),
            format!(
                "Oldest book: {} (published {})",
                oldest.title(),
                oldest.year_published()
            ),
            format!(
                "Average value of books: £{:.2}",
                self.stats.average_value
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> BookStore {
        let mut store = BookStore::new("Corner Books");
        store.append(Book::new("A1", "Dune", 1965, 45.0));
        store.append(Book::new("A2", "Foundation", 1951, 30.0));
        store
    }

    #[test]
    fn digit_keys_map_to_menu_entries() {
        assert_eq!(MenuItem::from_key('1'), Some(MenuItem::NameStore));
        assert_eq!(MenuItem::from_key('5'), Some(MenuItem::Quit));
        assert_eq!(MenuItem::from_key('0'), None);
        assert_eq!(MenuItem::from_key('6'), None);
        assert_eq!(MenuItem::from_key('x'), None);
    }

    #[test]
    fn summary_selection_stays_in_bounds() {
        let mut screen = SummaryScreen::new(&store(), true);
        screen.move_selection(-3);
        assert_eq!(screen.selected, 0);
        screen.move_selection(10);
        assert_eq!(screen.current_book().map(Book::id), Some("A2"));
        screen.select_first();
        assert_eq!(screen.selected, 0);
        screen.select_last();
        assert_eq!(screen.selected, 1);
    }

    #[test]
    fn stats_report_formats_average_to_two_places() {
        let store = store();
        let screen = StatsScreen::new(store.name(), store.stats().unwrap());
        let [highest, oldest, average] = screen.report_lines();
        assert_eq!(highest, "Highest value book: Dune (published 1965), £45.0");
        assert_eq!(oldest, "Oldest book: Foundation (published 1951)");
        assert_eq!(average, "Average value of books: £37.50");
    }
}
