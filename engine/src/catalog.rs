//! Catalog - the in-memory book collection.
//!
//! A `Catalog` wraps the records in the order they were stored. Listing
//! sorts a view of that order and never reorders the stored records.

use crate::{error::Result, Book, BookDraft, BookId, Error, ListQuery};

/// How a new record's id is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Id of the last stored record plus one, or 1 when empty.
    ///
    /// After out-of-order deletions the last record may not hold the
    /// largest id, so the new id can collide with a live record.
    #[default]
    LastPlusOne,
    /// Largest id in the catalog plus one, or 1 when empty.
    MaxPlusOne,
}

/// The full book collection, in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Wrap records loaded from storage.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Records in stored order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Give the records back for saving.
    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get a record by id.
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BookId) -> Result<usize> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or(Error::BookNotFound(id))
    }

    /// All records ordered by the query's key and direction.
    ///
    /// The sort is stable: records that compare equal keep stored order,
    /// in both directions.
    pub fn sorted(&self, query: &ListQuery) -> Vec<&Book> {
        let mut view: Vec<&Book> = self.books.iter().collect();
        view.sort_by(|a, b| query.compare(a, b));
        view
    }

    /// One page of the sorted catalog. Pages past the end are empty.
    pub fn list(&self, query: &ListQuery) -> Vec<Book> {
        let sorted = self.sorted(query);
        match crate::page_range(query.page, sorted.len()) {
            Some(range) => sorted[range].iter().map(|b| (*b).clone()).collect(),
            None => Vec::new(),
        }
    }

    /// The id the next created record would receive.
    pub fn next_id(&self, strategy: IdStrategy) -> Result<BookId> {
        let base = match strategy {
            IdStrategy::LastPlusOne => self.books.last().map(|b| b.id),
            IdStrategy::MaxPlusOne => self.books.iter().map(|b| b.id).max(),
        };
        match base {
            Some(id) => id.checked_add(1).ok_or(Error::IdExhausted(id)),
            None => Ok(1),
        }
    }

    /// Append a new record built from `draft`.
    pub fn create(&mut self, draft: BookDraft, strategy: IdStrategy) -> Result<Book> {
        let id = self.next_id(strategy)?;
        let book = Book::from_draft(id, draft);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Replace every field but the id of the record with `id`, in place.
    pub fn update(&mut self, id: BookId, draft: BookDraft) -> Result<Book> {
        let index = self.position(id)?;
        let book = &mut self.books[index];
        book.replace(draft);
        Ok(book.clone())
    }

    /// Remove the record with `id` and return it.
    pub fn delete(&mut self, id: BookId) -> Result<Book> {
        let index = self.position(id)?;
        Ok(self.books.remove(index))
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self::from_books(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SortKey, SortOrder, PAGE_SIZE};

    fn draft(title: &str, author: &str) -> BookDraft {
        BookDraft {
            title: title.into(),
            author: author.into(),
            year: 2000,
            genre: "G".into(),
            pages: 10,
            available: true,
        }
    }

    fn catalog_of(titles: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for title in titles {
            catalog
                .create(draft(title, "Author"), IdStrategy::LastPlusOne)
                .unwrap();
        }
        catalog
    }

    fn ids(books: &[Book]) -> Vec<BookId> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut catalog = Catalog::new();

        let first = catalog
            .create(draft("A", "B"), IdStrategy::LastPlusOne)
            .unwrap();
        let second = catalog
            .create(draft("A", "B"), IdStrategy::LastPlusOne)
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn last_plus_one_after_delete() {
        let mut catalog = catalog_of(&["A", "A"]);
        catalog.delete(1).unwrap();

        let book = catalog
            .create(draft("A", "B"), IdStrategy::LastPlusOne)
            .unwrap();

        assert_eq!(book.id, 3);
        assert_eq!(ids(catalog.books()), vec![2, 3]);
    }

    #[test]
    fn last_plus_one_can_collide() {
        // Stored order [3, 1]: the last record is not the largest id.
        let mut catalog = Catalog::from_books(vec![
            Book::from_draft(3, draft("c", "x")),
            Book::from_draft(1, draft("a", "x")),
        ]);

        let book = catalog
            .create(draft("n", "x"), IdStrategy::LastPlusOne)
            .unwrap();

        assert_eq!(book.id, 2);

        let book = catalog
            .create(draft("m", "x"), IdStrategy::LastPlusOne)
            .unwrap();
        assert_eq!(book.id, 3);
        assert_eq!(catalog.books().iter().filter(|b| b.id == 3).count(), 2);
    }

    #[test]
    fn max_plus_one_avoids_collision() {
        let mut catalog = Catalog::from_books(vec![
            Book::from_draft(3, draft("c", "x")),
            Book::from_draft(1, draft("a", "x")),
        ]);

        let book = catalog
            .create(draft("n", "x"), IdStrategy::MaxPlusOne)
            .unwrap();

        assert_eq!(book.id, 4);
    }

    #[test]
    fn next_id_overflow() {
        let catalog = Catalog::from_books(vec![Book::from_draft(i64::MAX, draft("a", "b"))]);

        assert_eq!(
            catalog.next_id(IdStrategy::LastPlusOne),
            Err(Error::IdExhausted(i64::MAX))
        );
    }

    #[test]
    fn update_in_place() {
        let mut catalog = catalog_of(&["A", "B", "C"]);

        let updated = catalog.update(2, draft("Z", "New")).unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.title, "Z");
        assert_eq!(ids(catalog.books()), vec![1, 2, 3]);
        assert_eq!(catalog.books()[1].author, "New");
    }

    #[test]
    fn update_missing_leaves_catalog_unchanged() {
        let mut catalog = catalog_of(&["A", "B"]);
        let before = catalog.clone();

        let result = catalog.update(9, draft("Z", "New"));

        assert_eq!(result, Err(Error::BookNotFound(9)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut catalog = catalog_of(&["A", "B", "C"]);

        let removed = catalog.delete(2).unwrap();

        assert_eq!(removed.title, "B");
        assert_eq!(ids(catalog.books()), vec![1, 3]);
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn delete_missing_leaves_catalog_unchanged() {
        let mut catalog = catalog_of(&["A"]);
        let before = catalog.clone();

        assert_eq!(catalog.delete(5), Err(Error::BookNotFound(5)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn list_sorts_by_title() {
        let catalog = catalog_of(&["cherry", "Apple", "banana"]);

        let page = catalog.list(&ListQuery::new(1, Some(SortKey::Title), SortOrder::Asc));
        assert_eq!(ids(&page), vec![2, 3, 1]);

        let page = catalog.list(&ListQuery::new(1, Some(SortKey::Title), SortOrder::Desc));
        assert_eq!(ids(&page), vec![1, 3, 2]);
    }

    #[test]
    fn list_sort_is_stable_both_ways() {
        let catalog = catalog_of(&["b", "a", "b", "a"]);

        let asc = catalog.list(&ListQuery::new(1, Some(SortKey::Title), SortOrder::Asc));
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);

        let desc = catalog.list(&ListQuery::new(1, Some(SortKey::Title), SortOrder::Desc));
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn list_by_year_keeps_stored_order() {
        let catalog = catalog_of(&["c", "a", "b"]);

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let page = catalog.list(&ListQuery::new(1, Some(SortKey::Year), order));
            assert_eq!(ids(&page), vec![1, 2, 3]);
        }
    }

    #[test]
    fn list_does_not_reorder_storage() {
        let catalog = catalog_of(&["c", "a", "b"]);

        catalog.list(&ListQuery::default());

        assert_eq!(ids(catalog.books()), vec![1, 2, 3]);
    }

    #[test]
    fn list_second_page_of_fifteen() {
        let titles: Vec<String> = (1..=15).map(|i| format!("Title {:02}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let catalog = catalog_of(&refs);

        let page = catalog.list(&ListQuery::new(2, Some(SortKey::Title), SortOrder::Asc));

        assert_eq!(ids(&page), vec![13, 14, 15]);
    }

    #[test]
    fn list_out_of_range_pages_are_empty() {
        let catalog = catalog_of(&["a", "b"]);

        assert!(catalog.list(&ListQuery::new(2, None, SortOrder::Asc)).is_empty());
        assert!(catalog.list(&ListQuery::new(0, None, SortOrder::Asc)).is_empty());
        assert!(Catalog::new().list(&ListQuery::default()).is_empty());
    }

    #[test]
    fn list_page_is_full_when_enough_records() {
        let titles: Vec<String> = (0..30).map(|i| format!("t{}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let catalog = catalog_of(&refs);

        assert_eq!(catalog.list(&ListQuery::default()).len(), PAGE_SIZE);
    }
}
