//! 种子数据
//!
//! 启动时写入空 Repository 的固定图书和书架

use super::{Book, BookId, Shelve};

/// 平铺的种子图书集合
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: BookId::new(1),
            title: "Erstes Buch".to_string(),
            author: "Max Mustermann".to_string(),
            language: "Deutsch".to_string(),
            category: "Roman".to_string(),
            isbn10: "1234567890".to_string(),
            isbn13: "1234567890123".to_string(),
            page_count: 500,
            rating: 1,
        },
        Book::new(3, "Animal"),
        Book::new(5, "Ein Sommer in Nienburg"),
        Book::new(6, "Später"),
    ]
}

/// 种子书架，内容是 [`seed_books`] 的副本
pub fn seed_shelves() -> Vec<Shelve> {
    let books = seed_books();
    let (first, second) = books.split_at(3);
    vec![
        Shelve::new(1, "Wohnzimmer", first.to_vec()),
        Shelve::new(3, "Arbeitszimmer", second.to_vec()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_and_valid() {
        let books = seed_books();
        let ids: HashSet<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), books.len());
        assert!(books.iter().all(|b| b.validate().is_ok()));
    }

    #[test]
    fn test_every_shelved_book_is_in_the_flat_collection() {
        let books = seed_books();
        for shelve in seed_shelves() {
            for book in &shelve.content {
                assert!(books.contains(book));
            }
        }
    }
}
