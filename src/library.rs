//! Session 6: book lending.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    #[error("book '{0}' not found")]
    NotFound(String),
    #[error("book '{0}' is already borrowed")]
    AlreadyBorrowed(String),
    #[error("book '{0}' was not borrowed")]
    NotBorrowed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub is_borrowed: bool,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            is_borrowed: false,
        }
    }

    pub fn info(&self) -> String {
        format!(
            "Title: {}, Author: {}, Borrowed: {}",
            self.title, self.author, self.is_borrowed
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn available_books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(|book| !book.is_borrowed)
    }

    fn find_mut(&mut self, title: &str) -> Result<&mut Book, LibraryError> {
        self.books
            .iter_mut()
            .find(|book| book.title == title)
            .ok_or_else(|| LibraryError::NotFound(title.to_string()))
    }

    pub fn borrow_book(&mut self, title: &str) -> Result<(), LibraryError> {
        let book = self.find_mut(title)?;
        if book.is_borrowed {
            return Err(LibraryError::AlreadyBorrowed(title.to_string()));
        }
        book.is_borrowed = true;
        Ok(())
    }

    pub fn return_book(&mut self, title: &str) -> Result<(), LibraryError> {
        let book = self.find_mut(title)?;
        if !book.is_borrowed {
            return Err(LibraryError::NotBorrowed(title.to_string()));
        }
        book.is_borrowed = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        let mut lib = Library::new();
        lib.add_book(Book::new("1984", "George Orwell"));
        lib.add_book(Book::new("The Great Gatsby", "F. Scott Fitzgerald"));
        lib
    }

    #[test]
    fn borrow_and_return_cycle() {
        let mut lib = library();
        assert_eq!(lib.books().len(), 2);
        assert_eq!(lib.available_books().count(), 2);

        lib.borrow_book("1984").unwrap();
        let available: Vec<_> = lib.available_books().map(|b| b.title.as_str()).collect();
        assert_eq!(available, vec!["The Great Gatsby"]);

        lib.return_book("1984").unwrap();
        assert_eq!(lib.available_books().count(), 2);
        assert!(lib.books().iter().all(|b| !b.is_borrowed));
    }

    #[test]
    fn lending_errors() {
        let mut lib = library();
        assert_eq!(
            lib.borrow_book("Dune"),
            Err(LibraryError::NotFound("Dune".into()))
        );
        assert_eq!(
            lib.return_book("1984"),
            Err(LibraryError::NotBorrowed("1984".into()))
        );
        lib.borrow_book("1984").unwrap();
        let err = lib.borrow_book("1984").unwrap_err();
        assert_eq!(err.to_string(), "book '1984' is already borrowed");
    }

    #[test]
    fn book_serializes_with_snake_case_flag() {
        let json = serde_json::to_string(&Book::new("1984", "George Orwell")).unwrap();
        assert_eq!(
            json,
            r#"{"title":"1984","author":"George Orwell","is_borrowed":false}"#
        );
        assert_eq!(
            Book::new("1984", "George Orwell").info(),
            "Title: 1984, Author: George Orwell, Borrowed: false"
        );
    }
}
