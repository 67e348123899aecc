#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # bookfind
//!
//! bookfind searches the Google Books API by free text or ISBN and normalizes the volumes found
//! into [`Book`]s with a stable shape, ready to be handed to a front-end.
//!
//! ```no_run
//! let books = bookfind::search("978-4-87-311565-8", bookfind::Mode::Live)?;
//!
//! for book in books {
//!     println!("{} ({})", book.title, book.isbn);
//! }
//! # Ok::<(), bookfind::Error>(())
//! ```

mod api;
mod book;
mod error;
pub mod isbn;
pub mod text;

pub use book::Book;
pub use error::{Error, ErrorKind};

use log::info;

type Client = reqwest::blocking::Client;

/// Where [`search`] gets the volumes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Request the Google Books API.
    #[default]
    Live,
    /// Use a fixed response containing a single volume, without any network access.
    Mock,
}

/// Search books by `term` using the Google Books API.
///
/// A `term` that looks like an ISBN (see [`isbn::is_isbn`]) is searched as an ISBN, anything
/// else as free text. Volumes that have neither an ISBN-13 nor an ISBN-10 are left out of the
/// result, which is otherwise in the order the API returned.
///
/// No books matching `term` is not an error, an empty [`Vec`] is returned.
///
/// # Errors
///
/// An `Err` is returned when the request to the API fails or its response cannot be decoded.
/// An `Err` is returned when the response is missing the `totalItems` or `items` keys.
#[inline]
pub fn search(term: &str, mode: Mode) -> Result<Vec<Book>, Error> {
    info!("Search books by '{term}' in {mode:?} mode");
    api::google_books::search::<Client>(term, mode)
}

/// The URL that a [`Mode::Live`] search for `term` requests.
#[must_use]
pub fn request_url(term: &str) -> String {
    api::google_books::request_url(term)
}

#[cfg(test)]
mod tests {
    use super::{request_url, search, Mode};

    #[test]
    fn mock_search_returns_readable_code() {
        let books = search("readable code", Mode::Mock).expect("mock search never fails");

        assert_eq!(1, books.len());
        assert_eq!("9784873115658", books[0].isbn);
        assert_eq!("リーダブルコード", books[0].title);
        assert_eq!("ja", books[0].language);
    }

    #[test]
    fn default_mode_is_live() {
        assert_eq!(Mode::Live, Mode::default());
    }

    #[test]
    fn request_url_includes_query_and_country() {
        assert_eq!(
            "https://www.googleapis.com/books/v1/volumes?q=isbn:9784873115658&country=JP",
            request_url("978-4-87-311565-8")
        );
        assert_eq!(
            "https://www.googleapis.com/books/v1/volumes?q=readable%20code&country=JP",
            request_url("readable code")
        );
    }
}
