use bookfind::Book;
use eyre::{eyre, Context};

pub fn render_json(books: &[Book]) -> eyre::Result<String> {
    serde_json::to_string_pretty(books).wrap_err_with(|| eyre!("Unable to write books as JSON"))
}

pub fn render_listing(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found".to_owned();
    }

    let mut listing = String::new();
    for (index, book) in books.iter().enumerate() {
        if index > 0 {
            listing.push('\n');
        }

        let fields = [
            ("title", Some(book.title.as_str())),
            ("subtitle", book.subtitle.as_deref()),
            ("author", book.author.as_deref()),
            ("publisher", book.publisher.as_deref()),
            ("release", book.release.as_deref()),
            ("isbn", Some(book.isbn.as_str())),
            ("language", Some(book.language.as_str()).filter(|l| !l.is_empty())),
            ("image", book.image_link.as_deref()),
            ("summary", book.summary.as_deref()),
        ];

        for (name, value) in fields {
            if let Some(value) = value {
                listing.push_str(&format!("{name:>9}: {value}\n"));
            }
        }
    }

    listing.truncate(listing.trim_end().len());
    listing
}
