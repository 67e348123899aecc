use serde::Serialize;

/// A book normalized from a volume returned by the books API.
///
/// Optional values serialize to `null`, except for [`Book::language`] which is an empty string
/// when the volume does not state a language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Title of the book.
    pub title: String,
    /// Subtitle of the book.
    pub subtitle: Option<String>,
    /// Authors of the book joined by a `,`.
    pub author: Option<String>,
    /// Publisher of the book.
    pub publisher: Option<String>,
    /// Release date as given by the API, which can be a year, year-month or a full date.
    pub release: Option<String>,
    /// Description of the book, truncated to 500 characters.
    pub summary: Option<String>,
    /// The ISBN-13 of the book, or the ISBN-10 when no ISBN-13 is known.
    pub isbn: String,
    /// Link to a cover thumbnail.
    pub image_link: Option<String>,
    /// Language code of the book.
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::Book;

    #[test]
    fn serializes_absent_values_as_null() {
        let book = Book {
            title: "Refactoring".to_owned(),
            subtitle: None,
            author: None,
            publisher: None,
            release: None,
            summary: None,
            isbn: "0201485672".to_owned(),
            image_link: None,
            language: String::new(),
        };

        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(
            serde_json::json!({
                "title": "Refactoring",
                "subtitle": null,
                "author": null,
                "publisher": null,
                "release": null,
                "summary": null,
                "isbn": "0201485672",
                "image_link": null,
                "language": "",
            }),
            json
        );
    }
}
