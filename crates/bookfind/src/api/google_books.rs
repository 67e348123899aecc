use log::{debug, trace};
use serde::Deserialize;

use crate::{
    isbn,
    text::{self, TRUNCATE_MARKER},
    Book, Error, ErrorKind, Mode,
};

use super::Client;

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const COUNTRY: &str = "JP";
const SUMMARY_LENGTH: usize = 500;

/// Canned response used by [`Mode::Mock`], a single volume of "リーダブルコード".
const MOCK_RESPONSE: &str = include_str!("../../data/readable_code.json");

/// Identifier types that resolve to the ISBN of a book, most preferred first.
const ISBN_PRIORITY: [&str; 2] = ["ISBN_13", "ISBN_10"];

pub(crate) fn search<C: Client>(term: &str, mode: Mode) -> Result<Vec<Book>, Error> {
    let model = match mode {
        Mode::Live => fetch::<C>(term)?,
        Mode::Mock => mock_response(term)?,
    };
    convert(model)
}

pub(crate) fn request_url(term: &str) -> String {
    format!(
        "{GOOGLE_BOOKS_URL}?q={}&country={COUNTRY}",
        isbn::query(term)
    )
}

fn fetch<C: Client>(term: &str) -> Result<GoogleModel, Error> {
    trace!("Searching for '{term}' using Google Books API");
    let url = request_url(term);
    trace!("Requesting '{url}'");

    let client = C::default();
    let model = client.get_json(&url)?;

    trace!("Request was successful");
    Ok(model)
}

fn mock_response(term: &str) -> Result<GoogleModel, Error> {
    trace!("Mock mode - ignoring '{term}' and using the canned response");
    serde_json::from_str(MOCK_RESPONSE).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
}

fn convert(model: GoogleModel) -> Result<Vec<Book>, Error> {
    let GoogleModel { total_items, items } = model;

    let total_items = total_items.ok_or_else(|| {
        Error::new(
            ErrorKind::MalformedResponse,
            "Response does not contain 'totalItems'",
        )
    })?;
    let items = items.ok_or_else(|| {
        Error::new(
            ErrorKind::MalformedResponse,
            "Response does not contain 'items'",
        )
    })?;

    if total_items == 0 {
        debug!("No books found");
        return Ok(Vec::new());
    }

    let books: Vec<Book> = items.into_iter().filter_map(Item::into_book).collect();
    debug!("Normalized {} book(s) from {total_items} item(s)", books.len());
    Ok(books)
}

fn find_isbn(volume_info: &VolumeInfo) -> Option<String> {
    let identifiers = volume_info.industry_identifiers.as_ref()?;

    let mut ranked: [Option<&str>; 2] = [None; 2];
    for identifier in identifiers {
        let (Some(kind), Some(value)) = (&identifier.kind, &identifier.identifier) else {
            continue;
        };
        if let Some(rank) = ISBN_PRIORITY.iter().position(|priority| priority == kind) {
            ranked[rank] = Some(value.as_str());
        }
    }

    ranked.into_iter().flatten().next().map(str::to_owned)
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    #[serde(rename = "totalItems")]
    total_items: Option<u64>,
    items: Option<Vec<Item>>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    #[serde(rename = "volumeInfo")]
    volume_info: Option<VolumeInfo>,
}

/// Volume information from the Google Books API
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct VolumeInfo {
    title: Option<String>,
    subtitle: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    description: Option<String>,
    #[serde(rename = "industryIdentifiers")]
    industry_identifiers: Option<Vec<IndustryIdentifier>>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
    language: Option<String>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct IndustryIdentifier {
    #[serde(rename = "type")]
    kind: Option<String>,
    identifier: Option<String>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct ImageLinks {
    thumbnail: Option<String>,
    #[serde(rename = "smallThumbnail")]
    small_thumbnail: Option<String>,
}

impl Item {
    fn into_book(self) -> Option<Book> {
        let Some(volume_info) = self.volume_info else {
            trace!("Skipping item without volume info");
            return None;
        };
        volume_info.into_book()
    }
}

impl VolumeInfo {
    // Volumes without a title or an ISBN are not handled.
    fn into_book(self) -> Option<Book> {
        let Some(isbn) = find_isbn(&self) else {
            trace!("Skipping '{:?}' as it has no ISBN", self.title);
            return None;
        };
        let Some(title) = self.title else {
            trace!("Skipping volume with ISBN '{isbn}' as it has no title");
            return None;
        };

        // Deconstruct to take ownership of fields (avoids cloning).
        let Self {
            title: _,
            subtitle,
            authors,
            publisher,
            published_date,
            description,
            industry_identifiers: _,
            image_links,
            language,
        } = self;

        let summary = description.map(|description| {
            text::truncate(&description, Some(SUMMARY_LENGTH), TRUNCATE_MARKER).into_owned()
        });

        // smallThumbnail is checked last so it wins when both links are present.
        let image_link = image_links.and_then(|links| {
            let mut image_link = None;
            if let Some(thumbnail) = links.thumbnail {
                image_link = Some(thumbnail);
            }
            if let Some(small_thumbnail) = links.small_thumbnail {
                image_link = Some(small_thumbnail);
            }
            image_link
        });

        Some(Book {
            title,
            subtitle,
            author: authors.map(|authors| authors.join(",")),
            publisher,
            release: published_date,
            summary,
            isbn,
            image_link,
            language: language.unwrap_or_default(),
        })
    }
}
