use bookfind::{isbn, Mode};

use clap::{AppSettings, Subcommand};
use eyre::{eyre, Context};
use log::{info, trace};

use crate::app::{render_json, render_listing};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search for books by title, keyword or ISBN
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Search {
        /// Free text or an ISBN-10/13, hyphens are optional
        term: String,

        /// Use a fixed response instead of requesting the API
        #[clap(short, long)]
        mock: bool,

        /// Print the books as a JSON array
        #[clap(short, long)]
        json: bool,
    },
    /// Show how a search term would be sent to the API without sending it
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Query {
        /// Free text or an ISBN-10/13, hyphens are optional
        term: String,
    },
}

impl Commands {
    pub fn execute(self) -> eyre::Result<String> {
        match self {
            Commands::Search { term, mock, json } => {
                let mode = if mock { Mode::Mock } else { Mode::Live };
                trace!("search subcommand called with the value of '{term}' in {mode:?} mode");

                let books = bookfind::search(&term, mode)
                    .wrap_err_with(|| eyre!("Unable to search for books matching '{term}'"))?;
                info!("Found {} book(s)", books.len());

                if json {
                    render_json(&books)
                } else {
                    Ok(render_listing(&books))
                }
            }
            Commands::Query { term } => {
                trace!("query subcommand called with the value of '{term}'");
                let kind = if isbn::is_isbn(&term) {
                    "ISBN"
                } else {
                    "free text"
                };
                Ok(format!(
                    "'{term}' is searched as {kind}\n{}",
                    bookfind::request_url(&term)
                ))
            }
        }
    }
}
