use serde::de::DeserializeOwned;

pub(crate) mod google_books;

pub trait Client
where
    Self: Default,
{
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, EmptyTextProducer, MockClient, NetworkErrorProducer, Producer,
    URL_SINK,
};

use crate::{Error, ErrorKind};
