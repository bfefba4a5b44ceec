// src/source.rs
//! Where raw tables come from.
//!
//! The pipeline only ever asks a [`PageSource`] for "the table at this URL".
//! [`HttpSource`] does the real GET + parse; tests and benches plug in
//! in-memory sources.

use std::time::Instant;

use reqwest::blocking::Client;

use crate::core::html::{self, RawTable};
use crate::core::net;
use crate::error::{Error, Result};

pub trait PageSource {
    /// First table of the page at `url`.
    fn fetch_table(&self, url: &str) -> Result<RawTable>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        Ok(Self { client: net::client()? })
    }
}

impl PageSource for HttpSource {
    fn fetch_table(&self, url: &str) -> Result<RawTable> {
        let t = Instant::now();
        let doc = net::http_get(&self.client, url)?;
        logd!("Fetch: {} bytes in {:?} ← {}", doc.len(), t.elapsed(), url);

        html::first_table(&doc).ok_or_else(|| Error::fetch(url, "page has no <table>"))
    }
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch_table(&self, url: &str) -> Result<RawTable> {
        (**self).fetch_table(url)
    }
}
