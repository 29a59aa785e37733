//! Locator classification and content fetching.
//!
//! A locator is an opaque string naming manifest or payload content. It is
//! classified by prefix into a remote URL or a local filesystem path, and
//! fetched with whichever strategy matches. Callers only see bytes.

use crate::result::Result;
use std::fs;
use std::path::PathBuf;

/// Prefix marking a locator as remote. Covers both `http://` and `https://`.
const REMOTE_SCHEME_PREFIX: &str = "http";

/// Content locator, classified as a remote URL or a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Remote(String),
    Local(PathBuf),
}

impl Locator {
    /// Classify a locator string. Pure and total: every input maps to
    /// exactly one variant and no I/O happens here.
    pub fn classify(locator: &str) -> Self {
        if locator.starts_with(REMOTE_SCHEME_PREFIX) {
            Locator::Remote(locator.to_string())
        } else {
            Locator::Local(PathBuf::from(locator))
        }
    }

    /// Fetch the raw bytes behind this locator.
    ///
    /// Remote locators perform one blocking GET and return the full body
    /// whatever the HTTP status code; inspecting status semantics is the
    /// caller's business. Local locators read the file whole. Errors from
    /// either strategy propagate unmodified, and nothing is cached or
    /// retried between calls.
    ///
    /// No request timeout is configured; callers needing bounded latency
    /// must wrap the call themselves.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Locator::Remote(url) => fetch_remote(url),
            Locator::Local(path) => Ok(fs::read(path)?),
        }
    }
}

/// Resolve a locator string to its content bytes.
pub fn fetch(locator: &str) -> Result<Vec<u8>> {
    Locator::classify(locator).fetch()
}

fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url)?;
    Ok(response.bytes()?.to_vec())
}
