// SPDX-License-Identifier: MPL-2.0
//! Shareable location handling.
//!
//! The client mirrors the web application's URL semantics: the active screen
//! can be restored from a location string (`--url` at launch, or the
//! persisted last location), and widgets rewrite individual query parameters
//! in place without triggering any navigation. Only the path and query are
//! meaningful; a scheme and host are accepted on input and discarded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A path plus query parameters, the desktop analogue of the page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            query: Vec::new(),
        }
    }
}

impl Location {
    /// Parses a location from a URL or a bare `path?query` string.
    ///
    /// Invalid pieces are dropped rather than rejected; an empty input
    /// yields the root location.
    pub fn parse(input: &str) -> Self {
        let without_origin = strip_origin(input);
        let (path, query_str) = match without_origin.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (without_origin, None),
        };

        let path = if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        };

        let mut query = Vec::new();
        if let Some(raw) = query_str {
            for pair in raw.split('&') {
                if pair.is_empty() {
                    continue;
                }
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                let name = urlencoding::decode(name)
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| name.to_string());
                let value = urlencoding::decode(value)
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| value.to_string());
                query.push((name, value));
            }
        }

        Self { path, query }
    }

    /// Returns the path component.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the value of a query parameter, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Rewrites a query parameter in place, appending it if absent.
    ///
    /// This is the `history.replaceState` analogue: the location changes
    /// without any navigation side effect.
    pub fn set_param(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.query.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.query.push((name.to_string(), value.to_string()));
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (name, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                sep,
                urlencoding::encode(name),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn strip_origin(input: &str) -> &str {
    let Some(scheme_end) = input.find("://") else {
        return input;
    };
    let after_scheme = &input[scheme_end + 3..];
    match after_scheme.find('/') {
        Some(slash) => &after_scheme[slash..],
        None => "/",
    }
}
