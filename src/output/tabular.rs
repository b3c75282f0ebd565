//! Row/column views of the result sets
//!
//! Each result set can stand alone as a header row plus data rows, without
//! referencing the others. This is the surface a CSV encoder or interactive
//! table widget builds on; the encoders themselves live outside this crate.

use crate::extract::{ExtractedTable, Image, Link, TextBlock};
use std::collections::BTreeSet;

/// A result set viewed as rows and columns
pub trait Tabular {
    /// Column titles for the export
    fn headers(&self) -> Vec<String>;

    /// Data rows, one per entry, aligned with `headers`
    fn rows(&self) -> Vec<Vec<String>>;
}

impl Tabular for [Link] {
    fn headers(&self) -> Vec<String> {
        vec!["Text".to_string(), "URL".to_string(), "Type".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|link| vec![link.text.clone(), link.url.clone(), link.kind.to_string()])
            .collect()
    }
}

impl Tabular for [Image] {
    fn headers(&self) -> Vec<String> {
        vec!["Alt Text".to_string(), "Source URL".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|image| vec![image.alt.clone(), image.url.clone()])
            .collect()
    }
}

impl Tabular for [TextBlock] {
    fn headers(&self) -> Vec<String> {
        vec!["Tag".to_string(), "Content".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|block| vec![block.tag.clone(), block.content.clone()])
            .collect()
    }
}

impl Tabular for BTreeSet<String> {
    fn headers(&self) -> Vec<String> {
        vec!["Found Emails".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter().map(|email| vec![email.clone()]).collect()
    }
}

impl Tabular for ExtractedTable {
    fn headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }
}
