use std::cmp::Ordering;

use ordered_map::compare::Compare;

/// Catalog record; stored as the value under either of the catalog keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Book {
    pub author: String,
    pub pages: u32,
}

impl Book {
    pub fn new(author: impl Into<String>, pages: u32) -> Self {
        Self {
            author: author.into(),
            pages,
        }
    }
}

/// Author names, alphabetical.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorName;

impl Compare<String> for AuthorName {
    fn compare(&self, a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }
}

/// Page counts, largest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct PagesDescending;

impl Compare<u32> for PagesDescending {
    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        b.cmp(a)
    }
}
