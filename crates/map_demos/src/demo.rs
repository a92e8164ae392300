use std::fmt::Display;
use std::io::{self, BufRead, Write};

use ordered_map::{OrderedMap, TotalOrd, TreeMap};
use tracing::{debug, info};

use crate::book::{AuthorName, Book, PagesDescending};
use crate::error::{DemoError, Result};

pub fn print_stocks<M>(out: &mut dyn Write, stocks: &M) -> io::Result<()>
where
    M: OrderedMap,
    M::Key: Display,
    M::Value: Display,
{
    for (name, price) in stocks.iter() {
        writeln!(out, "stock: {name}\tprice: {price}")?;
    }
    writeln!(out)
}

pub fn print_catalog<M>(out: &mut dyn Write, catalog: &M) -> io::Result<()>
where
    M: OrderedMap<Value = Book>,
    M::Key: Display,
{
    for (key, book) in catalog.iter() {
        writeln!(
            out,
            "Key: {key}\tAuthor: {}, pages: {}",
            book.author, book.pages
        )?;
    }
    Ok(())
}

/// Inserts `value` under `key`, failing instead of silently keeping the old entry.
pub fn insert_new<M>(map: &mut M, key: M::Key, value: M::Value) -> Result<&mut M::Value>
where
    M: OrderedMap,
    M::Key: Display,
{
    let name = key.to_string();
    match map.try_insert(key, value) {
        (value, true) => Ok(value),
        (_, false) => Err(DemoError::DuplicateKey(name)),
    }
}

/// Stock chart keyed by company name: fill, double every price, rename one key.
pub fn stock_chart(out: &mut dyn Write) -> Result<()> {
    let mut stocks: TreeMap<String, f32> = TreeMap::new();
    for (name, price) in [
        ("VW", 413.5),
        ("SpaceX", 713.5),
        ("Tesla", 813.5),
        ("Siemens", 813.5),
        ("BASF", 369.5),
    ] {
        *stocks.get_or_insert_default(name.to_owned()) = price;
    }
    print_stocks(out, &stocks)?;

    for (_, price) in stocks.iter_mut() {
        *price *= 2.0;
    }
    print_stocks(out, &stocks)?;

    let (old, new) = ("VW".to_owned(), "Volkswagen".to_owned());
    if stocks.rename_key(&old, new) {
        info!(from = %old, to = "Volkswagen", "renamed stock");
    }
    print_stocks(out, &stocks)?;
    Ok(())
}

pub fn books() -> [Book; 4] {
    [
        Book::new("Jazar", 1578),
        Book::new("Allerton", 347),
        Book::new("Stroustrup", 1345),
        Book::new("Matyka", 79),
    ]
}

/// The same books under two comparators: author name ascending, page count descending.
pub fn book_catalogs(out: &mut dyn Write) -> Result<()> {
    let books = books();

    let mut by_author: TreeMap<String, Book, AuthorName> = TreeMap::new();
    for book in &books {
        *by_author.get_or_insert_default(book.author.clone()) = book.clone();
    }
    print_catalog(out, &by_author)?;
    writeln!(out)?;

    let mut by_pages: TreeMap<u32, Book, PagesDescending> = TreeMap::new();
    let [first, rest @ ..] = &books;
    *by_pages.get_or_insert_default(first.pages) = first.clone();
    for book in rest {
        let (_, inserted) = by_pages.try_insert(book.pages, book.clone());
        debug!(pages = book.pages, inserted, "catalog insert");
    }

    // A second copy of the last book collides with the entry already stored.
    if let Some(last) = rest.last() {
        let (kept, inserted) = by_pages.try_insert(last.pages, last.clone());
        if !inserted {
            debug!(pages = last.pages, kept = %kept.author, "duplicate key, insertion skipped");
        }
    }
    print_catalog(out, &by_pages)?;
    Ok(())
}

/// Float-keyed map searched once by key and once by value.
pub fn value_search(out: &mut dyn Write) -> Result<()> {
    let mut map: TreeMap<f32, f32, TotalOrd> = TreeMap::new();
    map.try_insert(1.0, 7.0);
    map.try_insert(2.0, 4.0);
    *map.get_or_insert_default(3.0) = 2.0;
    for (key, value) in [(4.0, 3.0), (5.0, 6.0), (6.0, 1.0), (7.0, 3.0)] {
        map.try_insert(key, value);
    }

    if let Some((key, value)) = map.get_key_value(&3.0) {
        writeln!(out, "Found key: {key}, its value is: {value}")?;
    }

    if let Some((key, value)) = map.find_value(&3.0) {
        writeln!(out, "Found value: {value} @ key: {key}")?;
        // The scan stops at the first hit; later keys need a resumed scan.
        if let Some((later, _)) = map.find_value_after(key, |v| *v == *value) {
            debug!(key = *later, "value also stored under a later key");
        }
    }
    Ok(())
}

/// Blocks until a line (or EOF) arrives on `input`.
pub fn pause(input: &mut dyn BufRead) -> io::Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
