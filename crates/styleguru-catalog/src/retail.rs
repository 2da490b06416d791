//! Retailer search links and display pricing for catalog entries.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;
use styleguru_core::catalog::CatalogItem;

/// Everything except the characters URL component encoders leave bare.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retailer {
    Amazon,
    Myntra,
    Flipkart,
}

/// Build a search URL on the given retailer for an item name.
#[must_use]
pub fn search_link(retailer: Retailer, query: &str) -> String {
    let encoded = utf8_percent_encode(query, COMPONENT);
    match retailer {
        Retailer::Amazon => format!("https://www.amazon.in/s?k={encoded}"),
        Retailer::Myntra => format!("https://www.myntra.com/{encoded}"),
        Retailer::Flipkart => format!("https://www.flipkart.com/search?q={encoded}"),
    }
}

/// Display price drawn uniformly from an inclusive rupee range.
pub(crate) fn price_between<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> String {
    let value = rng.random_range(min..=max);
    format!("₹{value}")
}

/// Catalog entry whose price is drawn from a range at table construction.
pub(crate) fn priced_item<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    category: &str,
    price_range: (u32, u32),
    image: &str,
    retailer: Retailer,
) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        category: category.to_string(),
        price: price_between(rng, price_range.0, price_range.1),
        image: image.to_string(),
        link: search_link(retailer, name),
    }
}

/// Catalog entry with a fixed display price and a search query that may be
/// shorter than the display name.
pub(crate) fn fixed_item(
    name: &str,
    category: &str,
    price: &str,
    image: &str,
    retailer: Retailer,
    query: &str,
) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        category: category.to_string(),
        price: price.to_string(),
        image: image.to_string(),
        link: search_link(retailer, query),
    }
}
