use std::fmt::{Display, Formatter, Result as FmtResult};
use std::slice::{Iter, IterMut};

use crate::SIGNATURE_PREVIEW_HEX;
use crate::mac::primitive::Signature;

use hex::encode;

/// One unit of data to be authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub data: Vec<u8>,
    pub signature: Option<Signature>,
}

impl Row {
    pub fn new(data: &[u8]) -> Self {
        return Self {
            data: data.to_vec(),
            signature: None,
        };
    }
}

impl Display for Row {
    /// Formats the `Row` in a human-readable way.
    ///
    /// Example output:
    /// "Row 42, Signature 0x1f0c9ab233e4d7a0..."
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let data: std::borrow::Cow<'_, str> = String::from_utf8_lossy(&self.data);
        return match &self.signature {
            Some(signature) => write!(f, "Row {}, Signature 0x{}...", data, &encode(signature)[..SIGNATURE_PREVIEW_HEX]),
            None => write!(f, "Row {}, Unsigned", data),
        };
    }
}

/// Ordered rows. Order is part of what the chain authenticates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    pub fn new() -> Self {
        return Self { rows: Vec::new() };
    }

    /// Creates a store of `count` unsigned rows whose data is the row's index
    /// rendered in decimal ("0", "1", ...).
    ///
    /// # Parameters
    /// - `count`: The number of rows to create.
    ///
    /// # Returns
    /// A `RowStore` holding `count` rows, none of them signed.
    pub fn seed(count: usize) -> Self {
        let mut rows: Vec<Row> = Vec::with_capacity(count);
        for i in 0..count {
            rows.push(Row::new(i.to_string().as_bytes()));
        }
        return Self { rows };
    }

    pub fn push(&mut self, row: Row) -> () {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        return self.rows.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.rows.is_empty();
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        return self.rows.get(index);
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Row> {
        return self.rows.get_mut(index);
    }

    pub fn iter(&self) -> Iter<'_, Row> {
        return self.rows.iter();
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, Row> {
        return self.rows.iter_mut();
    }

    /// Swaps two rows in place, signatures included.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) -> () {
        self.rows.swap(a, b);
    }

    /// Signatures in store order, `None` for unsigned rows.
    pub fn signatures(&self) -> Vec<Option<Signature>> {
        return self.rows.iter().map(|row| row.signature).collect();
    }

    pub fn is_signed(&self) -> bool {
        return self.rows.iter().all(|row| row.signature.is_some());
    }
}

impl From<Vec<Row>> for RowStore {
    fn from(rows: Vec<Row>) -> Self {
        return Self { rows };
    }
}

impl<'a> IntoIterator for &'a RowStore {
    type Item = &'a Row;
    type IntoIter = Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        return self.rows.iter();
    }
}
