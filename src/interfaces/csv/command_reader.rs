use crate::domain::command::CartCommand;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads cart actions (`action,item` rows) from a CSV source.
///
/// Whitespace around fields is trimmed and short rows are accepted, so `clear` can be
/// written without a trailing comma.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one result per row; a bad row does not end the stream.
    pub fn commands(self) -> impl Iterator<Item = Result<CartCommand>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
