use std::borrow::Cow;

/// Error types specific to CSV loading.
#[sgrate_derive::sgrate_error]
pub enum TaxonomyError {
    /// The CSV file could not be opened or read.
    #[error("File error{}: {source}", format_context(.context))]
    File { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The CSV content violates the expected shape (malformed rows, wrong
    /// field count, missing header).
    #[error("Format error{}: {message}", format_context(.context))]
    Format { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A numeric field did not parse.
    #[error("Parse error{}: {message}", format_context(.context))]
    Parse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal taxonomy error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
