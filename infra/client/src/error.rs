use std::borrow::Cow;

/// A specialized [`ClientError`] enum of this crate.
#[sgrate_derive::sgrate_error]
pub enum ClientError {
    /// Validation errors.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Occurs when connectivity or the health check fails.
    #[error("Connection failed{}: {message}", format_context(.context))]
    Connection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A wrapper for underlying HTTP transport errors.
    #[error("Transport error{}: {source}", format_context(.context))]
    Transport {
        #[source]
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },

    /// The remote node rejected the call.
    #[error("Remote call failed{}: {message}", format_context(.context))]
    Rpc { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Failure reading a schema file from disk.
    #[error("Schema file error{}: {source}", format_context(.context))]
    SchemaFile {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    /// JSON encoding or decoding failure.
    #[error("JSON error{}: {source}", format_context(.context))]
    Json {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal client error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
