use std::borrow::Cow;

/// Error types specific to the migration feature.
#[sgrate_derive::sgrate_error]
pub enum MigrationError {
    /// The operator requested a stream id that is absent from the input file.
    #[error("stream '{stream_id}' not found in the source file")]
    NotFoundInSource { stream_id: String },

    /// A targeted stream id has no matching remote deployment.
    #[error("stream '{stream_id}' is not deployed")]
    NotDeployed { stream_id: String },

    /// A remote drop or deploy call failed or was rejected.
    #[error("Remote call error{}: {source}", format_context(.context))]
    Client {
        #[source]
        source: sgrate_client::ClientError,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal migration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
