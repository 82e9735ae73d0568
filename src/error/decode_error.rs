/// Represents all errors that can occur while decoding an encoded query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The query is not valid standard base64.
    #[error("Unable to decode the string {query}")]
    InvalidBase64 {
        /// The query as received.
        query:  String,
        /// Why the decoder rejected it.
        reason: String,
    },
    /// The decoded bytes are not UTF-8.
    #[error("{query} failed to be valid UTF-8")]
    InvalidUtf8 {
        /// The query as received.
        query: String,
    },
}
