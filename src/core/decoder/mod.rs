pub mod stream;
pub mod record_decoder;

pub use stream::{read_full, skip_header};
pub use record_decoder::{decode_records, DecodeOutcome, RecordDecoder, StreamKind, Truncation};
