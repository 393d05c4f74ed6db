pub mod email_parser;

pub use email_parser::{IngestError, Ingested, ingest, parse_emails};
