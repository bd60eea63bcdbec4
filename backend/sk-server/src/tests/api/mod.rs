mod client_key;
mod error;
mod extractors;
mod requests;
