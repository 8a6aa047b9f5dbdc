// Bookshelf - server core
//
// Serves the informational pages, scrapes the book catalog on demand and
// renders it as a table, charts and CSV. Reference datasets are read from
// disk per request.
//
// Domain logic lives in domains/*; HTTP wiring lives in server/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
