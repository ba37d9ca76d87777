mod error;
mod image;
mod report;
