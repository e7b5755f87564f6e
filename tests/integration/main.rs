//! Integration tests for es-fair-value

mod fetch_test;
mod pipeline_test;
