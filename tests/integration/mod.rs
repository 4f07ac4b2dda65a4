//! Integration tests for the gather source aggregator

mod aggregate_report;
