//! Integration tests driven through the `TestDrive` harness.

mod job_flow_tests;
mod recycling_tests;
