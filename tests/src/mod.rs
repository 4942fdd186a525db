#[cfg(test)]
pub mod execute_client_tests;
