mod operation_builder_tests;
mod operation_tests;
