mod document_writer_tests;
mod render_options_tests;
