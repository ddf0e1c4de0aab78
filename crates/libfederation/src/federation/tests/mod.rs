mod federated_document_builder_tests;
mod property_tests;
mod reserved_tests;
