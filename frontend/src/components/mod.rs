pub mod import_field;
