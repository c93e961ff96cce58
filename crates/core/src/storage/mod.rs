pub mod csv_codec;
pub mod format;
pub mod json_codec;
pub mod manager;
