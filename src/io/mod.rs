pub mod csv_export;
pub mod excel_read;
