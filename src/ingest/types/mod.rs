pub mod csv;
pub mod docx;
pub mod pdf;
pub mod txt;
