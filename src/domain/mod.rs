pub mod highlight;
pub mod result_record;
pub mod series;
pub mod settings;
