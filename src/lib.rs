pub mod output;
pub mod parser;
pub mod record;
pub mod scale;
