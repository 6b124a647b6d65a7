mod parser;
mod schema;

pub use parser::{parse_export, read_export, AnnotatedDocument};
pub use schema::SOFA_TYPE;
