//! JavaScript/TypeScript module syntax shared by every template.

mod exports;
mod imports;
mod literal;
mod reserved;

pub use exports::Export;
pub use imports::Import;
pub use literal::string_literal;
pub use reserved::is_reserved_word;
