mod attribute;
mod decl;
mod entity;

pub use self::attribute::*;
pub use self::decl::*;
pub use self::entity::*;
