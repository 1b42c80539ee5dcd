use xrmeta::prelude::*;

#[derive(Entity)]
#[entity(logical_name = "contact")]
pub struct Contact {
    #[attribute(logical_name = "name")]
    pub first: String,
    #[attribute(logical_name = "name")]
    pub second: String,
}

fn main() {}
