use xrmeta::prelude::*;

#[derive(Entity)]
#[entity(logical_name = "contact")]
pub struct Contact {
    #[attribute(logical_name = "fullname")]
    #[attribute(logical_name = "name")]
    pub name: String,
}

fn main() {}
