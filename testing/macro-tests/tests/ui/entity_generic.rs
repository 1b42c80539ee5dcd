use xrmeta::prelude::*;

#[derive(Entity)]
#[entity(logical_name = "holder")]
pub struct Holder<T> {
    #[attribute(logical_name = "value")]
    pub value: T,
}

fn main() {}
