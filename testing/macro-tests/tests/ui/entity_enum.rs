use xrmeta::prelude::*;

#[derive(Entity)]
pub enum Status {
    Active,
    Inactive,
}

fn main() {}
