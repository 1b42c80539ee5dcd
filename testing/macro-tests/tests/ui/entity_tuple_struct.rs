use xrmeta::prelude::*;

#[derive(Entity)]
#[entity(logical_name = "pair")]
pub struct Pair(String, i32);

fn main() {}
