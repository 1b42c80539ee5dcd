use xrmeta::prelude::*;

#[derive(Entity)]
#[entity(logical_name = "marker")]
pub struct Marker;

fn main() {}
