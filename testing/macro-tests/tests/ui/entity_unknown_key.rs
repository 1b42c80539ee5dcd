use xrmeta::prelude::*;

#[derive(Entity)]
#[entity(table)]
pub struct Account {}

fn main() {}
