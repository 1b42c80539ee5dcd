use xrmeta::prelude::*;

#[derive(Entity)]
pub union Raw {
    pub int: u32,
    pub float: f32,
}

fn main() {}
