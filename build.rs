extern crate vergen;
use anyhow::Result;
use vergen::*;

fn main() -> Result<()> {
    vergen(Config::default())
}
