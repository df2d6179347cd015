pub mod cases;
pub mod report;
pub mod resources;
pub mod webcore;
