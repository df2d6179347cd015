pub mod analyzemessage;
pub mod featuredcases;
pub mod featuredresources;
pub mod hello;
pub mod listcases;
pub mod listresources;
pub mod reportwizard;
