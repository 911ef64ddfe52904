pub mod grass;
