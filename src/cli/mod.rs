pub mod command;
pub mod dump;
pub mod field;
pub mod lcm;
pub mod palette;
pub mod scan;
