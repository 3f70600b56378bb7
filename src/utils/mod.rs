pub mod child_process;
pub mod keysym_lookup;
