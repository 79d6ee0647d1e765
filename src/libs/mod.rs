pub mod fas;
pub mod io;
pub mod viewer;
