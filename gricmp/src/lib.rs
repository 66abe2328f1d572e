//! reading clustering solutions from csv files

pub mod io;
