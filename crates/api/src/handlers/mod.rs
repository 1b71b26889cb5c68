pub mod cinema;
