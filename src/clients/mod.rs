pub mod gsmarena;
