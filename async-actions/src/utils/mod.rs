pub mod const_checks;
