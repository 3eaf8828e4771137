//! Terminal front end for the nested select control

pub mod terminal;
pub mod theme;
pub mod widgets;
