//! Theme colors for the command line front-end.
//!
//! - FERRUM_RED: Main Color
//! - FERRUM_GREY: Secondary text, e.g. row dumps

use colored::Color;

pub(crate) const FERRUM_RED: Color = Color::TrueColor {
    r: 255,
    g: 87,
    b: 87,
};

pub(crate) const FERRUM_GREY: Color = Color::TrueColor {
    r: 160,
    g: 160,
    b: 160,
};
