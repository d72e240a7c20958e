// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! ANSI terminal styling.

use std::fmt::{Debug, Display};

pub const BLUE: &str = "\x1b[0;34m";
pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const PINK: &str = "\x1b[38;5;161;1m";
pub const RED: &str = "\x1b[31;1m";
pub const YELLOW: &str = "\x1b[33;1m";
pub const RESET: &str = "\x1b[0;0m";

pub trait Color: Display {
    fn blue(&self) -> String;
    fn grey(&self) -> String;
    fn lavender(&self) -> String;
    fn mint(&self) -> String;
    fn pink(&self) -> String;
    fn red(&self) -> String;
    fn yellow(&self) -> String;
}

macro_rules! color_method {
    ($name:ident, $color:expr) => {
        fn $name(&self) -> String {
            format!("{}{}{RESET}", $color, self)
        }
    };
}

impl<T: Display> Color for T {
    color_method!(blue, BLUE);
    color_method!(grey, GREY);
    color_method!(lavender, LAVENDER);
    color_method!(mint, MINT);
    color_method!(pink, PINK);
    color_method!(red, RED);
    color_method!(yellow, YELLOW);
}

pub trait DebugColor: Debug {
    fn debug_grey(&self) -> String;
    fn debug_lavender(&self) -> String;
    fn debug_mint(&self) -> String;
    fn debug_red(&self) -> String;
}

macro_rules! debug_color_method {
    ($name:ident, $color:expr) => {
        fn $name(&self) -> String {
            format!("{}{:?}{RESET}", $color, self)
        }
    };
}

impl<T: Debug> DebugColor for T {
    debug_color_method!(debug_grey, GREY);
    debug_color_method!(debug_lavender, LAVENDER);
    debug_color_method!(debug_mint, MINT);
    debug_color_method!(debug_red, RED);
}
