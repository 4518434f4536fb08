//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn event_style(&self) -> ColoredString;
    fn hint_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn actions_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn farewell_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).bold()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn event_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn hint_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn success_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn actions_style(&self) -> ColoredString {
        self.truecolor(75, 80, 75)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(75, 180, 255)
    }
    fn farewell_style(&self) -> ColoredString {
        self.bold().truecolor(220, 40, 220)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn event_style(&self) -> ColoredString {
        self.as_str().event_style()
    }
    fn hint_style(&self) -> ColoredString {
        self.as_str().hint_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn actions_style(&self) -> ColoredString {
        self.as_str().actions_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn farewell_style(&self) -> ColoredString {
        self.as_str().farewell_style()
    }
}
