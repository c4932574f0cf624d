/// Lines rendered whenever the operator needs to see the available options.
pub const MENU_LINES: [&str; 6] = [
    "Available options: ",
    "- Press 1 to check planet details",
    "- Press 2 to check Rover position",
    "- Press 3 to send commands to Rover",
    "- Press 4 to finish connection",
    "",
];

/// The closed set of choices recognized by the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ViewPlanet,
    ViewPosition,
    SendCommands,
    Shutdown,
    Unrecognized,
}

impl MenuOption {
    /// Maps one raw input line to a menu option. Matching is exact.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "1" => MenuOption::ViewPlanet,
            "2" => MenuOption::ViewPosition,
            "3" => MenuOption::SendCommands,
            "4" => MenuOption::Shutdown,
            _ => MenuOption::Unrecognized,
        }
    }
}
