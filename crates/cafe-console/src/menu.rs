//! Menu choices

use std::fmt;

/// A top-level menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ShowStations,
    Rent,
    Stop,
    ActiveCustomers,
    AllCustomers,
    TotalRevenue,
}

impl MenuChoice {
    /// Every choice in menu order (Exit is listed last)
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ShowStations,
        MenuChoice::Rent,
        MenuChoice::Stop,
        MenuChoice::ActiveCustomers,
        MenuChoice::AllCustomers,
        MenuChoice::TotalRevenue,
        MenuChoice::Exit,
    ];

    /// Highest number accepted at the menu prompt
    pub const MAX_NUMBER: i32 = 6;

    pub fn from_number(n: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.number() == n)
    }

    pub fn number(self) -> i32 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::ShowStations => 1,
            MenuChoice::Rent => 2,
            MenuChoice::Stop => 3,
            MenuChoice::ActiveCustomers => 4,
            MenuChoice::AllCustomers => 5,
            MenuChoice::TotalRevenue => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::ShowStations => "Show Computers",
            MenuChoice::Rent => "Rent a Computer",
            MenuChoice::Stop => "Stop Rent & Pay",
            MenuChoice::ActiveCustomers => "View Active Customers",
            MenuChoice::AllCustomers => "View All Customers",
            MenuChoice::TotalRevenue => "View Total Revenue",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
