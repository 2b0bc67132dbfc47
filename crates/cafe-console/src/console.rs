//! Interactive menu loop
//!
//! Reads one command per line, dispatches to the registry and prints the
//! result. Bad input is reported and the menu is shown again; only I/O
//! errors on the console streams end the loop early.

use cafe_core::Registry;
use cafe_util::{format_amount, format_datetime_full, Clock, StationId};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use crate::MenuChoice;

/// Whether the loop should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Station command being prompted for
#[derive(Debug, Clone, Copy)]
enum StationAction {
    Rent,
    Stop,
}

impl StationAction {
    fn verb(self) -> &'static str {
        match self {
            StationAction::Rent => "rent",
            StationAction::Stop => "stop",
        }
    }

    fn gerund(self) -> &'static str {
        match self {
            StationAction::Rent => "renting",
            StationAction::Stop => "stopping",
        }
    }
}

/// Outcome of reading a station id at a prompt
enum StationPrompt {
    Station(StationId),
    Rejected,
    EndOfInput,
}

/// The interactive controller
pub struct Console<R, W, C> {
    registry: Registry,
    title: String,
    input: R,
    output: W,
    clock: C,
}

impl<R: BufRead, W: Write, C: Clock> Console<R, W, C> {
    pub fn new(
        registry: Registry,
        title: impl Into<String>,
        input: R,
        output: W,
        clock: C,
    ) -> Self {
        Self {
            registry,
            title: title.into(),
            input,
            output,
            clock,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the operator exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Flow::Continue {}
        self.output.flush()
    }

    /// Show the menu and handle one command
    pub fn step(&mut self) -> io::Result<Flow> {
        self.print_menu()?;

        let Some(line) = self.read_line()? else {
            debug!("Input closed at menu prompt");
            return Ok(Flow::Exit);
        };

        let choice = match line.trim().parse::<i32>() {
            Ok(n) => MenuChoice::from_number(n),
            Err(_) => {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(choice) = choice else {
            writeln!(
                self.output,
                "Invalid choice. Please select 0-{}.",
                MenuChoice::MAX_NUMBER
            )?;
            return Ok(Flow::Continue);
        };

        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::ShowStations => self.show_stations(),
            MenuChoice::Rent => self.rent(),
            MenuChoice::Stop => self.stop(),
            MenuChoice::ActiveCustomers => self.show_active_customers(),
            MenuChoice::AllCustomers => self.show_all_customers(),
            MenuChoice::TotalRevenue => self.show_total_revenue(),
            MenuChoice::Exit => {
                writeln!(self.output, "Thank you for using the system!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== {} =====", self.title)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        self.prompt("Enter choice: ")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Next input line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_station_id(&mut self, action: StationAction) -> io::Result<StationPrompt> {
        let count = self.registry.station_count();
        self.prompt(&format!("Enter computer ID to {} (1-{}): ", action.verb(), count))?;

        let Some(line) = self.read_line()? else {
            return Ok(StationPrompt::EndOfInput);
        };

        let Ok(id) = line.trim().parse::<i32>() else {
            writeln!(self.output, "Invalid input for {}. Try again.", action.gerund())?;
            return Ok(StationPrompt::Rejected);
        };

        match u32::try_from(id) {
            Ok(id) if (1..=count).contains(&id) => Ok(StationPrompt::Station(StationId::new(id))),
            _ => {
                writeln!(self.output, "Invalid computer ID. Must be 1-{}.", count)?;
                Ok(StationPrompt::Rejected)
            }
        }
    }

    fn show_stations(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "==== [Computer Status] ====")?;
        for view in self.registry.list_stations() {
            writeln!(self.output, "{}", view)?;
        }
        Ok(Flow::Continue)
    }

    fn rent(&mut self) -> io::Result<Flow> {
        let station_id = match self.read_station_id(StationAction::Rent)? {
            StationPrompt::Station(id) => id,
            StationPrompt::Rejected => return Ok(Flow::Continue),
            StationPrompt::EndOfInput => return Ok(Flow::Exit),
        };

        let available = self
            .registry
            .find_station(station_id)
            .is_some_and(|s| s.is_available());
        if !available {
            writeln!(self.output, "Computer not available.")?;
            return Ok(Flow::Continue);
        }

        self.prompt("Enter your name: ")?;
        let Some(line) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let name = line.trim();
        if name.is_empty() {
            writeln!(self.output, "Name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        match self.registry.rent(station_id, name, self.clock.now()) {
            Ok(rental) => writeln!(
                self.output,
                "{} rented Computer {}. Session started at {}",
                name,
                station_id,
                format_datetime_full(&rental.started_at)
            )?,
            Err(e) => {
                warn!(station_id = %station_id, error = %e, "Rent rejected");
                writeln!(self.output, "{}", e)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn stop(&mut self) -> io::Result<Flow> {
        let station_id = match self.read_station_id(StationAction::Stop)? {
            StationPrompt::Station(id) => id,
            StationPrompt::Rejected => return Ok(Flow::Continue),
            StationPrompt::EndOfInput => return Ok(Flow::Exit),
        };

        let occupant = self
            .registry
            .find_station(station_id)
            .and_then(|s| s.occupant())
            .and_then(|id| self.registry.customer(id))
            .map(|c| c.name().to_string());
        let Some(name) = occupant else {
            writeln!(self.output, "[Computer is not currently rented].")?;
            return Ok(Flow::Continue);
        };

        match self.registry.checkout(station_id, self.clock.now()) {
            Ok(checkout) => {
                writeln!(self.output, "Session ended for {}", name)?;
                writeln!(self.output, "Payment: {}", format_amount(checkout.payment))?;
            }
            Err(e) => {
                warn!(station_id = %station_id, error = %e, "Checkout rejected");
                writeln!(self.output, "{}", e)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn show_active_customers(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "===== ACTIVE CUSTOMERS =====")?;

        let active = self.registry.list_active_sessions(self.clock.now());
        if active.is_empty() {
            writeln!(self.output, "No active customers.")?;
        }
        for view in active {
            writeln!(self.output, "{}", view)?;
        }
        Ok(Flow::Continue)
    }

    fn show_all_customers(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "--- All Customers ---")?;

        let customers = self.registry.list_all_customers();
        if customers.is_empty() {
            writeln!(self.output, "No customers yet.")?;
        }
        for view in customers {
            writeln!(self.output, "{}", view)?;
        }
        Ok(Flow::Continue)
    }

    fn show_total_revenue(&mut self) -> io::Result<Flow> {
        writeln!(
            self.output,
            "Total Revenue: {}",
            format_amount(self.registry.total_revenue())
        )?;
        Ok(Flow::Continue)
    }
}
