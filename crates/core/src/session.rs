//! Operator Session State Machine
//!
//! A session greets the operator, shows the planet, lands the rover at the
//! coordinate the operator types in, and then loops over the menu until the
//! operator finishes the connection. Every step runs to completion before the
//! next input is read, and every line of output goes through the `Notifier`
//! in program order.

use crate::{
    collaborators::Collaborators,
    command::CommandSequence,
    coordinate::Coordinate,
    error::InputError,
    io::{InputSource, Notifier},
    menu::{MENU_LINES, MenuOption},
};
use anyhow::Result;
use tracing::{debug, error, info, instrument, warn};

const BANNER: [&str; 6] = [
    r"_  _ ____ ____ ____    ____ ____ _  _ ____ ____    _  _ _ ____ ____ _ ____ _  _",
    r"|\/| |__| |__/ [__     |__/ |  | |  | |___ |__/    |\/| | [__  [__  | |  | |\ |",
    r"|  | |  | |  \ ___]    |  \ |__|  \/  |___ |  \    |  | | ___] ___] | |__| | \|",
    r"_  _ ____ ____ ____    ____ ____ _  _ ____ ____    _  _ _ ____ ____ _ ____ _  _",
    "Initializing...",
    "Connection established successfully!",
];

const FAREWELL: [&str; 2] = ["Shutting down system...", "Bye bye, see you next time ;)"];

pub const SELECT_PROMPT: &str = "Select an option: ";
pub const COMMANDS_PROMPT: &str = "Enter commands - [Forward: f, Left: l, Right: r]: ";
pub const X_PROMPT: &str = "X position: ";
pub const Y_PROMPT: &str = "Y position: ";

/// Lifecycle of a single operator connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Initializing,
    MenuLoop,
    Terminated,
}

/// One operator connection, from the startup banner to shutdown.
pub struct Session<I, N> {
    state: SessionState,
    collaborators: Collaborators,
    input: I,
    notifier: N,
}

impl<I: InputSource, N: Notifier> Session<I, N> {
    /// Creates a session for a freshly opened connection.
    ///
    /// The session starts in `SessionState::Initializing`; nothing is read or
    /// rendered until `run` or `step` is called.
    ///
    /// # Arguments
    ///
    /// * `collaborators` - The planet and rover capabilities every workflow
    ///   goes through. The session keeps no rover state of its own.
    /// * `input` - Where operator lines come from, one per prompt.
    /// * `notifier` - Where every line of output is rendered, in order.
    pub fn new(collaborators: Collaborators, input: I, notifier: N) -> Self {
        Self {
            state: SessionState::Initializing,
            collaborators,
            input,
            notifier,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True until the operator chooses to finish the connection.
    pub fn is_running(&self) -> bool {
        self.state != SessionState::Terminated
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Drives the session until it terminates.
    ///
    /// Collaborator and input failures are not handled here: they end the
    /// session and are returned to the caller unchanged.
    #[instrument(name = "rover_session", skip_all)]
    pub async fn run(&mut self) -> Result<()> {
        info!("Rover session started");
        while self.is_running() {
            if let Err(e) = self.step().await {
                error!(error = ?e, state = ?self.state, "Rover session aborted");
                return Err(e);
            }
        }
        info!("Rover session finished");
        Ok(())
    }

    /// Performs exactly one transition and returns the new state.
    ///
    /// In `MenuLoop` this reads one menu choice and runs its workflow. Once
    /// `Terminated`, no input is read.
    pub async fn step(&mut self) -> Result<SessionState> {
        let next = match self.state {
            SessionState::Initializing => {
                self.initialize().await?;
                self.print_available_options();
                SessionState::MenuLoop
            }
            SessionState::MenuLoop => {
                let raw = self.input.read_line(SELECT_PROMPT).await?;
                self.dispatch(MenuOption::parse(&raw)).await?
            }
            SessionState::Terminated => SessionState::Terminated,
        };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "Session state changed");
        }
        self.state = next;
        Ok(next)
    }

    async fn initialize(&mut self) -> Result<()> {
        for line in BANNER {
            self.notifier.notify(line);
        }
        self.print_planet_details().await?;
        self.set_rover_initial_position().await
    }

    async fn dispatch(&mut self, option: MenuOption) -> Result<SessionState> {
        debug!(?option, "Dispatching menu option");
        match option {
            MenuOption::ViewPlanet => self.print_planet_details().await?,
            MenuOption::ViewPosition => self.print_rover_position().await?,
            MenuOption::SendCommands => self.send_rover_commands().await?,
            MenuOption::Shutdown => {
                self.shut_down();
                return Ok(SessionState::Terminated);
            }
            MenuOption::Unrecognized => self.print_available_options(),
        }
        Ok(SessionState::MenuLoop)
    }

    fn print_available_options(&mut self) {
        for line in MENU_LINES {
            self.notifier.notify(line);
        }
    }

    async fn print_planet_details(&mut self) -> Result<()> {
        let planet = self.collaborators.planet.describe_planet().await?;
        self.notifier.notify("Planet information:");
        self.notifier.notify(&planet.to_string());
        Ok(())
    }

    async fn print_rover_position(&mut self) -> Result<()> {
        let position = self.collaborators.position.describe_rover_position().await?;
        self.notifier
            .notify(&format!("Current Rover coordinates are: {position}"));
        Ok(())
    }

    async fn send_rover_commands(&mut self) -> Result<()> {
        let raw = self.input.read_line(COMMANDS_PROMPT).await?;
        let commands = CommandSequence::from_raw(&raw);
        debug!(count = commands.len(), "Sending rover commands");
        self.collaborators
            .commands
            .apply_rover_commands(commands)
            .await?;
        self.print_rover_position().await
    }

    async fn set_rover_initial_position(&mut self) -> Result<()> {
        self.notifier.notify("Set Rover initial position");
        let raw_x = self.read_axis(X_PROMPT).await?;
        let raw_y = self.read_axis(Y_PROMPT).await?;
        let Coordinate { x, y } = Coordinate::from_raw(&raw_x, &raw_y);
        info!(x, y, "Setting rover initial position");
        self.collaborators
            .placement
            .set_rover_initial_position(x, y)
            .await?;
        self.print_rover_position().await
    }

    /// Reads one coordinate axis. A closed input counts as an empty answer,
    /// which coerces to 0 like any other unusable value.
    async fn read_axis(&mut self, prompt: &str) -> Result<String> {
        match self.input.read_line(prompt).await {
            Ok(raw) => Ok(raw),
            Err(e) if matches!(e.downcast_ref::<InputError>(), Some(InputError::Closed)) => {
                warn!(prompt, "Input closed at coordinate prompt, using 0");
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }

    fn shut_down(&mut self) {
        for line in FAREWELL {
            self.notifier.notify(line);
        }
        info!("Operator finished the connection");
    }
}
