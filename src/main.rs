mod events;
mod replay;
mod setup;

use replay::replay_events;
use services::form::{ContactForm, LoggingSink};
use setup::{set_up_tracing, AppConfig};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    set_up_tracing(&config)?;

    let mut form = ContactForm::new();
    replay_events(io::stdin().lock(), io::stdout().lock(), &mut form, &LoggingSink)?;

    Ok(())
}
