use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro study/break timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Pick a study length and a break length from the menus, then run the
countdown. When a session ends you are asked before the next one starts.

CONTROLS:
  s    Start, pause or resume
  r    Reset the current session
  q    Quit

Menus use UP/DOWN to select and ENTER to confirm.

FILES:
  ~/.pomo/config.yaml   Optional settings (tick interval, bar width, logging)
  ~/.pomo/pomo.log      Log output, only written when POMO_LOG is set")]
#[command(version)]
pub struct Cli {
    /// Add short presets (10 second study, 5 second break) for testing
    #[arg(long)]
    pub debug: bool,
}
