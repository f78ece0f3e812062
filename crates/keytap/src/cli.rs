//! Command-line interface definitions for keytap.

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;
use sendkey::{Key, Scancode};

/// Command-line interface for the `keytap` binary.
#[derive(Parser, Debug)]
#[command(
    name = "keytap",
    about = "Type text, tap keys and press hotkeys in the focused window",
    version
)]
pub struct Cli {
    /// Logging controls shared across binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Pacing and start-up options.
    #[command(flatten)]
    pub timing: TimingArgs,

    /// What to send.
    #[command(subcommand)]
    pub command: Commands,
}

/// Timing options common to every command.
#[derive(Args, Debug, Clone)]
pub struct TimingArgs {
    /// Pause after each key press or release.
    #[arg(
        long,
        global = true,
        value_parser = humantime::parse_duration,
        default_value = "20ms",
        value_name = "DURATION"
    )]
    pub delay: Duration,

    /// Wait before sending anything, to give time to focus the target window.
    #[arg(
        long,
        global = true,
        value_parser = humantime::parse_duration,
        default_value = "0s",
        value_name = "DURATION"
    )]
    pub wait: Duration,
}

/// Top-level keytap commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Type text as Unicode input. Multiple arguments are joined with spaces.
    Type {
        /// Text to type.
        #[arg(value_name = "TEXT", num_args = 1.., required = true)]
        text: Vec<String>,
    },
    /// Tap each key in turn: a key name ("enter", "f5") or a single character.
    Tap {
        /// Keys to tap, in order.
        #[arg(value_name = "KEY", num_args = 1.., required = true)]
        keys: Vec<String>,
    },
    /// Hold keys together, e.g. `hotkey ctrl shift esc` or `hotkey ctrl+shift+esc`.
    Hotkey {
        /// Keys in press order, or one "+"-joined chord.
        #[arg(value_name = "KEY", num_args = 1.., required = true)]
        keys: Vec<String>,
    },
    /// Press a raw virtual key without releasing it.
    Down {
        /// Virtual-key code (0x-prefixed hex, or decimal of two or more digits)
        /// or key name. A lone digit such as `1` names the digit key.
        #[arg(value_name = "VK", value_parser = parse_vk)]
        vk: Scancode,
    },
    /// Release a raw virtual key.
    Up {
        /// Virtual-key code (0x-prefixed hex, or decimal of two or more digits)
        /// or key name. A lone digit such as `1` names the digit key.
        #[arg(value_name = "VK", value_parser = parse_vk)]
        vk: Scancode,
    },
    /// Run a RON script of actions.
    Play {
        /// Script file.
        #[arg(value_name = "PATH")]
        script: PathBuf,
    },
    /// List every named key with its virtual-key code.
    Keys,
}

/// Parse a virtual-key argument: `0x41`, `65`, or a key spec such as `a`.
///
/// Single characters are always key specs, so `1` is the digit key (0x31)
/// while `10` is code 10; use `0x01` for code 1.
pub fn parse_vk(s: &str) -> Result<Scancode, String> {
    let t = s.trim();
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return Scancode::from_str_radix(hex, 16)
            .map_err(|e| format!("invalid hex code {s:?}: {e}"));
    }
    if t.len() > 1 && t.chars().all(|c| c.is_ascii_digit()) {
        return t
            .parse::<Scancode>()
            .map_err(|e| format!("invalid code {s:?}: {e}"));
    }
    Key::from_spec(t)
        .map(Key::vk)
        .ok_or_else(|| format!("unknown key {s:?}"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn vk_arguments() {
        assert_eq!(parse_vk("0x41"), Ok(0x41));
        assert_eq!(parse_vk("0X0d"), Ok(0x0D));
        assert_eq!(parse_vk("65"), Ok(65));
        assert_eq!(parse_vk("enter"), Ok(0x0D));
        assert_eq!(parse_vk("a"), Ok(0x41));
        // A lone digit is the digit key, not code 1.
        assert_eq!(parse_vk("1"), Ok(0x31));
        assert_eq!(parse_vk("10"), Ok(10));
        assert_eq!(parse_vk("0x01"), Ok(1));
        assert!(parse_vk("0xZZ").is_err());
        assert!(parse_vk("nope").is_err());
    }

    #[test]
    fn global_timing_flags() {
        let args = ["keytap", "tap", "enter", "--delay", "5ms", "--wait", "1s"];
        let cli = Cli::try_parse_from(args).expect("parse");
        assert_eq!(cli.timing.delay, Duration::from_millis(5));
        assert_eq!(cli.timing.wait, Duration::from_secs(1));
        assert!(matches!(cli.command, Commands::Tap { ref keys } if keys == &["enter"]));
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["keytap", "type", "hello", "world"]).expect("parse");
        assert_eq!(cli.timing.delay, Duration::from_millis(20));
        assert_eq!(cli.timing.wait, Duration::ZERO);
        assert!(matches!(cli.command, Commands::Type { ref text } if text.len() == 2));
    }

    #[test]
    fn hotkey_requires_keys() {
        assert!(Cli::try_parse_from(["keytap", "hotkey"]).is_err());
    }
}
