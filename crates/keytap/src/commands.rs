//! Executes parsed commands against a [`Keyboard`].

use std::{fs, path::Path};

use sendkey::{Key, KeyInput, Keyboard, Script, parse_chord};
use tracing::{debug, info};

use crate::{
    cli::Commands,
    error::{Error, Result},
};

/// Keys for the `hotkey` command: one argument containing "+" is a chord
/// string, anything else is one key per argument.
pub fn hotkey_keys(args: &[String]) -> Result<Vec<KeyInput>> {
    match args {
        [one] if one.chars().count() > 1 && one.contains('+') => Ok(parse_chord(one)?),
        _ => args
            .iter()
            .map(|a| KeyInput::try_from(a).map_err(Error::from))
            .collect(),
    }
}

/// Load a RON script from disk.
pub fn load_script(path: &Path) -> Result<Script> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Script::from_ron(&text)?)
}

/// Run one injecting command. `Keys` is handled by the caller.
pub fn execute(kb: &Keyboard, command: &Commands) -> Result<()> {
    match command {
        Commands::Type { text } => {
            let text = text.join(" ");
            info!(chars = text.chars().count(), "typing");
            kb.type_text(&text);
        }
        Commands::Tap { keys } => {
            let keys = keys
                .iter()
                .map(KeyInput::try_from)
                .collect::<sendkey::Result<Vec<_>>>()?;
            for key in keys {
                kb.tap(key)?;
            }
        }
        Commands::Hotkey { keys } => {
            let keys = hotkey_keys(keys)?;
            info!(chord = %render(&keys), "hotkey");
            kb.hotkey(keys)?;
        }
        Commands::Down { vk } => kb.key_down(*vk),
        Commands::Up { vk } => kb.key_up(*vk),
        Commands::Play { script } => {
            let loaded = load_script(script)?;
            debug!(path = %script.display(), actions = loaded.actions.len(), "script_loaded");
            kb.run(&loaded)?;
        }
        Commands::Keys => {}
    }
    Ok(())
}

/// One line per named key: name, code, and spec when it differs.
pub fn key_table() -> Vec<String> {
    Key::ALL
        .iter()
        .map(|k| {
            let spec = k.to_spec();
            if spec == k.name().to_ascii_lowercase() {
                format!("{:<18} 0x{:02X}", k.name(), k.vk())
            } else {
                format!("{:<18} 0x{:02X}  {:?}", k.name(), k.vk(), spec)
            }
        })
        .collect()
}

fn render(keys: &[KeyInput]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use std::{env, io::Write, process, sync::Arc};

    use sendkey::{InputEvent, Recorder};

    use super::*;

    fn setup() -> (Arc<Recorder>, Keyboard) {
        let rec = Arc::new(Recorder::new());
        let kb = Keyboard::with_backend(rec.clone(), rec.clone());
        (rec, kb)
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn chord_or_separate_args() {
        let joined = hotkey_keys(&strings(&["ctrl+shift+esc"])).unwrap();
        let split = hotkey_keys(&strings(&["ctrl", "shift", "esc"])).unwrap();
        assert_eq!(joined, split);
        // A lone "+" is the plus character.
        assert_eq!(
            hotkey_keys(&strings(&["+"])).unwrap(),
            vec![KeyInput::Char('+')]
        );
        assert!(hotkey_keys(&strings(&["ctrl", "bogus"])).is_err());
    }

    #[test]
    fn hotkey_command() {
        let (rec, kb) = setup();
        let cmd = Commands::Hotkey {
            keys: strings(&["alt+f4"]),
        };
        execute(&kb, &cmd).unwrap();
        assert_eq!(
            rec.events(),
            vec![
                InputEvent::vk_down(0x12),
                InputEvent::vk_down(0x73),
                InputEvent::vk_up(0x73),
                InputEvent::vk_up(0x12),
            ]
        );
    }

    #[test]
    fn type_joins_words() {
        let (rec, kb) = setup();
        let cmd = Commands::Type {
            text: strings(&["a", "b"]),
        };
        execute(&kb, &cmd).unwrap();
        assert_eq!(rec.events().len(), 6);
        assert_eq!(rec.events()[2], InputEvent::unicode_down(u16::from(b' ')));
    }

    #[test]
    fn invalid_tap_stops_before_sending() {
        let (rec, kb) = setup();
        let cmd = Commands::Tap {
            keys: strings(&["nope", "enter"]),
        };
        assert!(matches!(
            execute(&kb, &cmd),
            Err(Error::SendKey(sendkey::Error::InvalidArgument(_)))
        ));
        assert!(rec.events().is_empty());
    }

    #[test]
    fn invalid_tap_after_valid_sends_nothing() {
        let (rec, kb) = setup();
        let cmd = Commands::Tap {
            keys: strings(&["enter", "nope"]),
        };
        assert!(matches!(
            execute(&kb, &cmd),
            Err(Error::SendKey(sendkey::Error::InvalidArgument(_)))
        ));
        assert!(rec.events().is_empty());
    }

    #[test]
    fn tap_sequence_in_order() {
        let (rec, kb) = setup();
        let cmd = Commands::Tap {
            keys: strings(&["tab", "enter"]),
        };
        execute(&kb, &cmd).unwrap();
        assert_eq!(
            rec.events(),
            vec![
                InputEvent::vk_down(0x09),
                InputEvent::vk_up(0x09),
                InputEvent::vk_down(0x0D),
                InputEvent::vk_up(0x0D),
            ]
        );
    }

    #[test]
    fn play_reads_script_file() {
        let dir = env::temp_dir().join(format!("keytap-test-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("script.ron");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "(delay_ms: Some(0), actions: [Tap(Key(Escape))])").unwrap();
        drop(f);

        let (rec, kb) = setup();
        execute(&kb, &Commands::Play { script: path.clone() }).unwrap();
        assert_eq!(
            rec.events(),
            vec![InputEvent::vk_down(0x1B), InputEvent::vk_up(0x1B)]
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_script_is_read_error() {
        let err = load_script(Path::new("/definitely/not/here.ron")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn key_table_lists_everything() {
        let table = key_table();
        assert_eq!(table.len(), Key::ALL.len());
        assert!(table.iter().any(|l| l.starts_with("Return") && l.contains("0x0D")));
        assert!(table.iter().any(|l| l.starts_with("OemComma") && l.contains("\",\"")));
    }
}
