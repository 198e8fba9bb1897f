use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};

use crate::core::Action;

/// Maps one line of user input to an action.
///
/// `q`, `quit` and `exit` quit. Anything else is the exclusion identifier
/// for a new fetch; a blank line fetches everyone. The text is passed
/// through unparsed so that bad input surfaces as a failed fetch.
pub fn parse_line(line: &str) -> Action {
    match line.trim() {
        "q" | "quit" | "exit" => Action::Quit,
        "" => Action::Fetch { excluding: None },
        id => Action::Fetch {
            excluding: Some(id.to_string()),
        },
    }
}

/// Forwards every line from `reader` as an action until quit or EOF.
/// EOF is reported as `Action::Quit`.
pub fn read_actions<R: BufRead>(reader: R, tx: &mpsc::Sender<Action>) {
    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };
        let action = parse_line(&line);
        debug!("Input line {:?} -> {:?}", line, action);
        let quit = action == Action::Quit;
        if tx.send(action).is_err() || quit {
            return;
        }
    }
    let _ = tx.send(Action::Quit);
}

/// Reads stdin on a dedicated thread so the main loop never blocks on it.
pub fn spawn_stdin_reader(tx: mpsc::Sender<Action>) -> thread::JoinHandle<()> {
    thread::spawn(move || read_actions(io::stdin().lock(), &tx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("q"), Action::Quit);
        assert_eq!(parse_line(" quit \n"), Action::Quit);
        assert_eq!(parse_line(""), Action::Fetch { excluding: None });
        assert_eq!(
            parse_line(" 3 "),
            Action::Fetch {
                excluding: Some("3".to_string())
            }
        );
        // Not validated here
        assert_eq!(
            parse_line("abc"),
            Action::Fetch {
                excluding: Some("abc".to_string())
            }
        );
    }

    #[test]
    fn test_read_actions_stops_at_quit() {
        let (tx, rx) = mpsc::channel();
        read_actions(Cursor::new("1\n\nq\n2\n"), &tx);
        drop(tx);

        let actions: Vec<Action> = rx.iter().collect();
        assert_eq!(
            actions,
            vec![
                Action::Fetch {
                    excluding: Some("1".to_string())
                },
                Action::Fetch { excluding: None },
                Action::Quit,
            ]
        );
    }

    #[test]
    fn test_read_actions_eof_quits() {
        let (tx, rx) = mpsc::channel();
        read_actions(Cursor::new("5"), &tx);
        drop(tx);

        let actions: Vec<Action> = rx.iter().collect();
        assert_eq!(
            actions,
            vec![
                Action::Fetch {
                    excluding: Some("5".to_string())
                },
                Action::Quit,
            ]
        );
    }
}
