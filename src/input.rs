// Copyright (c) 2026 rezky_nightky

use std::io::Result;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crossterm::event::{self, Event};

pub type Events = Receiver<Result<Event>>;

/// Starts the thread that blocks on terminal input and queues every event.
pub fn spawn() -> Result<Events> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("input".into())
        .spawn(move || forward(event::read, tx))?;
    Ok(rx)
}

/// Pumps `source` into `tx` until a read fails or nobody is listening.
fn forward(mut source: impl FnMut() -> Result<Event>, tx: Sender<Result<Event>>) {
    loop {
        let ev = source();
        let failed = ev.is_err();
        if tx.send(ev).is_err() || failed {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn forwards_in_order_and_stops_after_an_error() {
        let mut script = vec![
            Ok(Event::Resize(10, 5)),
            Ok(key('a')),
            Err(Error::new(ErrorKind::Other, "tty gone")),
            Ok(key('z')),
        ]
        .into_iter();
        let (tx, rx) = mpsc::channel();
        forward(move || script.next().unwrap_or(Ok(Event::FocusLost)), tx);

        let got: Vec<Result<Event>> = rx.iter().collect();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].as_ref().unwrap(), &Event::Resize(10, 5));
        assert_eq!(got[1].as_ref().unwrap(), &key('a'));
        assert!(got[2].is_err());
    }

    #[test]
    fn stops_when_the_receiver_is_gone() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut reads = 0;
        forward(
            || {
                reads += 1;
                Ok(Event::FocusGained)
            },
            tx,
        );
        assert_eq!(reads, 1);
    }
}
