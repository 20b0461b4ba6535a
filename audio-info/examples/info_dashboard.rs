//! Audio Info Dashboard - Minimal SDK demo
//!
//! Renders the event log and simulates a playback session posting
//! notifications. Re-renders only on keypress or log appends.
//!
//! Keys: i = Get Info, q = quit
//!
//! Run: cargo run -p audio-info --example info_dashboard

use audio_info::{keys, AudioInfoSystem, AudioPort, AudioRoute, Channel, NowPlayingItem, Payload, PortType};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};
use std::io;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc, Arc,
};
use std::thread;
use std::time::Duration;

enum Trigger {
    Key(KeyCode),
    Appended,
}

const TRACKS: [(&str, &str, &str); 3] = [
    ("The Lighthouse Keepers", "Harbour Songs", "North Light"),
    ("Marta Reyes", "Night Drives", "Mile After Mile"),
    ("Glasshouse Quartet", "Winter Sessions", "Thaw"),
];

fn main() -> io::Result<()> {
    audio_info::logging::init_silent().ok();

    let system = Arc::new(AudioInfoSystem::new().expect("system wiring failed"));
    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::channel();

    // Keyboard thread
    let tx_k = tx.clone();
    let run_k = running.clone();
    thread::spawn(move || {
        while run_k.load(Ordering::SeqCst) {
            if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                if let Ok(Event::Key(k)) = event::read() {
                    if k.kind == KeyEventKind::Press {
                        let _ = tx_k.send(Trigger::Key(k.code));
                    }
                }
            }
        }
    });

    // Log event thread
    let tx_l = tx.clone();
    let run_l = running.clone();
    let log_iter = system.iter();
    thread::spawn(move || {
        while run_l.load(Ordering::SeqCst) {
            if log_iter.recv_timeout(Duration::from_millis(50)).is_some() {
                let _ = tx_l.send(Trigger::Appended);
            }
        }
    });

    // Simulation thread: a little listening session on a loop
    let sim = system.clone();
    let run_sim = running.clone();
    thread::spawn(move || {
        let mut i = 0usize;
        while run_sim.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(1500));
            if !run_sim.load(Ordering::SeqCst) {
                break;
            }
            match i % 6 {
                0 => {
                    let (artist, album, title) = TRACKS[(i / 6) % TRACKS.len()];
                    sim.set_now_playing(NowPlayingItem::with_metadata(artist, album, title));
                    sim.post(Channel::NowPlayingItemChanged, &Payload::new());
                }
                1 => {
                    sim.post(Channel::PlaybackStateChanged, &Payload::new());
                }
                2 => {
                    // Headphones plugged in
                    sim.set_route(AudioRoute::new(vec![AudioPort::new(
                        PortType::Headphones,
                        "Wired Headphones",
                    )]));
                    sim.post(
                        Channel::RouteChange,
                        &Payload::new().with_uint(keys::ROUTE_CHANGE_REASON, 1),
                    );
                }
                3 => {
                    // A call comes in
                    sim.post(
                        Channel::Interruption,
                        &Payload::new().with_uint(keys::INTERRUPTION_TYPE, 1),
                    );
                }
                4 => {
                    // Call over, resume
                    sim.post(
                        Channel::Interruption,
                        &Payload::new()
                            .with_uint(keys::INTERRUPTION_TYPE, 0)
                            .with_uint(keys::INTERRUPTION_OPTIONS, 1),
                    );
                }
                _ => {
                    // Headphones unplugged
                    let previous = AudioRoute::new(vec![AudioPort::new(
                        PortType::Headphones,
                        "Wired Headphones",
                    )]);
                    sim.set_route(AudioRoute::new(vec![AudioPort::new(
                        PortType::BuiltInSpeaker,
                        "Speaker",
                    )]));
                    sim.post(
                        Channel::RouteChange,
                        &Payload::new()
                            .with_uint(keys::ROUTE_CHANGE_REASON, 2)
                            .with_route(keys::PREVIOUS_ROUTE, previous),
                    );
                }
            }
            i = i.wrapping_add(1);
        }
    });

    let mut term = ratatui::init();
    term.draw(|f| draw(f, &system))?;

    loop {
        match rx.recv() {
            Ok(Trigger::Key(key)) => {
                match key {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('i') => system.request_info(),
                    _ => continue,
                }
                term.draw(|f| draw(f, &system))?;
            }
            Ok(Trigger::Appended) => {
                term.draw(|f| draw(f, &system))?;
            }
            Err(_) => break,
        }
    }

    running.store(false, Ordering::SeqCst);
    system.close();
    ratatui::restore();
    Ok(())
}

fn draw(f: &mut Frame, system: &AudioInfoSystem) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).split(f.area());

    f.render_widget(
        Paragraph::new("i = Get Info   q = quit")
            .block(Block::bordered().title("Audio Info Demo")),
        chunks[0],
    );

    // Newest entries first; each renders as its three display lines
    let items: Vec<ListItem> = system
        .entries()
        .into_iter()
        .rev()
        .map(|entry| ListItem::new(entry.display_text()).fg(Color::Gray))
        .collect();

    f.render_widget(
        List::new(items).block(Block::bordered().title("Events")),
        chunks[1],
    );
}
