//! Integration tests for the audio-monitor crate.
//!
//! These tests verify end-to-end functionality of the monitor including:
//! - Subscription lifecycle (construct, receive notifications, close)
//! - Entry ordering across mixed notification sequences
//! - Malformed payload handling
//! - Change notification to observers

use std::sync::Arc;
use std::time::Duration;

use audio_monitor::{AudioMonitor, LogEntry};
use audio_session::{
    keys, AudioPort, AudioRoute, Channel, NotificationHub, NowPlayingItem, Payload, PortType,
    SharedNowPlaying, SharedRoute,
};
use log_store::LogStore;
use proptest::prelude::*;

struct System {
    hub: Arc<NotificationHub>,
    now_playing: SharedNowPlaying,
    store: LogStore<LogEntry>,
    monitor: AudioMonitor,
}

fn build_system() -> System {
    let hub = Arc::new(NotificationHub::new());
    let now_playing = SharedNowPlaying::new();
    let routes = SharedRoute::new();
    let store = LogStore::new();

    let monitor = AudioMonitor::new(
        hub.clone(),
        Arc::new(now_playing.clone()),
        Arc::new(routes.clone()),
        store.clone(),
    )
    .expect("monitor construction should succeed on a fresh hub");

    System {
        hub,
        now_playing,
        store,
        monitor,
    }
}

fn headers(store: &LogStore<LogEntry>) -> Vec<String> {
    store
        .snapshot()
        .into_iter()
        .map(|entry| entry.header)
        .collect()
}

/// One simulated host notification and the headers it should produce.
#[derive(Debug, Clone)]
enum Stimulus {
    InterruptionBegan,
    InterruptionEndedResume,
    InterruptionEndedNoOptions,
    InterruptionMalformed,
    NewDevice,
    OldDevice,
    RouteOtherReason,
    RouteMalformed,
    ItemChanged,
    StateChanged,
    GetInfo,
}

impl Stimulus {
    fn apply(&self, system: &System) {
        match self {
            Stimulus::InterruptionBegan => {
                system.hub.post(
                    Channel::Interruption,
                    &Payload::new().with_uint(keys::INTERRUPTION_TYPE, 1),
                );
            }
            Stimulus::InterruptionEndedResume => {
                system.hub.post(
                    Channel::Interruption,
                    &Payload::new()
                        .with_uint(keys::INTERRUPTION_TYPE, 0)
                        .with_uint(keys::INTERRUPTION_OPTIONS, 1),
                );
            }
            Stimulus::InterruptionEndedNoOptions => {
                system.hub.post(
                    Channel::Interruption,
                    &Payload::new().with_uint(keys::INTERRUPTION_TYPE, 0),
                );
            }
            Stimulus::InterruptionMalformed => {
                system.hub.post(Channel::Interruption, &Payload::new());
            }
            Stimulus::NewDevice => {
                system.hub.post(
                    Channel::RouteChange,
                    &Payload::new().with_uint(keys::ROUTE_CHANGE_REASON, 1),
                );
            }
            Stimulus::OldDevice => {
                let previous = AudioRoute::new(vec![AudioPort::new(
                    PortType::Headphones,
                    "Wired Headphones",
                )]);
                system.hub.post(
                    Channel::RouteChange,
                    &Payload::new()
                        .with_uint(keys::ROUTE_CHANGE_REASON, 2)
                        .with_route(keys::PREVIOUS_ROUTE, previous),
                );
            }
            Stimulus::RouteOtherReason => {
                system.hub.post(
                    Channel::RouteChange,
                    &Payload::new().with_uint(keys::ROUTE_CHANGE_REASON, 3),
                );
            }
            Stimulus::RouteMalformed => {
                system.hub.post(
                    Channel::RouteChange,
                    &Payload::new().with_uint(keys::ROUTE_CHANGE_REASON, 42),
                );
            }
            Stimulus::ItemChanged => {
                system.hub.post(Channel::NowPlayingItemChanged, &Payload::new());
            }
            Stimulus::StateChanged => {
                system.hub.post(Channel::PlaybackStateChanged, &Payload::new());
            }
            Stimulus::GetInfo => {
                system.monitor.request_info();
            }
        }
    }

    fn expected_headers(&self) -> Vec<&'static str> {
        match self {
            Stimulus::InterruptionBegan => vec!["An interruption began."],
            Stimulus::InterruptionEndedResume => {
                vec!["An interruption ended.", "Resume playback."]
            }
            Stimulus::InterruptionEndedNoOptions => {
                vec!["An interruption ended.", "Don't resume playback."]
            }
            Stimulus::InterruptionMalformed => vec![],
            Stimulus::NewDevice => vec!["new Device Available"],
            Stimulus::OldDevice => vec!["old Device Unavailable"],
            Stimulus::RouteOtherReason => vec![],
            Stimulus::RouteMalformed => vec![],
            Stimulus::ItemChanged => vec!["Playing Item Did Change."],
            Stimulus::StateChanged => vec!["Playback State Did Change."],
            Stimulus::GetInfo => vec!["User requested info"],
        }
    }
}

fn stimulus_strategy() -> impl Strategy<Value = Stimulus> {
    (0u8..11).prop_map(|i| match i {
        0 => Stimulus::InterruptionBegan,
        1 => Stimulus::InterruptionEndedResume,
        2 => Stimulus::InterruptionEndedNoOptions,
        3 => Stimulus::InterruptionMalformed,
        4 => Stimulus::NewDevice,
        5 => Stimulus::OldDevice,
        6 => Stimulus::RouteOtherReason,
        7 => Stimulus::RouteMalformed,
        8 => Stimulus::ItemChanged,
        9 => Stimulus::StateChanged,
        _ => Stimulus::GetInfo,
    })
}

#[test]
fn test_mixed_session_scenario() {
    let system = build_system();

    // A phone call interrupts playback, the user plugs headphones in and
    // out, the track advances, and the user taps "Get Info".
    Stimulus::InterruptionBegan.apply(&system);
    Stimulus::InterruptionEndedResume.apply(&system);
    Stimulus::NewDevice.apply(&system);
    Stimulus::OldDevice.apply(&system);
    Stimulus::ItemChanged.apply(&system);
    Stimulus::StateChanged.apply(&system);
    Stimulus::GetInfo.apply(&system);

    assert_eq!(
        headers(&system.store),
        vec![
            "App Started",
            "An interruption began.",
            "An interruption ended.",
            "Resume playback.",
            "new Device Available",
            "old Device Unavailable",
            "Playing Item Did Change.",
            "Playback State Did Change.",
            "User requested info",
        ]
    );
}

#[test]
fn test_metadata_snapshot_tracks_player_state() {
    let system = build_system();

    Stimulus::StateChanged.apply(&system);

    system
        .now_playing
        .set(NowPlayingItem::with_metadata("A", "B", "C"));
    Stimulus::ItemChanged.apply(&system);

    system.now_playing.clear();
    Stimulus::StateChanged.apply(&system);

    let summaries: Vec<_> = system
        .store
        .snapshot()
        .into_iter()
        .map(|entry| entry.now_playing_summary)
        .collect();

    assert_eq!(
        summaries,
        vec![None, None, Some("A B C".to_string()), None]
    );
}

#[test]
fn test_observer_receives_one_event_per_append() {
    let system = build_system();
    let iter = system.store.iter();

    // Drain the App Started event
    assert!(iter.recv_timeout(Duration::from_millis(100)).is_some());

    Stimulus::InterruptionEndedNoOptions.apply(&system);

    // Two appends, two events, in order
    let first = iter.recv_timeout(Duration::from_millis(100)).unwrap();
    let second = iter.recv_timeout(Duration::from_millis(100)).unwrap();
    assert_eq!(first.index, 1);
    assert_eq!(second.index, 2);

    assert_eq!(
        system.store.get(second.index).unwrap().header,
        "Don't resume playback."
    );
}

#[test]
fn test_no_entries_after_close() {
    let system = build_system();
    system.monitor.close();

    for stimulus in [
        Stimulus::InterruptionBegan,
        Stimulus::NewDevice,
        Stimulus::ItemChanged,
        Stimulus::StateChanged,
    ] {
        stimulus.apply(&system);
    }

    assert_eq!(headers(&system.store), vec!["App Started"]);
}

#[test]
fn test_display_text_shape() {
    let system = build_system();
    system
        .now_playing
        .set(NowPlayingItem::with_metadata("A", "B", "C"));
    Stimulus::GetInfo.apply(&system);

    let text = system.store.get(1).unwrap().display_text();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "User requested info");
    assert_eq!(lines[2], "A B C");
    // Long-date/medium-time timestamp, e.g. "July 23, 2022 at 2:45:12 PM"
    assert!(lines[0].contains(" at "));
    assert!(lines[0].ends_with("AM") || lines[0].ends_with("PM"));
}

proptest! {
    /// Any sequence of stimuli yields exactly the expected headers, in
    /// delivery order, after the initial "App Started" entry.
    #[test]
    fn prop_entries_match_delivery_order(stimuli in prop::collection::vec(stimulus_strategy(), 0..40)) {
        let system = build_system();

        let mut expected = vec!["App Started".to_string()];
        for stimulus in &stimuli {
            stimulus.apply(&system);
            expected.extend(stimulus.expected_headers().iter().map(|s| s.to_string()));
        }

        prop_assert_eq!(headers(&system.store), expected);
    }
}
