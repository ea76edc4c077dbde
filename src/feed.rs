//! Simulated weather station feed.
//!
//! The station pushes one entry per interval into a keyed [`FeedStore`] and
//! publishes the entry with the greatest key (the last pushed item) over an
//! `mpsc` channel. The frame loop drains the channel without blocking.
//!
//! Generated values follow slow sine waves like a real sensor. To exercise the
//! absence handling some fields are dropped now and then, and every fifth entry
//! uses the older schema (numeric `temperature` and `wind`).
//!
//! ```ignore
//! let rx = spawn_station(FEED_INTERVAL);
//! while let Ok(snapshot) = rx.try_recv() { /* newest wins */ }
//! ```

use core::fmt::Write;
use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use heapless::String;
use weather_common::temperature::{STATUS_HEAVY, STATUS_MODERATE};
use weather_common::units::celsius_to_fahrenheit;
use weather_common::{Reading, WeatherSnapshot};

use crate::config::{FEED_CONNECT_DELAY, FEED_HISTORY};

// =============================================================================
// Rain Classification
// =============================================================================

/// Rain sensor voltage below which rain is heavy (wet sensor conducts).
pub const RAIN_HEAVY_VOLTS: f32 = 1.2;

/// Rain sensor voltage below which rain is moderate.
pub const RAIN_MODERATE_VOLTS: f32 = 2.2;

/// Rain sensor voltage below which rain is light.
pub const RAIN_LIGHT_VOLTS: f32 = 2.8;

const _: () = assert!(RAIN_HEAVY_VOLTS < RAIN_MODERATE_VOLTS);
const _: () = assert!(RAIN_MODERATE_VOLTS < RAIN_LIGHT_VOLTS);

/// Rain status reported for a sensor voltage.
pub fn rain_status(volts: f32) -> &'static str {
    if volts < RAIN_HEAVY_VOLTS {
        STATUS_HEAVY
    } else if volts < RAIN_MODERATE_VOLTS {
        STATUS_MODERATE
    } else if volts < RAIN_LIGHT_VOLTS {
        "light"
    } else {
        "none"
    }
}

// =============================================================================
// Feed Store
// =============================================================================

/// Keyed feed entries. Keys increase monotonically with every push.
pub struct FeedStore {
    entries: BTreeMap<u64, WeatherSnapshot>,
    next_key: u64,
    capacity: usize,
}

impl FeedStore {
    /// Empty store keeping at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            next_key: 0,
            capacity: capacity.max(1),
        }
    }

    /// Push an entry under the next key, evicting the oldest when full.
    pub fn push(
        &mut self,
        snapshot: WeatherSnapshot,
    ) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.insert(key, snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_first();
        }
        key
    }

    /// The last pushed entry.
    pub fn latest(&self) -> Option<(u64, &WeatherSnapshot)> {
        self.entries.last_key_value().map(|(k, v)| (*k, v))
    }
}

// =============================================================================
// Simulated Station
// =============================================================================

/// Generate a sinusoidal signal oscillating between `min` and `max`.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Preformatted decimal string, as the station firmware sends it.
fn preformatted(value: f32) -> Reading {
    let mut s: String<16> = String::new();
    let _ = write!(s, "{value:.1}");
    Reading::parse(&s)
}

/// Deterministic snapshot generator.
pub struct SimulatedStation {
    tick: u64,
    start_epoch: u64,
    interval_secs: u64,
}

impl SimulatedStation {
    /// Station whose first snapshot is stamped `start_epoch`.
    pub fn new(
        start_epoch: u64,
        interval: Duration,
    ) -> Self {
        Self {
            tick: 0,
            start_epoch,
            interval_secs: interval.as_secs().max(1),
        }
    }

    /// Produce the next snapshot.
    pub fn next_snapshot(&mut self) -> WeatherSnapshot {
        let tick = self.tick;
        self.tick += 1;
        let t = tick as f32;

        let celsius = fake_signal(t, 12.0, 31.0, 0.05);
        let humidity = fake_signal(t, 35.0, 95.0, 0.07);
        let wind_kmh = fake_signal(t, 0.0, 45.0, 0.11);
        let volts = fake_signal(t, 0.6, 3.3, 0.09);

        let mut snap = WeatherSnapshot {
            humidity: preformatted(humidity),
            pressure: preformatted(fake_signal(t, 995.0, 1030.0, 0.03)),
            rain_voltage: Reading::from(f64::from(volts)),
            heat_index: preformatted(celsius + humidity * 0.04),
            altitude: preformatted(fake_signal(t, 118.0, 124.0, 0.02)),
            timestamp: Some(self.start_epoch + tick * self.interval_secs),
            ..Default::default()
        };
        snap.set_rain(rain_status(volts));

        if tick % 5 == 4 {
            snap.temperature = Reading::from(f64::from(celsius));
            snap.wind = Reading::from(f64::from(wind_kmh));
        } else {
            snap.temperature_celsius = preformatted(celsius);
            snap.temperature_fahrenheit = preformatted(celsius_to_fahrenheit(f64::from(celsius)) as f32);
            snap.wind_kmh = preformatted(wind_kmh);
        }

        if tick % 7 == 6 {
            snap.heat_index = Reading::Unavailable;
        }
        if tick % 11 == 10 {
            snap.altitude = Reading::text("--");
        }

        snap
    }
}

// =============================================================================
// Station Thread
// =============================================================================

/// Seconds since the Unix epoch, or 0 if the clock is before it.
fn now_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Run the station loop until the receiver is dropped.
fn run_station(
    tx: &Sender<WeatherSnapshot>,
    interval: Duration,
) {
    thread::sleep(FEED_CONNECT_DELAY);

    let mut station = SimulatedStation::new(now_epoch(), interval);
    let mut store = FeedStore::new(FEED_HISTORY);

    loop {
        store.push(station.next_snapshot());
        let Some((_, latest)) = store.latest() else {
            continue;
        };
        if tx.send(latest.clone()).is_err() {
            return;
        }
        thread::sleep(interval);
    }
}

/// Start the simulated station on its own thread.
pub fn spawn_station(interval: Duration) -> Receiver<WeatherSnapshot> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || run_station(&tx, interval));
    rx
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use weather_common::Field;

    use super::*;

    #[test]
    fn test_store_latest_is_last_pushed() {
        let mut store = FeedStore::new(8);
        assert!(store.latest().is_none());

        for humidity in [40.0, 50.0, 60.0] {
            store.push(WeatherSnapshot {
                humidity: Reading::Number(humidity),
                ..Default::default()
            });
        }

        let (key, latest) = store.latest().unwrap();
        assert_eq!(key, 2);
        assert_eq!(latest.humidity, Reading::Number(60.0));
    }

    #[test]
    fn test_store_evicts_oldest() {
        let mut store = FeedStore::new(2);
        for _ in 0..5 {
            store.push(WeatherSnapshot::default());
        }
        assert_eq!(store.entries.len(), 2);
        assert_eq!(store.latest().map(|(k, _)| k), Some(4), "keys keep increasing after eviction");
    }

    #[test]
    fn test_store_zero_capacity_keeps_one() {
        let mut store = FeedStore::new(0);
        store.push(WeatherSnapshot::default());
        assert_eq!(store.entries.len(), 1);
    }

    #[test]
    fn test_rain_status_partitions() {
        assert_eq!(rain_status(0.5), "heavy");
        assert_eq!(rain_status(1.5), "moderate");
        assert_eq!(rain_status(2.5), "light");
        assert_eq!(rain_status(3.3), "none");
    }

    #[test]
    fn test_station_timestamps_advance() {
        let mut station = SimulatedStation::new(1_000, Duration::from_secs(2));
        assert_eq!(station.next_snapshot().timestamp, Some(1_000));
        assert_eq!(station.next_snapshot().timestamp, Some(1_002));
        assert_eq!(station.tick, 2);
    }

    #[test]
    fn test_station_current_schema_has_strings() {
        let mut station = SimulatedStation::new(0, Duration::from_secs(1));
        let snap = station.next_snapshot();
        assert!(snap.temperature_celsius.as_number().is_some());
        assert!(snap.temperature_fahrenheit.as_number().is_some());
        assert!(snap.temperature.is_unavailable());
        assert!(snap.rain.is_some());
        assert!(snap.wind.is_unavailable());
        assert_eq!(snap.field(Field::Wind), &snap.wind_kmh, "wind cell reads the km/h field");
    }

    #[test]
    fn test_station_older_schema_every_fifth() {
        let mut station = SimulatedStation::new(0, Duration::from_secs(1));
        let snaps: Vec<WeatherSnapshot> = (0..5).map(|_| station.next_snapshot()).collect();
        let older = &snaps[4];
        assert!(older.temperature_celsius.is_unavailable());
        assert!(older.temperature.as_number().is_some());
        assert!(older.field(Field::Wind).as_number().is_some(), "older wind field still feeds the cell");
        assert!(older.temperature_input().celsius.as_number().is_some());
    }

    #[test]
    fn test_station_drops_fields() {
        let mut station = SimulatedStation::new(0, Duration::from_secs(1));
        let snaps: Vec<WeatherSnapshot> = (0..11).map(|_| station.next_snapshot()).collect();
        assert!(snaps[6].heat_index.is_unavailable());
        assert_eq!(snaps[10].altitude.as_text(), Some("--"));
    }

    #[test]
    fn test_station_values_in_range() {
        let mut station = SimulatedStation::new(0, Duration::from_secs(1));
        for _ in 0..100 {
            let snap = station.next_snapshot();
            let humidity = snap.humidity.as_number().unwrap();
            assert!((35.0..=95.0).contains(&humidity), "humidity {humidity} out of range");
            let volts = snap.rain_voltage.as_number().unwrap();
            assert!((0.59..=3.31).contains(&volts), "voltage {volts} out of range");
        }
    }

    #[test]
    fn test_spawned_station_delivers() {
        let rx = spawn_station(Duration::from_millis(10));
        let snap = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(snap.timestamp.is_some());
    }
}
