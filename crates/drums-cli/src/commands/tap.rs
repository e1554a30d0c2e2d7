//! Interactive metronome mode.
//!
//! Every beat carries a standard note. A key press is scored against the
//! nearest beat; presses outside the hit window, or on a beat that was
//! already hit, count as empty hits.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::terminal;
use drums_core::{Note, RecordStore, Session};
use tracing::{debug, info};

use super::{finish_session, open_session};
use crate::display;
use crate::input::{TapAction, poll_action};
use crate::shutdown::ShutdownSignal;

/// Run the interactive tap mode
pub fn run(store: &Path, rules: Option<&Path>, bpm: u32, name: Option<&str>) -> Result<()> {
    let mut session = open_session(store, rules, bpm, name)?;

    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping...");
        shutdown_ctrlc.trigger();
    })?;

    println!(
        "Hit Space, F or J on the beat. {} empty hits end the game. Esc or q to stop.",
        session.rules().miss_threshold
    );

    terminal::enable_raw_mode()?;
    let result = tap_loop(&mut session, &shutdown);
    terminal::disable_raw_mode()?;
    result?;

    finish_session(&mut session)
}

fn tap_loop<S: RecordStore>(session: &mut Session<S>, shutdown: &ShutdownSignal) -> Result<()> {
    let mut clock = BeatClock::new(Instant::now(), session.tempo());
    redraw(session, false)?;

    while !shutdown.is_shutdown() && !session.is_over() {
        let now = Instant::now();
        if clock.advance(now, session.tempo()) {
            redraw(session, true)?;
        }

        let timeout = clock.until_next(now).min(Duration::from_millis(20));
        let Some(action) = poll_action(timeout)? else {
            continue;
        };

        match action {
            TapAction::Quit => shutdown.trigger(),
            TapAction::Hit => {
                let (beat, delay_ms) = clock.nearest(Instant::now());
                if session.rules().is_hittable(delay_ms) && clock.claim(beat) {
                    let result = session.record_hit(Note::Standard, delay_ms)?;
                    debug!("Beat {} hit {:.1}ms off: {:?}", beat, delay_ms, result);
                } else {
                    debug!("Beat {} missed ({:.1}ms off)", beat, delay_ms);
                    let _ = session.record_miss()?;
                }
                redraw(session, false)?;
            }
        }
    }

    print!("\r\n");
    io::stdout().flush()?;
    Ok(())
}

fn redraw<S: RecordStore>(session: &Session<S>, beat: bool) -> io::Result<()> {
    let marker = if beat { "*" } else { " " };
    let mut stdout = io::stdout();
    write!(stdout, "\r{} {}", marker, display::status_line(session))?;
    stdout.flush()
}

/// Beat grid that follows the session tempo
#[derive(Debug, Clone)]
struct BeatClock {
    period: Duration,
    /// Time of the most recent beat
    last: Instant,
    index: u64,
    last_claimed: Option<u64>,
}

impl BeatClock {
    fn new(start: Instant, bpm: u32) -> Self {
        Self {
            period: Self::period_for(bpm),
            last: start,
            index: 0,
            last_claimed: None,
        }
    }

    fn period_for(bpm: u32) -> Duration {
        Duration::from_secs_f64(60.0 / f64::from(bpm.max(1)))
    }

    /// Move past every beat up to `now`. Returns true if a beat passed.
    fn advance(&mut self, now: Instant, bpm: u32) -> bool {
        self.period = Self::period_for(bpm);
        let mut passed = false;
        while now >= self.last + self.period {
            self.last += self.period;
            self.index += 1;
            passed = true;
        }
        passed
    }

    fn until_next(&self, now: Instant) -> Duration {
        (self.last + self.period).saturating_duration_since(now)
    }

    /// Nearest beat to `now` and the signed offset from it in ms.
    /// Early presses get a negative offset.
    fn nearest(&self, now: Instant) -> (u64, f64) {
        let since = now.saturating_duration_since(self.last);
        let until = self.until_next(now);
        if since <= until {
            (self.index, since.as_secs_f64() * 1000.0)
        } else {
            (self.index + 1, -until.as_secs_f64() * 1000.0)
        }
    }

    /// Mark a beat as hit. Each beat can be hit once.
    fn claim(&mut self, beat: u64) -> bool {
        if self.last_claimed.is_some_and(|claimed| beat <= claimed) {
            return false;
        }
        self.last_claimed = Some(beat);
        true
    }
}
