//! Detail panel lifecycle as an explicit timed state machine.
//!
//! Two flags (`active` section and `open`) plus a background `intensity`
//! scalar. Delayed effects are queued as [`Pending`] transitions with a due
//! time on a caller-supplied clock; the front-end arms one deferred callback
//! for [`PanelController::next_deadline`] and calls
//! [`PanelController::advance`] when it fires. Every queued transition can be
//! cancelled independently.

use crate::config::PanelTiming;
use crate::constants::SECTION_COUNT;
use crate::error::CercaError;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    /// Section chosen, panel still waiting to slide in.
    Selecting(usize),
    Open(usize),
    /// Panel sliding out, content still mounted.
    Closing(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    OpenPanel,
    RaiseIntensity,
    ClearSection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    pub transition: Transition,
    pub due: Duration,
}

pub struct PanelController {
    timing: PanelTiming,
    active: Option<usize>,
    open: bool,
    intensity: f32,
    pending: SmallVec<[Pending; 4]>,
    disposed: bool,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(PanelTiming::default())
    }
}

impl PanelController {
    pub fn new(timing: PanelTiming) -> Self {
        Self {
            timing,
            active: None,
            open: false,
            intensity: 0.0,
            pending: SmallVec::new(),
            disposed: false,
        }
    }

    pub fn active_section(&self) -> Option<usize> {
        self.active
    }

    pub fn panel_open(&self) -> bool {
        self.open
    }

    /// Background intensity in \[0, 1\].
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn pending(&self) -> &[Pending] {
        &self.pending
    }

    pub fn is_pending(&self, transition: Transition) -> bool {
        self.pending.iter().any(|p| p.transition == transition)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn state(&self) -> PanelState {
        match (self.active, self.open) {
            (None, _) => PanelState::Idle,
            (Some(i), true) => PanelState::Open(i),
            (Some(i), false) if self.is_pending(Transition::ClearSection) => PanelState::Closing(i),
            (Some(i), false) => PanelState::Selecting(i),
        }
    }

    /// Earliest due time among queued transitions.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Select section `index` at time `now`.
    ///
    /// The section switches immediately. If the panel is already open the
    /// content swaps in place; otherwise opening is (re)scheduled after the
    /// open delay. Intensity rises after its own delay when coming from Idle.
    pub fn select(&mut self, index: usize, now: Duration) -> Result<(), CercaError> {
        if index >= SECTION_COUNT {
            return Err(CercaError::UnknownSection(index));
        }
        if self.disposed {
            return Ok(());
        }
        let was_active = self.active;
        self.cancel(Transition::ClearSection);
        self.active = Some(index);

        if !self.open {
            self.cancel(Transition::OpenPanel);
            self.schedule(Transition::OpenPanel, now + self.timing.open_delay);
        }
        if was_active.is_none() {
            self.cancel(Transition::RaiseIntensity);
            self.schedule(Transition::RaiseIntensity, now + self.timing.intensity_delay);
        }
        log::debug!("[panel] select {} -> {:?}", index, self.state());
        Ok(())
    }

    /// Hide the panel now; unmount the section after the close delay.
    pub fn close(&mut self, now: Duration) {
        if self.disposed || self.active.is_none() {
            return;
        }
        self.open = false;
        self.cancel(Transition::OpenPanel);
        self.cancel(Transition::ClearSection);
        self.schedule(Transition::ClearSection, now + self.timing.close_delay);
        log::debug!("[panel] close -> {:?}", self.state());
    }

    /// Apply every transition due at or before `now`, in due order.
    pub fn advance(&mut self, now: Duration) -> SmallVec<[Transition; 4]> {
        let mut fired = SmallVec::new();
        if self.disposed {
            return fired;
        }
        loop {
            let next = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due <= now)
                .min_by_key(|(_, p)| p.due)
                .map(|(i, _)| i);
            let Some(i) = next else { break };
            let p = self.pending.remove(i);
            self.apply(p.transition);
            fired.push(p.transition);
        }
        fired
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::OpenPanel => {
                if self.active.is_some() {
                    self.open = true;
                }
            }
            Transition::RaiseIntensity => {
                if self.active.is_some() {
                    self.intensity = 1.0;
                }
            }
            Transition::ClearSection => {
                self.active = None;
                self.intensity = 0.0;
                self.cancel(Transition::RaiseIntensity);
            }
        }
        log::debug!("[panel] {:?} -> {:?}", transition, self.state());
    }

    /// Drop every queued transition; later calls become no-ops.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending.clear();
    }

    pub fn cancel(&mut self, transition: Transition) {
        self.pending.retain(|p| p.transition != transition);
    }

    fn schedule(&mut self, transition: Transition, due: Duration) {
        self.pending.push(Pending { transition, due });
    }
}
