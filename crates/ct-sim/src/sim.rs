//! The `Sim` struct and its resumption loop.

use log::{debug, info, trace};

use ct_agent::{AgentRngs, City};
use ct_behavior::{Activity, BehaviorConfig, BehaviorModel, Decision, DecisionContext};
use ct_contagion::ContagionEngine;
use ct_core::{AgentId, Event, EventPayload, LocationId, LocationKind, SimClock, SimConfig, Tick};
use ct_mobility::MobilitySelector;
use ct_schedule::WakeQueue;
use ct_world::Admission;

use crate::{Leg, Process, SimObserver, SimResult, Stay};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// ```text
/// loop:
///   (tick, agent) = wake_queue.pop_next()      stop if empty or tick ≥ end
///   clock.advance_to(tick)
///   resume agent:
///     Ready              → decide, then act on the decision
///     Waiting{loc, stay} → slot was handed over: enter loc, start the stay
///     Staying{loc, stay} → stay is over: leave loc, continue the routine
/// ```
///
/// Every path ends in a suspension: a timed stay (pushed at its end tick), a
/// wait on a full location (pushed later by the release that frees a slot),
/// or removal.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    pub config: SimConfig,

    pub behavior_config: BehaviorConfig,

    /// Simulation clock; jumps to the tick of each resumption.
    pub clock: SimClock,

    /// Locations and agents.
    pub city: City,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Pending resumptions.
    pub wake_queue: WakeQueue,

    /// Per-agent process state, indexed by `AgentId`.
    pub process: Vec<Process>,

    pub behavior: B,

    pub contagion: ContagionEngine,

    /// Number of resumptions processed so far.
    pub resumptions: u64,

    /// Events logged during the current resumption, flushed to the observer.
    emitted: Vec<Event>,
}

impl<B: BehaviorModel> Sim<B> {
    pub(crate) fn new(
        config:          SimConfig,
        behavior_config: BehaviorConfig,
        city:            City,
        rngs:            AgentRngs,
        behavior:        B,
        contagion:       ContagionEngine,
    ) -> Self {
        let count = city.agents.count;
        let mut wake_queue = WakeQueue::new();
        for agent in city.agents.agent_ids() {
            wake_queue.push(Tick::ZERO, agent);
        }
        Self {
            clock: config.make_clock(),
            config,
            behavior_config,
            city,
            rngs,
            wake_queue,
            process: vec![Process::Ready; count],
            behavior,
            contagion,
            resumptions: 0,
            emitted: Vec::new(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until no resumption is pending before `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "starting run: {} agents, {} locations, {} ticks of {} min, seed {}",
            self.city.agents.count,
            self.city.locations.len(),
            self.config.total_ticks,
            self.config.tick_minutes,
            self.config.seed,
        );
        while self.step(observer)? {}
        observer.on_sim_end(self.clock.current_tick, &self.city);

        let blocked = self.process.iter().filter(|p| p.is_waiting()).count();
        let removed = self.process.iter().filter(|p| p.is_removed()).count();
        info!(
            "run finished at {}: {} resumptions, {} events, {} infected, {} removed, {} still waiting",
            self.clock,
            self.resumptions,
            self.city.agents.event_count(),
            self.city.agents.infected_count(),
            removed,
            blocked,
        );
        Ok(())
    }

    /// Process one resumption.  Returns `false` once the run is over.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        match self.wake_queue.next_tick() {
            Some(t) if t < self.config.end_tick() => {}
            _ => return Ok(false),
        }
        let Some((tick, agent)) = self.wake_queue.pop_next() else {
            return Ok(false);
        };
        self.clock.advance_to(tick);
        self.resumptions += 1;

        self.resume(agent)?;

        for event in self.emitted.drain(..) {
            observer.on_event(&event);
        }
        observer.on_resume(tick, agent, &self.city);
        Ok(true)
    }

    /// Current process state of `agent`.
    #[inline]
    pub fn process_of(&self, agent: AgentId) -> Process {
        self.process[agent.index()]
    }

    /// Every agent's events, concatenated in agent order.
    pub fn events(&self) -> Vec<Event> {
        self.city.events()
    }

    // ── Process state machine ─────────────────────────────────────────────

    fn resume(&mut self, agent: AgentId) -> SimResult<()> {
        trace!("{} resume {agent} ({:?})", self.clock.current_tick, self.process[agent.index()]);
        match self.process[agent.index()] {
            Process::Ready                        => self.decide(agent),
            Process::Waiting { location, stay }   => {
                self.enter(agent, location, stay);
                Ok(())
            }
            Process::Staying { location, stay }   => self.finish_stay(agent, location, stay),
            Process::Removed                      => Ok(()),
        }
    }

    /// Ask the behavior model what to do next and start doing it.
    fn decide(&mut self, agent: AgentId) -> SimResult<()> {
        let now = self.clock.current_tick;
        let decision = {
            let ctx = DecisionContext::new(now, &self.clock, &self.city.agents, &self.behavior_config);
            self.behavior.decide(agent, &ctx, self.rngs.get_mut(agent))
        };
        trace!("{now} {agent} decides {decision:?}");

        match decision {
            Decision::Test { positive } => {
                self.log(agent, EventPayload::Test { positive });
                self.city.agents.activity[agent.index()] = Activity::TestedAndRemoved;
                self.process[agent.index()] = Process::Removed;
                debug!("{now} {agent} tested ({}) and removed", if positive { "positive" } else { "negative" });
                Ok(())
            }
            Decision::Work { minutes } => {
                let work = self.city.agents.work[agent.index()];
                let stay = Stay::new(Leg::Work, self.clock.ticks_for_minutes(minutes));
                self.go(agent, work, stay);
                Ok(())
            }
            Decision::Shop { minutes } => self.visit(agent, LocationKind::Store, Leg::Shop, minutes),
            Decision::Exercise { minutes } => self.visit(agent, LocationKind::Park, Leg::Exercise, minutes),
            Decision::Trip => self.trip_stop(agent, 0),
            Decision::SymptomOnset => {
                self.log(agent, EventPayload::SymptomStart { covid: true });
                self.city.agents.symptoms_logged[agent.index()] = true;
                debug!("{now} {agent} shows symptoms");
                self.go_home(agent);
                Ok(())
            }
            Decision::StayHome => {
                self.go_home(agent);
                Ok(())
            }
        }
    }

    /// The current stay is over: leave and continue the routine.
    fn finish_stay(&mut self, agent: AgentId, location: LocationId, stay: Stay) -> SimResult<()> {
        self.depart(agent, location);
        match stay.leg {
            Leg::Home => {
                self.process[agent.index()] = Process::Ready;
                self.decide(agent)
            }
            Leg::Work | Leg::Shop | Leg::Exercise => {
                self.go_home(agent);
                Ok(())
            }
            Leg::TripStop { stops } => self.trip_stop(agent, stops),
        }
    }

    // ── Outings ───────────────────────────────────────────────────────────

    /// Pick a `kind` destination and go there for `minutes`.  Without a
    /// destination the agent stays home.
    fn visit(&mut self, agent: AgentId, kind: LocationKind, leg: Leg, minutes: u64) -> SimResult<()> {
        match self.select(agent, kind)? {
            Some(dest) => {
                let stay = Stay::new(leg, self.clock.ticks_for_minutes(minutes));
                self.go(agent, dest, stay);
            }
            None => self.go_home(agent),
        }
        Ok(())
    }

    /// Decide whether a trip with `stops_taken` stops so far goes on, and
    /// either head to the next misc stop or return home.
    fn trip_stop(&mut self, agent: AgentId, stops_taken: usize) -> SimResult<()> {
        let i = agent.index();
        let params = self.city.agents.mobility[i];
        if !params.continue_trip(stops_taken, self.rngs.get_mut(agent)) {
            trace!("{agent} ends trip after {stops_taken} stops");
            self.go_home(agent);
            return Ok(());
        }
        match self.select(agent, LocationKind::Misc)? {
            Some(dest) => {
                let minutes = self.city.agents.habits[i].misc.sample(self.rngs.get_mut(agent)) as u64;
                let stay = Stay::new(
                    Leg::TripStop { stops: stops_taken + 1 },
                    self.clock.ticks_for_minutes(minutes),
                );
                self.go(agent, dest, stay);
            }
            None => self.go_home(agent),
        }
        Ok(())
    }

    /// Run the destination selector.  `Ok(None)` when nothing is available.
    fn select(&mut self, agent: AgentId, kind: LocationKind) -> SimResult<Option<LocationId>> {
        let i = agent.index();
        let agents = &mut self.city.agents;
        let result = MobilitySelector::new(&self.city.locations).select(
            kind,
            agents.location[i],
            agents.mobility[i],
            &agents.prefs[i],
            &mut agents.visits[i],
            self.rngs.get_mut(agent),
        );
        match result {
            Ok(sel) => Ok(Some(sel.location)),
            Err(e) if e.is_recoverable() => {
                debug!("{} {agent}: {e}, staying home", self.clock.current_tick);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    // ── Location transitions ──────────────────────────────────────────────

    fn go_home(&mut self, agent: AgentId) {
        let home = self.city.agents.home[agent.index()];
        let stay = Stay::new(Leg::Home, self.clock.ticks_for_minutes(self.behavior_config.home_stay_minutes));
        self.go(agent, home, stay);
    }

    /// Request a slot at `dest`: enter now, or wait in its queue.
    fn go(&mut self, agent: AgentId, dest: LocationId, stay: Stay) {
        match self.city.locations.get_mut(dest).request(agent) {
            Admission::Admitted => self.enter(agent, dest, stay),
            Admission::Queued => {
                trace!("{} {agent} waits for {dest}", self.clock.current_tick);
                self.process[agent.index()] = Process::Waiting { location: dest, stay };
            }
        }
    }

    /// `agent` holds a slot at `dest`: step inside, start the stay and
    /// evaluate contacts.
    fn enter(&mut self, agent: AgentId, dest: LocationId, stay: Stay) {
        let i = agent.index();
        let now = self.clock.current_tick;
        let until = now + stay.ticks;

        self.city.locations.get_mut(dest).enter(agent);
        let agents = &mut self.city.agents;
        agents.location[i] = dest;
        agents.stay_start[i] = now;
        agents.stay_until[i] = until;
        agents.activity[i] = stay.leg.activity();
        self.process[i] = Process::Staying { location: dest, stay };
        self.wake_queue.push(until, agent);

        let logged = self.contagion.on_enter(agent, dest, &self.clock, &mut self.city, self.rngs.get_mut(agent));
        self.emitted.extend(logged);
    }

    /// Leave `location` and hand the freed slot to its longest waiter, which
    /// resumes at the current tick.
    fn depart(&mut self, agent: AgentId, location: LocationId) {
        let loc = self.city.locations.get_mut(location);
        loc.leave(agent);
        if let Some(next) = loc.release(agent) {
            trace!("{} {location} hands slot from {agent} to {next}", self.clock.current_tick);
            self.wake_queue.push(self.clock.current_tick, next);
        }
    }

    fn log(&mut self, agent: AgentId, payload: EventPayload) {
        let event = Event::new(agent, self.clock.current_tick, self.clock.current_unix_secs(), payload);
        self.city.agents.log(event.clone());
        self.emitted.push(event);
    }
}
