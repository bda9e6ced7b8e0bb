// Wrappers for Env composition.
//
// The gridworld never ends an episode on its own except at the goal, so the
// useful wrappers here are:
// - TimeLimit
// - RecordEpisodeStatistics

use tracing::debug;

use crate::core::{Env, Info, InfoValue, RenderFrame, Result, Step};

/// A wrapper that enforces a maximum number of steps per episode, marking truncation when exceeded.
pub struct TimeLimit<E: Env> {
    inner: E,
    max_steps: u32,
    steps: u32,
}

impl<E: Env> TimeLimit<E> {
    pub fn new(inner: E, max_steps: u32) -> Self {
        Self { inner, max_steps, steps: 0 }
    }

    pub fn elapsed_steps(&self) -> u32 { self.steps }

    pub fn inner(&self) -> &E { &self.inner }
    pub fn inner_mut(&mut self) -> &mut E { &mut self.inner }
    pub fn into_inner(self) -> E { self.inner }
}

impl<E: Env> Env for TimeLimit<E> {
    type Obs = E::Obs;
    type Act = E::Act;

    fn reset(&mut self, seed: Option<u64>) -> (Self::Obs, Info) {
        self.steps = 0;
        self.inner.reset(seed)
    }

    fn step(&mut self, action: Self::Act) -> Result<Step<Self::Obs>> {
        // rejected actions do not count against the limit
        let mut s = self.inner.step(action)?;
        self.steps += 1;
        if !s.terminated && !s.truncated && self.steps >= self.max_steps {
            debug!(max_steps = self.max_steps, "episode truncated");
            s.truncated = true;
        }
        Ok(s)
    }

    fn render(&self) -> Option<RenderFrame> { self.inner.render() }
    fn close(&mut self) { self.inner.close() }
}

/// RecordEpisodeStatistics tracks cumulative return and episode length.
/// On episode end (terminated or truncated), it injects keys into the returned Step's Info:
/// - "episode_return": i64
/// - "episode_length": i64
pub struct RecordEpisodeStatistics<E: Env> {
    inner: E,
    ep_return: i64,
    ep_length: i64,
}

impl<E: Env> RecordEpisodeStatistics<E> {
    pub fn new(inner: E) -> Self { Self { inner, ep_return: 0, ep_length: 0 } }

    pub fn inner(&self) -> &E { &self.inner }
    pub fn into_inner(self) -> E { self.inner }
}

impl<E: Env> Env for RecordEpisodeStatistics<E> {
    type Obs = E::Obs;
    type Act = E::Act;

    fn reset(&mut self, seed: Option<u64>) -> (Self::Obs, Info) {
        self.ep_return = 0;
        self.ep_length = 0;
        self.inner.reset(seed)
    }

    fn step(&mut self, action: Self::Act) -> Result<Step<Self::Obs>> {
        let mut s = self.inner.step(action)?;
        self.ep_return += i64::from(s.reward);
        self.ep_length += 1;
        if s.done() {
            s.info.insert("episode_return", InfoValue::from(self.ep_return));
            s.info.insert("episode_length", InfoValue::from(self.ep_length));
            debug!(episode_return = self.ep_return, episode_length = self.ep_length, "episode finished");
            self.ep_return = 0;
            self.ep_length = 0;
        }
        Ok(s)
    }

    fn render(&self) -> Option<RenderFrame> { self.inner.render() }
    fn close(&mut self) { self.inner.close() }
}
