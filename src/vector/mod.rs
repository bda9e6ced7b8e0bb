// A simple synchronous vector environment running N independent copies of an
// Env in a loop. Each copy owns its own episode; nothing is shared between them.

use crate::core::{Env, EnvError, Info, RenderFrame, Result, Step};

/// Runs N copies of an environment in the current thread.
///
/// - Construct with `SyncVectorEnv::new(n, WindyGridworldEnv::new)`
/// - Step with a batch of actions: `step_all(actions)`
/// - Reset all envs (optionally with a base seed): `reset_all(Some(0))`
pub struct SyncVectorEnv<E: Env> {
    envs: Vec<E>,
}

impl<E: Env> SyncVectorEnv<E> {
    /// Create N copies using the provided factory closure.
    pub fn new<F>(n: usize, factory: F) -> Self
    where
        F: FnMut() -> E,
    {
        Self { envs: std::iter::repeat_with(factory).take(n).collect() }
    }

    pub fn len(&self) -> usize { self.envs.len() }
    pub fn is_empty(&self) -> bool { self.envs.is_empty() }

    /// Reset all environments. If `base_seed` is provided, each env gets base_seed + i.
    pub fn reset_all(&mut self, base_seed: Option<u64>) -> Vec<(E::Obs, Info)> {
        self.envs
            .iter_mut()
            .enumerate()
            .map(|(i, e)| e.reset(base_seed.map(|s| s.wrapping_add(i as u64))))
            .collect()
    }

    /// Reset a single environment, e.g. after its episode ended.
    pub fn reset_at(&mut self, index: usize, seed: Option<u64>) -> Option<(E::Obs, Info)> {
        self.envs.get_mut(index).map(|e| e.reset(seed))
    }

    /// Step all environments with a batch of actions, one per environment.
    /// Stops at the first rejected action; environments before it have already stepped.
    pub fn step_all(&mut self, actions: Vec<E::Act>) -> Result<Vec<Step<E::Obs>>> {
        if actions.len() != self.envs.len() {
            return Err(EnvError::BatchSize { expected: self.envs.len(), got: actions.len() });
        }
        self.envs
            .iter_mut()
            .zip(actions)
            .map(|(e, a)| e.step(a))
            .collect()
    }

    /// Render all environments; returns a vector of optional frames (one per env).
    pub fn render_all(&self) -> Vec<Option<RenderFrame>> {
        self.envs.iter().map(|e| e.render()).collect()
    }

    pub fn close_all(&mut self) {
        for e in &mut self.envs { e.close(); }
    }

    pub fn envs(&self) -> &[E] { &self.envs }
    pub fn envs_mut(&mut self) -> &mut [E] { &mut self.envs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envs::{Cell, WindyGridworldEnv};

    #[test]
    fn vector_env_runs_batch() {
        let mut v = SyncVectorEnv::new(3, WindyGridworldEnv::new);
        let obs = v.reset_all(Some(123));
        assert!(obs.iter().all(|(o, _)| *o == Cell::new(3, 0)));
        let steps = v.step_all(vec![0, 1, 2]).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].observation, Cell::new(2, 0));
        assert_eq!(steps[1].observation, Cell::new(3, 1));
        assert_eq!(steps[2].observation, Cell::new(4, 0));
        let frames = v.render_all();
        assert_eq!(frames.len(), 3);
        assert!(matches!(frames[0], Some(RenderFrame::Text(_))));
        v.close_all();
    }

    #[test]
    fn batch_size_is_checked() {
        let mut v = SyncVectorEnv::new(2, WindyGridworldEnv::new);
        v.reset_all(None);
        assert_eq!(v.step_all(vec![1]), Err(EnvError::BatchSize { expected: 2, got: 1 }));
        assert!(v.envs().iter().all(|e| e.state() == Some(Cell::new(3, 0))));
    }

    #[test]
    fn episodes_are_independent() {
        let mut v = SyncVectorEnv::new(2, WindyGridworldEnv::new);
        v.reset_all(None);
        v.step_all(vec![1, 3]).unwrap();
        assert_eq!(v.envs()[0].state(), Some(Cell::new(3, 1)));
        assert_eq!(v.envs()[1].state(), Some(Cell::new(3, 0)));
        v.reset_at(0, None);
        assert_eq!(v.envs()[0].state(), Some(Cell::new(3, 0)));
        assert!(v.reset_at(5, None).is_none());
    }
}
