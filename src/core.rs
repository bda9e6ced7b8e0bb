// Core traits and types shared by the environment, wrappers and vector envs.

/// A minimal info map (without pulling serde as a dependency).
/// It stores small numbers of key-value pairs attached to resets and steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Info {
    entries: Vec<(String, InfoValue)>,
}

impl Info {
    /// Create an empty Info map.
    pub fn new() -> Self { Self { entries: Vec::new() } }

    /// Insert or replace a key with the given value.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: InfoValue) {
        let k = key.into();
        if let Some((_, v)) = self.entries.iter_mut().find(|(kk, _)| kk == &k) {
            *v = value;
        } else {
            self.entries.push((k, value));
        }
    }

    /// Get a reference to a value by key.
    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InfoValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn len(&self) -> usize { self.entries.len() }
}

/// A small set of value types used in info maps.
#[derive(Clone, Debug, PartialEq)]
pub enum InfoValue {
    Bool(bool),
    I64(i64),
    Str(String),
}

impl From<bool> for InfoValue { fn from(v: bool) -> Self { InfoValue::Bool(v) } }
impl From<i64> for InfoValue { fn from(v: i64) -> Self { InfoValue::I64(v) } }
impl From<i32> for InfoValue { fn from(v: i32) -> Self { InfoValue::I64(v as i64) } }
impl From<&str> for InfoValue { fn from(v: &str) -> Self { InfoValue::Str(v.to_string()) } }
impl From<String> for InfoValue { fn from(v: String) -> Self { InfoValue::Str(v) } }

/// A frame returned by `Env::render`.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderFrame {
    /// Textual representation of a frame (ASCII grid).
    Text(String),
    /// Raw pixel buffer in row-major RGBA format.
    Pixels {
        width: u32,
        height: u32,
        /// Pixel data, 4 bytes per pixel.
        data: Vec<u8>,
    },
}

/// A step result from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<Obs> {
    pub observation: Obs,
    pub reward: i32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

impl<Obs> Step<Obs> {
    pub fn new(observation: Obs, reward: i32, terminated: bool, truncated: bool, info: Info) -> Self {
        Self { observation, reward, terminated, truncated, info }
    }

    /// Whether the episode ended on this step, either way.
    pub fn done(&self) -> bool { self.terminated || self.truncated }
}

/// Caller-facing errors. All of them are usage errors; the simulation itself has
/// no transient failure mode.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Invalid action: {0} (expected an index in 0..=3)")]
    InvalidAction(i64),
    #[error("Environment not initialized: call reset() before step()")]
    NotInitialized,
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Batch size mismatch: expected {expected} actions, got {got}")]
    BatchSize { expected: usize, got: usize },
}

/// Convenience alias for results using EnvError.
pub type Result<T> = std::result::Result<T, EnvError>;

/// Core environment trait following the Gymnasium contract.
pub trait Env {
    type Obs;
    type Act;

    /// Reset the environment to an initial state.
    /// Deterministic environments are free to ignore `seed`.
    fn reset(&mut self, seed: Option<u64>) -> (Self::Obs, Info);

    /// Apply an action and advance the environment by one step.
    fn step(&mut self, action: Self::Act) -> Result<Step<Self::Obs>>;

    /// Render a frame of the current state, if supported.
    fn render(&self) -> Option<RenderFrame> { None }

    /// Close and release any external resources.
    fn close(&mut self) {}
}
