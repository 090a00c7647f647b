//! Core plugin trait definitions.
//!
//! This module defines the two-phase plugin lifecycle:
//!
//! - **[`Plugin`]** (unprepared state): created at instantiation from the
//!   host's features. Holds the parameter registers and the mapped
//!   vocabulary, but no sample-rate-dependent state.
//!
//! - **[`AudioProcessor`]** (prepared state): created by [`Plugin::prepare()`]
//!   once the sample rate is known. Can go back to the unprepared state via
//!   [`AudioProcessor::unprepare()`] when the rate changes; parameter targets
//!   survive the round trip, smoothing state does not.
//!
//! A processor cannot exist without a real sample rate, so the smoother never
//! runs on a placeholder time constant.

use crate::atom::ControlEvent;
use crate::config::PluginConfig;
use crate::error::{InstantiateError, InstantiateResult};
use crate::logger::{LogSink, Logger};
use crate::uris::{PropertyUris, UridMap};

// =============================================================================
// Host Features
// =============================================================================

/// Capabilities the host offers at instantiation.
///
/// The URID map is required; the log sink is optional and the plugin falls
/// back to the `log` facade without it.
#[derive(Default)]
pub struct HostFeatures<'h> {
    pub urid_map: Option<&'h dyn UridMap>,
    pub log: Option<Box<dyn LogSink>>,
}

impl<'h> HostFeatures<'h> {
    /// No features at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a URID map.
    pub fn with_urid_map(mut self, map: &'h dyn UridMap) -> Self {
        self.urid_map = Some(map);
        self
    }

    /// Offer a log sink.
    pub fn with_log(mut self, sink: Box<dyn LogSink>) -> Self {
        self.log = Some(sink);
        self
    }

    /// Set up the instance logger and map the plugin vocabulary.
    ///
    /// Fails with [`InstantiateError::MissingUridMap`] when no map was
    /// offered, after reporting the failure through the logger.
    pub fn bind(self, config: &'static PluginConfig) -> InstantiateResult<(PropertyUris, Logger)> {
        let logger = Logger::new(self.log, config.name);

        let Some(map) = self.urid_map else {
            let err = InstantiateError::MissingUridMap;
            logger.error(format_args!("{}", err));
            return Err(err);
        };

        Ok((PropertyUris::map(map, &config.parameters), logger))
    }
}

// =============================================================================
// Processor Configuration
// =============================================================================

/// Audio configuration passed to [`Plugin::prepare()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioSetup {
    /// Sample rate in Hz (e.g., 44100.0, 48000.0, 96000.0)
    pub sample_rate: f64,
}

impl AudioSetup {
    pub const fn new(sample_rate: f64) -> Self {
        Self { sample_rate }
    }
}

// =============================================================================
// Plugin Trait
// =============================================================================

/// The unprepared plugin.
pub trait Plugin: Sized + Send + 'static {
    /// The prepared processor type.
    type Processor: AudioProcessor<Plugin = Self>;

    /// Create the plugin from its static configuration and the host's
    /// features.
    fn instantiate(config: &'static PluginConfig, features: HostFeatures<'_>) -> InstantiateResult<Self>;

    /// Build a processor for the given audio configuration.
    fn prepare(self, setup: AudioSetup) -> Self::Processor;
}

// =============================================================================
// AudioProcessor Trait
// =============================================================================

/// The prepared processor - ready for audio processing.
///
/// # Real-Time Safety
///
/// `process` and `process_f64` run on the audio thread. They must not
/// allocate, lock, make syscalls or loop without bound. The host calls them
/// one at a time per instance, which `&mut self` already guarantees.
pub trait AudioProcessor: Send + 'static {
    /// The unprepared plugin type that created this processor.
    type Plugin: Plugin<Processor = Self>;

    /// Run one cycle: decode `events`, then fill `output` from `input`.
    ///
    /// `input` and `output` have the same length, the cycle's sample count.
    fn process(&mut self, events: &[ControlEvent<'_>], input: &[f32], output: &mut [f32]);

    /// Returns true if [`process_f64()`](Self::process_f64) is implemented
    /// natively rather than through conversion in the host wrapper.
    fn supports_double_precision(&self) -> bool {
        false
    }

    /// Run one cycle at 64-bit precision.
    fn process_f64(&mut self, events: &[ControlEvent<'_>], input: &[f64], output: &mut [f64]);

    /// Return to the unprepared plugin state.
    ///
    /// Used when the sample rate changes. Parameter targets are preserved.
    fn unprepare(self) -> Self::Plugin
    where
        Self: Sized;
}

/// Instantiate and prepare a plugin in one step.
///
/// This is the shape of a typical host `instantiate` entry point, which hands
/// over the sample rate together with the features.
pub fn instantiate<P: Plugin>(
    config: &'static PluginConfig,
    sample_rate: f64,
    features: HostFeatures<'_>,
) -> InstantiateResult<P::Processor> {
    P::instantiate(config, features).map(|plugin| plugin.prepare(AudioSetup::new(sample_rate)))
}
