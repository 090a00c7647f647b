//! Propex Mono - gain and polarity property plugin.
//!
//! This plugin shows how to:
//! 1. Declare the plugin and parameter URIs in a static `PluginConfig`
//! 2. Bind host features (URID map, log sink) at instantiation
//! 3. Implement the two-phase Plugin → AudioProcessor lifecycle
//! 4. Decode `patch:Set` messages into parameter registers every cycle
//! 5. Apply the registers through a smoothed gain coefficient, in f32 or f64

use propex::prelude::*;

// =============================================================================
// Plugin Configuration
// =============================================================================

/// Plugin URI as listed in the descriptor.
pub const PLUGIN_URI: &str = "http://gareus.org/oss/lv2/property_example#mono";

/// URI of the gain parameter (float, dB).
pub const GAIN_URI: &str = "http://gareus.org/oss/lv2/property_example#gain";

/// URI of the polarity parameter (bool).
pub const POLARITY_URI: &str = "http://gareus.org/oss/lv2/property_example#polarity";

/// Shared plugin configuration.
pub static CONFIG: PluginConfig =
    PluginConfig::new(PLUGIN_URI, ParameterUris::new(GAIN_URI, POLARITY_URI)).with_name("PropEx");

/// Plugin descriptor lookup. This bundle contains a single plugin.
pub fn descriptor(index: u32) -> Option<&'static PluginConfig> {
    match index {
        0 => Some(&CONFIG),
        _ => None,
    }
}

// =============================================================================
// Plugin (Unprepared State)
// =============================================================================

/// The plugin in its unprepared state.
///
/// Holds everything that does not depend on the sample rate. Transformed
/// into a [`MonoGainProcessor`] by [`Plugin::prepare()`].
#[derive(Debug)]
pub struct MonoGainPlugin {
    decoder: EventDecoder,
    registers: ParameterRegisters,
    logger: Logger,
    cutoff_hz: f32,
}

impl MonoGainPlugin {
    /// Current parameter targets.
    pub fn registers(&self) -> &ParameterRegisters {
        &self.registers
    }
}

impl Plugin for MonoGainPlugin {
    type Processor = MonoGainProcessor;

    fn instantiate(config: &'static PluginConfig, features: HostFeatures<'_>) -> InstantiateResult<Self> {
        let (uris, logger) = features.bind(config)?;
        Ok(Self {
            decoder: EventDecoder::new(uris),
            registers: ParameterRegisters::new(),
            logger,
            cutoff_hz: config.cutoff_hz,
        })
    }

    fn prepare(self, setup: AudioSetup) -> MonoGainProcessor {
        MonoGainProcessor {
            decoder: self.decoder,
            registers: self.registers,
            logger: self.logger,
            smoothing: SmoothingState::new(setup.sample_rate, self.cutoff_hz),
            cutoff_hz: self.cutoff_hz,
        }
    }
}

// =============================================================================
// Audio Processor (Prepared State)
// =============================================================================

/// The plugin processor, ready for audio processing.
#[derive(Debug)]
pub struct MonoGainProcessor {
    decoder: EventDecoder,
    registers: ParameterRegisters,
    logger: Logger,
    smoothing: SmoothingState,
    cutoff_hz: f32,
}

impl MonoGainProcessor {
    /// Run one cycle.
    ///
    /// `events` is `None` when the host has not connected the control port;
    /// the cycle then runs with no parameter changes.
    pub fn run<S: Sample>(
        &mut self,
        events: Option<&[ControlEvent<'_>]>,
        input: &[S],
        output: &mut [S],
    ) -> DecodeReport {
        let report = self.decode(events);
        self.smoothing.process(&self.registers, input, output);
        report
    }

    /// Run one cycle with input and output sharing one buffer.
    pub fn run_in_place<S: Sample>(
        &mut self,
        events: Option<&[ControlEvent<'_>]>,
        buffer: &mut [S],
    ) -> DecodeReport {
        let report = self.decode(events);
        self.smoothing.process_in_place(&self.registers, buffer);
        report
    }

    /// Current parameter targets.
    pub fn registers(&self) -> &ParameterRegisters {
        &self.registers
    }

    /// Current smoothing state.
    pub fn smoothing(&self) -> &SmoothingState {
        &self.smoothing
    }

    fn decode(&mut self, events: Option<&[ControlEvent<'_>]>) -> DecodeReport {
        match events {
            Some(events) => self
                .decoder
                .decode_and_apply(events, &mut self.registers, &self.logger),
            None => DecodeReport::default(),
        }
    }
}

impl AudioProcessor for MonoGainProcessor {
    type Plugin = MonoGainPlugin;

    fn process(&mut self, events: &[ControlEvent<'_>], input: &[f32], output: &mut [f32]) {
        self.run(Some(events), input, output);
    }

    fn supports_double_precision(&self) -> bool {
        true
    }

    fn process_f64(&mut self, events: &[ControlEvent<'_>], input: &[f64], output: &mut [f64]) {
        self.run(Some(events), input, output);
    }

    fn unprepare(self) -> MonoGainPlugin {
        // Smoothing state belongs to the old sample rate and is dropped
        MonoGainPlugin {
            decoder: self.decoder,
            registers: self.registers,
            logger: self.logger,
            cutoff_hz: self.cutoff_hz,
        }
    }
}
