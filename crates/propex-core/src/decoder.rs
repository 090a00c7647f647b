//! Control event decoding.
//!
//! [`EventDecoder`] walks the control events of one cycle in arrival order
//! and turns every well-formed `patch:Set` message for a known parameter into
//! a [`ParameterChange`] on the [`ParameterRegisters`].
//!
//! # Filtering
//!
//! - Events whose body is not an object are skipped silently.
//! - Objects whose type is not `patch:Set` are skipped silently.
//! - Everything else is either applied or rejected with a [`DecodeError`],
//!   which is logged at error severity. A rejected event never stops the
//!   cycle.
//! - A gain whose coefficient is not finite and positive is rejected, so the
//!   registers never hold a target the smoother cannot recover from.
//!
//! # Timing
//!
//! Event frame offsets are ignored. All changes of a cycle are applied before
//! any audio of that cycle is processed, so when one parameter is set several
//! times in a cycle, the last value wins. Hosts disagree about where inside
//! the cycle automation points land (some use the last frame, some the first),
//! so there is no timing convention worth honoring here.

use crate::atom::{Atom, ControlEvent, Object};
use crate::error::{DecodeError, DecodeErrorKind, Malformed};
use crate::logger::Logger;
use crate::registers::{db_to_coefficient, Parameter, ParameterChange, ParameterRegisters};
use crate::uris::PropertyUris;

/// Outcome counts of one [`EventDecoder::decode_and_apply`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Changes written to the registers.
    pub applied: usize,
    /// Rejected `patch:Set` messages, all kinds.
    pub errors: usize,
    pub malformed: usize,
    pub invalid_type: usize,
    pub unknown_property: usize,
    pub out_of_range: usize,
}

impl DecodeReport {
    fn record_error(&mut self, kind: DecodeErrorKind) {
        self.errors += 1;
        match kind {
            DecodeErrorKind::MalformedMessage => self.malformed += 1,
            DecodeErrorKind::InvalidValueType => self.invalid_type += 1,
            DecodeErrorKind::UnknownProperty => self.unknown_property += 1,
            DecodeErrorKind::GainOutOfRange => self.out_of_range += 1,
        }
    }
}

/// Decodes property messages against a mapped vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct EventDecoder {
    uris: PropertyUris,
}

impl EventDecoder {
    pub fn new(uris: PropertyUris) -> Self {
        Self { uris }
    }

    pub fn uris(&self) -> &PropertyUris {
        &self.uris
    }

    /// Apply every valid parameter change in `events` to `registers`.
    ///
    /// Accepted values are logged at note severity, rejected messages at
    /// error severity.
    pub fn decode_and_apply(
        &self,
        events: &[ControlEvent<'_>],
        registers: &mut ParameterRegisters,
        logger: &Logger,
    ) -> DecodeReport {
        let mut report = DecodeReport::default();

        for event in events {
            let Some(object) = self.set_message(&event.body) else {
                continue;
            };

            match self.parse_property(object) {
                Ok(change) => {
                    match change {
                        ParameterChange::Gain(db) => {
                            logger.note(format_args!("received gain = {}", db))
                        }
                        ParameterChange::Polarity(inverted) => {
                            logger.note(format_args!("received polarity = {}", inverted))
                        }
                    }
                    registers.apply(change);
                    report.applied += 1;
                }
                Err(err) => {
                    logger.error(format_args!("{}", err));
                    report.record_error(err.kind());
                }
            }
        }

        report
    }

    /// The object of a `patch:Set` message, or `None` for anything else.
    #[inline]
    pub fn set_message<'e, 'a>(&self, body: &'e Atom<'a>) -> Option<&'e Object<'a>> {
        body.as_object()
            .filter(|object| object.otype == self.uris.patch_set)
    }

    /// Validate one `patch:Set` object and extract the change it carries.
    pub fn parse_property(&self, object: &Object<'_>) -> Result<ParameterChange, DecodeError> {
        let property = object
            .get(self.uris.patch_property)
            .ok_or(Malformed::MissingProperty)?
            .as_urid()
            .ok_or(Malformed::NonUridProperty)?;

        let value = object
            .get(self.uris.patch_value)
            .ok_or(Malformed::MissingValue)?;

        let parameter = self
            .uris
            .parameter(property)
            .ok_or(DecodeError::UnknownProperty(property))?;

        let mismatch = || DecodeError::InvalidValueType {
            parameter,
            expected: parameter.value_kind(),
            found: value.kind(),
        };

        match parameter {
            Parameter::Gain => {
                let db = value.as_float().ok_or_else(mismatch)?;
                // Target coefficient must stay finite and positive
                let coefficient = db_to_coefficient(db);
                if coefficient.is_finite() && coefficient > 0.0 {
                    Ok(ParameterChange::Gain(db))
                } else {
                    Err(DecodeError::GainOutOfRange(db))
                }
            }
            Parameter::Polarity => value
                .as_bool()
                .map(ParameterChange::Polarity)
                .ok_or_else(mismatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::{AtomKind, Property};
    use crate::config::ParameterUris;
    use crate::logger::testing::RecordingSink;
    use crate::logger::LogLevel;
    use crate::uris::{HashUridMap, UridMap};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const PARAMS: ParameterUris = ParameterUris::new("urn:test#gain", "urn:test#polarity");
    const OTHER_TYPE: u32 = 0xdead;

    fn decoder() -> EventDecoder {
        EventDecoder::new(PropertyUris::map(&HashUridMap, &PARAMS))
    }

    fn set_body<'a>(d: &EventDecoder, property: Atom<'a>, value: Atom<'a>) -> [Property<'a>; 2] {
        [
            Property::new(d.uris().patch_property, property),
            Property::new(d.uris().patch_value, value),
        ]
    }

    #[test]
    fn test_gain_sets_coefficient() {
        let d = decoder();
        let body = set_body(&d, Atom::Urid(d.uris().gain), Atom::Float(-20.0));
        let events = [ControlEvent::new(0, Atom::Object(Object::new(d.uris().patch_set, &body)))];

        let sink = RecordingSink::default();
        let mut registers = ParameterRegisters::new();
        let report = d.decode_and_apply(&events, &mut registers, &sink.logger());

        assert_eq!(report.applied, 1);
        assert_eq!(report.errors, 0);
        assert_relative_eq!(registers.target_gain_coefficient, 0.1, max_relative = 1e-6);
        assert_eq!(sink.entries()[0], (LogLevel::Note, "Test: received gain = -20".to_string()));
    }

    #[test]
    fn test_polarity_sets_flag() {
        let d = decoder();
        let body = set_body(&d, Atom::Urid(d.uris().polarity), Atom::Bool(true));
        let events = [ControlEvent::new(3, Atom::Object(Object::new(d.uris().patch_set, &body)))];

        let mut registers = ParameterRegisters::new();
        let report = d.decode_and_apply(&events, &mut registers, &RecordingSink::default().logger());

        assert_eq!(report.applied, 1);
        assert!(registers.polarity_inverted);
        assert_eq!(registers.target_gain_coefficient, 1.0);
    }

    #[test]
    fn test_last_write_wins() {
        let d = decoder();
        let first = set_body(&d, Atom::Urid(d.uris().gain), Atom::Float(-6.0));
        let second = set_body(&d, Atom::Urid(d.uris().gain), Atom::Float(0.0));
        let events = [
            ControlEvent::new(0, Atom::Object(Object::new(d.uris().patch_set, &first))),
            ControlEvent::new(0, Atom::Object(Object::new(d.uris().patch_set, &second))),
        ];

        let mut registers = ParameterRegisters::new();
        registers.target_gain_coefficient = 0.25;
        let report = d.decode_and_apply(&events, &mut registers, &RecordingSink::default().logger());

        assert_eq!(report.applied, 2);
        assert_eq!(registers.target_gain_coefficient, 1.0);
    }

    #[test]
    fn test_frame_offsets_do_not_reorder() {
        let d = decoder();
        let early = set_body(&d, Atom::Urid(d.uris().polarity), Atom::Bool(false));
        let late = set_body(&d, Atom::Urid(d.uris().polarity), Atom::Bool(true));
        // Arrival order decides, not the frame offset
        let events = [
            ControlEvent::new(100, Atom::Object(Object::new(d.uris().patch_set, &late))),
            ControlEvent::new(0, Atom::Object(Object::new(d.uris().patch_set, &early))),
        ];

        let mut registers = ParameterRegisters::new();
        d.decode_and_apply(&events, &mut registers, &RecordingSink::default().logger());
        assert!(!registers.polarity_inverted);
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let d = decoder();
        let body = set_body(&d, Atom::Urid(d.uris().gain), Atom::Bool(true));
        let events = [ControlEvent::new(0, Atom::Object(Object::new(d.uris().patch_set, &body)))];

        let sink = RecordingSink::default();
        let mut registers = ParameterRegisters::new();
        let report = d.decode_and_apply(&events, &mut registers, &sink.logger());

        assert_eq!(registers, ParameterRegisters::new());
        assert_eq!(report.applied, 0);
        assert_eq!(report.errors, 1);
        assert_eq!(report.invalid_type, 1);
        assert_eq!(sink.count(LogLevel::Error), 1);
        assert!(sink.entries()[0].1.contains("expected 'float'"));
    }

    #[test]
    fn test_non_finite_gain_rejected() {
        let d = decoder();
        let sink = RecordingSink::default();
        let mut registers = ParameterRegisters::new();
        registers.target_gain_coefficient = 0.5;

        for db in [f32::NAN, f32::INFINITY, 1000.0, -1000.0] {
            let body = set_body(&d, Atom::Urid(d.uris().gain), Atom::Float(db));
            let object = Object::new(d.uris().patch_set, &body);
            let events = [ControlEvent::new(0, Atom::Object(object))];

            let report = d.decode_and_apply(&events, &mut registers, &sink.logger());

            assert_eq!(report.applied, 0);
            assert_eq!(report.out_of_range, 1);
            assert_eq!(report.errors, 1);
            assert!(matches!(d.parse_property(&object), Err(DecodeError::GainOutOfRange(_))));
        }

        assert_eq!(registers.target_gain_coefficient, 0.5);
        assert_eq!(sink.count(LogLevel::Error), 4);
        assert_eq!(sink.entries()[2].1, "Test: gain 1000 dB is out of range");
    }

    #[test]
    fn test_polarity_requires_bool() {
        let d = decoder();
        let body = set_body(&d, Atom::Urid(d.uris().polarity), Atom::Float(1.0));
        let object = Object::new(d.uris().patch_set, &body);

        assert_eq!(
            d.parse_property(&object),
            Err(DecodeError::InvalidValueType {
                parameter: Parameter::Polarity,
                expected: AtomKind::Bool,
                found: AtomKind::Float,
            })
        );
    }

    #[test]
    fn test_unknown_property_rejected() {
        let d = decoder();
        let stranger = HashUridMap.map("urn:test#volume");
        let body = set_body(&d, Atom::Urid(stranger), Atom::Float(3.0));
        let events = [ControlEvent::new(0, Atom::Object(Object::new(d.uris().patch_set, &body)))];

        let sink = RecordingSink::default();
        let mut registers = ParameterRegisters::new();
        let report = d.decode_and_apply(&events, &mut registers, &sink.logger());

        assert_eq!(registers, ParameterRegisters::new());
        assert_eq!(report.unknown_property, 1);
        assert_eq!(report.errors, 1);
        assert_eq!(sink.count(LogLevel::Error), 1);
        assert_eq!(
            d.parse_property(&Object::new(d.uris().patch_set, &body)),
            Err(DecodeError::UnknownProperty(stranger))
        );
    }

    #[test]
    fn test_malformed_messages() {
        let d = decoder();
        let uris = *d.uris();

        let no_property = [Property::new(uris.patch_value, Atom::Float(0.0))];
        let non_urid = set_body(&d, Atom::Int(5), Atom::Float(0.0));
        let no_value = [Property::new(uris.patch_property, Atom::Urid(uris.gain))];

        let cases = [
            (&no_property[..], Malformed::MissingProperty),
            (&non_urid[..], Malformed::NonUridProperty),
            (&no_value[..], Malformed::MissingValue),
        ];
        for (body, expected) in cases {
            let object = Object::new(uris.patch_set, body);
            assert_eq!(d.parse_property(&object), Err(DecodeError::MalformedMessage(expected)));
        }
    }

    #[test]
    fn test_errors_do_not_abort_cycle() {
        let d = decoder();
        let uris = *d.uris();
        let bad = [Property::new(uris.patch_value, Atom::Float(0.0))];
        let good = set_body(&d, Atom::Urid(uris.gain), Atom::Float(6.0));
        let events = [
            ControlEvent::new(0, Atom::Object(Object::new(uris.patch_set, &bad))),
            ControlEvent::new(0, Atom::Object(Object::new(uris.patch_set, &good))),
        ];

        let mut registers = ParameterRegisters::new();
        let report = d.decode_and_apply(&events, &mut registers, &RecordingSink::default().logger());

        assert_eq!(report.malformed, 1);
        assert_eq!(report.applied, 1);
        assert_relative_eq!(registers.target_gain_coefficient, 1.995_262, max_relative = 1e-5);
    }

    #[test]
    fn test_non_set_events_skipped_silently() {
        let d = decoder();
        let uris = *d.uris();
        let body = set_body(&d, Atom::Urid(uris.gain), Atom::Float(-6.0));
        let events = [
            ControlEvent::new(0, Atom::Float(-6.0)),
            ControlEvent::new(0, Atom::Other { type_urid: 77 }),
            ControlEvent::new(0, Atom::Object(Object::new(OTHER_TYPE, &body))),
        ];

        let sink = RecordingSink::default();
        let mut registers = ParameterRegisters::new();
        let report = d.decode_and_apply(&events, &mut registers, &sink.logger());

        assert_eq!(report, DecodeReport::default());
        assert_eq!(registers, ParameterRegisters::new());
        assert!(sink.entries().is_empty());
    }

    proptest! {
        #[test]
        fn prop_last_gain_wins(values in proptest::collection::vec(-60.0f32..12.0, 1..16)) {
            let d = decoder();
            let bodies: Vec<_> = values
                .iter()
                .map(|&db| set_body(&d, Atom::Urid(d.uris().gain), Atom::Float(db)))
                .collect();
            let events: Vec<_> = bodies
                .iter()
                .map(|body| ControlEvent::new(0, Atom::Object(Object::new(d.uris().patch_set, body))))
                .collect();

            let mut registers = ParameterRegisters::new();
            let report = d.decode_and_apply(&events, &mut registers, &Logger::fallback("Test"));

            prop_assert_eq!(report.applied, values.len());
            let last = *values.last().unwrap();
            prop_assert_eq!(registers.target_gain_coefficient, db_to_coefficient(last));
        }
    }
}
