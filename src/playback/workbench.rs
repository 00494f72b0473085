//! One algorithm, its current input, and the session playing it

use super::config::PlaybackConfig;
use super::session::Session;
use crate::algorithms::registry::Algorithm;
use crate::input::InputParseError;
use tracing::{debug, info};

/// Owns the committed input and the session built from it
///
/// [`apply`](Workbench::apply) is all-or-nothing: if the new text fails to
/// parse, the committed input, trace, playback state and timer are exactly as
/// they were.
pub struct Workbench {
    algorithm: Algorithm,
    config: PlaybackConfig,
    input: String,
    param: String,
    session: Box<dyn Session>,
}

impl Workbench {
    pub fn new(
        algorithm: Algorithm,
        input: &str,
        param: &str,
        config: PlaybackConfig,
    ) -> Result<Self, InputParseError> {
        let session = algorithm.parse(input, param)?.into_session(config);
        info!(
            algorithm = algorithm.name(),
            steps = session.len(),
            "workbench ready"
        );
        Ok(Workbench {
            algorithm,
            config,
            input: input.to_string(),
            param: param.to_string(),
            session,
        })
    }

    /// Workbench on the algorithm's sample input with its default config
    pub fn with_sample(algorithm: Algorithm) -> Result<Self, InputParseError> {
        let spec = algorithm.spec();
        Workbench::new(
            algorithm,
            spec.sample_input,
            spec.sample_param,
            algorithm.config(),
        )
    }

    /// Parse, then swap the new trace into the session
    ///
    /// Nothing changes on a parse error. On success the live timer is
    /// cancelled, and the controller takes the new trace and returns to
    /// `Idle` at cursor 0 with an empty log.
    pub fn apply(&mut self, input: &str, param: &str) -> Result<(), InputParseError> {
        let parsed = match self.algorithm.parse(input, param) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(algorithm = self.algorithm.name(), %err, "apply rejected");
                return Err(err);
            }
        };

        parsed.reapply(&mut self.session, self.config);
        self.input = input.to_string();
        self.param = param.to_string();
        info!(
            algorithm = self.algorithm.name(),
            steps = self.session.len(),
            "input applied"
        );
        Ok(())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    /// Committed input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Committed parameter text
    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> &mut dyn Session {
        self.session.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackMode;
    use std::time::Instant;

    #[test]
    fn test_failed_apply_changes_nothing() {
        let mut bench = Workbench::with_sample(Algorithm::ThreeSum).unwrap();
        bench.session_mut().play(Instant::now());
        bench.session_mut().step();
        let before_state = bench.session().state();
        let before_timer = bench.session().timer_id();
        let before_len = bench.session().len();

        let err = bench.apply("1, two, 3", "").unwrap_err();
        assert!(matches!(err, InputParseError::NonNumeric { .. }));

        assert_eq!(bench.session().state(), before_state);
        assert_eq!(bench.session().timer_id(), before_timer);
        assert_eq!(bench.session().len(), before_len);
        assert_eq!(bench.input(), "-1,0,1,2,-1,-4");
    }

    #[test]
    fn test_successful_apply_replaces_session() {
        let mut bench = Workbench::with_sample(Algorithm::MergeSort).unwrap();
        bench.session_mut().play(Instant::now());
        bench.session_mut().step();

        bench.apply("4,2,1,3", "").unwrap();
        let session = bench.session();
        assert_eq!(session.state().mode, PlaybackMode::Idle);
        assert_eq!(session.state().cursor, 0);
        assert!(session.timer_id().is_none());
        assert!(session.log().is_empty());
        assert_eq!(bench.input(), "4,2,1,3");
        assert_eq!(
            session.views().last().unwrap().answer,
            "[1, 2, 3, 4]"
        );
    }

    #[test]
    fn test_tick_from_before_apply_is_stale() {
        let mut bench = Workbench::with_sample(Algorithm::SpiralOrder).unwrap();
        let start = Instant::now();
        bench.session_mut().play(start);
        let old = bench.session().timer_id().unwrap();
        assert!(bench.session_mut().tick(old));

        bench.apply("[[1,2],[3,4]]", "").unwrap();
        assert!(!bench.session_mut().tick(old));
        assert_eq!(bench.session().state().cursor, 0);

        bench.session_mut().play(start);
        let new = bench.session().timer_id().unwrap();
        assert_ne!(new, old);
        assert!(!bench.session_mut().tick(old));
        assert_eq!(bench.session().state().cursor, 0);
        assert!(bench.session_mut().tick(new));
        assert_eq!(bench.session().state().cursor, 1);
    }

    #[test]
    fn test_config_survives_apply() {
        let config = Algorithm::SpiralOrder.config().with_log_capacity(14);
        let mut bench = Workbench::new(Algorithm::SpiralOrder, "[[1,2],[3,4]]", "", config).unwrap();
        bench.apply("[[1]]", "").unwrap();
        assert_eq!(bench.session().log().capacity(), 14);
        assert_eq!(bench.config(), config);
    }
}
