//! Fixed-point rule-application engine.
//!
//! Applies an ordered rule list to a token buffer until a full pass leaves
//! the buffer unchanged. Work is bounded two ways: at most ten rounds, and a
//! per-rule wall-clock budget of `1 + N/1000` seconds (N = token count)
//! enforced by dispatching each rule onto a worker thread and waiting with a
//! timeout. Rules never run concurrently; the worker exists only so an
//! overrunning rule can be abandoned.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use swiftfmt_lexer::{first_parse_error, Token};
use tracing::{debug, trace};

use crate::error::FormatError;
use crate::formatter::Formatter;
use crate::options::{FileHeader, FormatOptions};
use crate::rules::FormatRule;

/// Rounds before the engine gives up on reaching a fixed point. Mutually
/// rewriting rules converge well inside this in practice; the one documented
/// oscillation source (the file-header rule) is clamped after round one.
const MAX_ROUNDS: usize = 10;

/// Apply `rules` to `tokens` until a fixed point is reached.
///
/// # Errors
///
/// - `Parsing` when the buffer contains an error token (outside fragment
///   mode) or a merge-conflict marker (unless ignored).
/// - `Options` when the options fail validation.
/// - `Writing` when a rule exceeds its time budget, panics, or no fixed
///   point is reached within the round limit.
pub fn apply_rules(
    rules: &[FormatRule],
    tokens: Vec<Token>,
    options: &FormatOptions,
) -> Result<Vec<Token>, FormatError> {
    apply_rules_with_callback(rules, tokens, options, |_, _, _| {})
}

/// [`apply_rules`] with a per-rule observer.
///
/// After each rule the callback receives the rule's index, the current
/// buffer, and the warnings that rule emitted. The warning sink is reset
/// between rules.
pub fn apply_rules_with_callback(
    rules: &[FormatRule],
    tokens: Vec<Token>,
    options: &FormatOptions,
    mut callback: impl FnMut(usize, &[Token], &[String]),
) -> Result<Vec<Token>, FormatError> {
    options.validate()?;
    if let Some(error) = first_parse_error(
        &tokens,
        options.fragment,
        options.ignore_conflict_markers,
        options.tab_width,
    ) {
        return Err(FormatError::Parsing(error.to_string()));
    }

    // Shared-inferable options: callers get the source's own conventions
    // unless they overrode them; the adjustment is invisible outside the
    // call because the engine works on its own copy.
    let mut working = options.clone();
    if let Some(linebreak) = inferred_linebreak(&tokens) {
        working.linebreak = linebreak.to_string();
    }

    let worker = RuleWorker::spawn();
    let mut current = tokens;
    for round in 0..MAX_ROUNDS {
        if round > 0 {
            // A replaced header re-triggering header replacement is the one
            // known oscillation; clamp it after the first round.
            working.file_header = FileHeader::Ignore;
        }
        let snapshot = current.clone();
        let mut formatter = Formatter::new(current, working.clone());
        for (index, rule) in rules.iter().enumerate() {
            let budget = Duration::from_secs(1 + formatter.tokens().len() as u64 / 1000);
            let started = Instant::now();
            formatter = worker.run(*rule, formatter, budget)?;
            let warnings = formatter.take_warnings();
            trace!(
                rule = rule.name(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                warnings = warnings.len(),
                "rule applied"
            );
            callback(index, formatter.tokens(), &warnings);
        }
        current = formatter.into_tokens();
        let converged = current == snapshot;
        debug!(round, converged, tokens = current.len(), "format round complete");
        if converged {
            return Ok(current);
        }
    }
    Err(FormatError::Writing(
        "failed to terminate: rules reached no fixed point after 10 rounds".to_string(),
    ))
}

/// Majority linebreak style of the buffer, if it has any linebreaks.
fn inferred_linebreak(tokens: &[Token]) -> Option<&'static str> {
    let mut unix = 0usize;
    let mut windows = 0usize;
    for token in tokens {
        if let Token::Linebreak(text) = token {
            if text == "\r\n" {
                windows += 1;
            } else {
                unix += 1;
            }
        }
    }
    if windows > unix {
        Some("\r\n")
    } else if unix > 0 {
        Some("\n")
    } else {
        None
    }
}

/// Single worker thread that rules are dispatched onto so the engine can
/// wait with a timeout. The formatter state travels through the channels;
/// on timeout the state (and the worker) are abandoned and the format call
/// fails fast, so no partial output escapes.
struct RuleWorker {
    jobs: mpsc::Sender<(FormatRule, Formatter)>,
    done: mpsc::Receiver<Formatter>,
}

impl RuleWorker {
    fn spawn() -> Self {
        let (jobs, job_rx) = mpsc::channel::<(FormatRule, Formatter)>();
        let (done_tx, done) = mpsc::channel();
        thread::spawn(move || {
            while let Ok((rule, mut formatter)) = job_rx.recv() {
                rule.apply(&mut formatter);
                if done_tx.send(formatter).is_err() {
                    break;
                }
            }
        });
        Self { jobs, done }
    }

    fn run(
        &self,
        rule: FormatRule,
        formatter: Formatter,
        budget: Duration,
    ) -> Result<Formatter, FormatError> {
        let name = rule.name();
        if self.jobs.send((rule, formatter)).is_err() {
            return Err(FormatError::Writing(format!("rule {name} crashed")));
        }
        match self.done.recv_timeout(budget) {
            Ok(formatter) => Ok(formatter),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(FormatError::Writing(format!(
                "rule {name} timed out after {} seconds",
                budget.as_secs()
            ))),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(FormatError::Writing(format!("rule {name} crashed")))
            }
        }
    }
}
