//! Action disambiguation for one update cycle.
//!
//! The presentation layer reports, for each user action, the timestamp of
//! its most recent invocation (or nothing if it never fired). Only one
//! action may apply per cycle; [`resolve`] picks it.

/// Occurrence timestamp of a user action, in epoch milliseconds.
///
/// Opaque to the engine: timestamps are only ever compared, never read
/// against a clock.
pub type Timestamp = i64;

/// The user actions a cycle can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    AddRow,
    AddColumn,
    SubmitExpression,
}

/// Pick the most recently fired candidate.
///
/// Candidates with an absent timestamp never win. Among the rest, the
/// greatest timestamp wins; an exact tie goes to the earliest-listed
/// candidate, so callers state tie priority through input order. Returns
/// `None` when no candidate fired.
///
/// Stateless: call it every cycle with the full candidate set, since
/// recency is relative across all sources.
pub fn resolve<T: Copy>(candidates: &[(T, Option<Timestamp>)]) -> Option<T> {
    let mut winner: Option<(T, Timestamp)> = None;
    for &(id, stamp) in candidates {
        let Some(stamp) = stamp else { continue };
        match winner {
            Some((_, best)) if stamp <= best => {}
            _ => winner = Some((id, stamp)),
        }
    }
    winner.map(|(id, _)| id)
}
